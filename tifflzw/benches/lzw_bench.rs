//! Performance benchmarks for tifflzw
//!
//! This benchmark suite evaluates:
//! - Compression/decompression speed across tile sizes
//! - Cost of the horizontal differencing predictor
//! - Comparison with the weezl implementation

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tifflzw::{
    LzwConfig, Predictor, RowLayout, compress, compress_tiff, decompress, decompress_tiff,
};

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns, forces regular clear codes
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Grayscale tile with smooth gradients
    pub fn image_like(size: usize) -> Vec<u8> {
        let side = (size as f64).sqrt() as usize;
        let mut data = Vec::with_capacity(size);

        for y in 0..side {
            for x in 0..side {
                let value = ((x * 255 / side) + (y * 255 / side)) / 2;
                data.push(value.min(255) as u8);
            }
        }

        data.resize(size, 128);
        data
    }
}

/// Standard tile sizes for TIFF benchmarking
mod tile_sizes {
    /// Small tile: 256x256 pixels = 64KB
    pub const SMALL: usize = 256 * 256;

    /// Medium tile: 512x512 pixels = 256KB
    pub const MEDIUM: usize = 512 * 512;
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("image", test_data::image_like as PatternGenerator),
];

const SIZES: [(&str, usize); 2] = [
    ("small_64KB", tile_sizes::SMALL),
    ("medium_256KB", tile_sizes::MEDIUM),
];

/// Benchmark compression speed for different data sizes and patterns
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| black_box(compress_tiff(black_box(data))));
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let compressed = compress_tiff(&generator(size));
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &(compressed, size),
                |b, (compressed, size)| {
                    b.iter(|| {
                        let decompressed = decompress_tiff(black_box(compressed), *size).unwrap();
                        black_box(decompressed);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the predictor on top of the codec
fn bench_predictor(c: &mut Criterion) {
    let mut group = c.benchmark_group("predictor");

    let side = 512;
    let data = test_data::image_like(side * side);
    let config = LzwConfig::LIBTIFF
        .with_predictor(Predictor::HorizontalDifferencing, RowLayout::grayscale(side));
    let compressed = compress(&data, config).unwrap();

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("compress_horizontal", |b| {
        b.iter(|| black_box(compress(black_box(&data), config).unwrap()));
    });
    group.bench_function("decompress_horizontal", |b| {
        b.iter(|| black_box(decompress(black_box(&compressed), data.len(), config).unwrap()));
    });

    group.finish();
}

/// Compare with weezl implementation
fn bench_compare_weezl(c: &mut Criterion) {
    use weezl::BitOrder;
    use weezl::decode::Decoder as WeezlDecoder;
    use weezl::encode::Encoder as WeezlEncoder;

    let mut group = c.benchmark_group("compare_weezl");
    let size = tile_sizes::MEDIUM;

    for (pattern_name, generator) in PATTERNS {
        let data = generator(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("tifflzw_compress", pattern_name),
            &data,
            |b, data| {
                b.iter(|| black_box(compress_tiff(black_box(data))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("weezl_compress", pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut encoder = WeezlEncoder::with_tiff_size_switch(BitOrder::Msb, 8);
                    black_box(encoder.encode(black_box(data)).ok());
                });
            },
        );

        // Both decoders read the same libtiff-style stream.
        let compressed = compress(&data, LzwConfig::LIBTIFF).unwrap();

        group.bench_with_input(
            BenchmarkId::new("tifflzw_decompress", pattern_name),
            &compressed,
            |b, compressed| {
                b.iter(|| black_box(decompress_tiff(black_box(compressed), size).unwrap()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("weezl_decompress", pattern_name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let mut decoder = WeezlDecoder::with_tiff_size_switch(BitOrder::Msb, 8);
                    black_box(decoder.decode(black_box(compressed)).ok());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_predictor,
    bench_compare_weezl,
);
criterion_main!(benches);
