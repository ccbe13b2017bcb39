//! Whole-tile round trips over image-like patterns that walk the code width
//! through every step and across several clear codes.

use tifflzw::{LzwConfig, LzwDecoder, LzwEncoder, Predictor, RowLayout, compress, decompress};

/// Diagonal ramp that wraps every 256 pixels.
fn create_modulo_pattern(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

/// Slow gradient, four pixels per step.
fn create_gradient_pattern(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) / 4) as u8);
        }
    }
    data
}

fn roundtrip(data: &[u8], config: LzwConfig) {
    let mut encoder = LzwEncoder::new(config);
    let compressed = encoder.encode(data);

    let mut decoder = LzwDecoder::new();
    let decompressed = decoder
        .decode(&compressed, data.len())
        .expect("Failed to decode");

    assert_eq!(decompressed.len(), data.len(), "Size mismatch");
    assert_eq!(decompressed, data, "Data mismatch");
    assert_eq!(decoder.stats().clear_codes, encoder.stats().clear_codes);
}

#[test]
fn test_modulo_pattern_full_image() {
    let data = create_modulo_pattern(512, 512);
    roundtrip(&data, LzwConfig::TIFF);
    roundtrip(&data, LzwConfig::LIBTIFF);
}

#[test]
fn test_gradient_pattern_full_image() {
    let data = create_gradient_pattern(512, 512);
    roundtrip(&data, LzwConfig::TIFF);
}

#[test]
fn test_single_tile_256x256() {
    let data = create_modulo_pattern(256, 256);
    roundtrip(&data, LzwConfig::TIFF);
}

#[test]
fn test_gradient_tile_with_predictor() {
    let (width, height) = (256, 256);
    let data = create_gradient_pattern(width, height);
    let config = LzwConfig::LIBTIFF
        .with_predictor(Predictor::HorizontalDifferencing, RowLayout::grayscale(width));

    let compressed = compress(&data, config).expect("Failed to encode");
    let decompressed = decompress(&compressed, data.len(), config).expect("Failed to decode");
    assert_eq!(decompressed, data);
}
