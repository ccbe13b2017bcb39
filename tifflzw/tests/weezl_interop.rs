//! Cross-checks against the `weezl` TIFF LZW implementation.

use tifflzw::{LzwConfig, compress, decompress_tiff};
use weezl::BitOrder;
use weezl::decode::Decoder as WeezlDecoder;
use weezl::encode::Encoder as WeezlEncoder;

fn weezl_compress(data: &[u8]) -> Vec<u8> {
    WeezlEncoder::with_tiff_size_switch(BitOrder::Msb, 8)
        .encode(data)
        .expect("weezl compression failed")
}

fn weezl_decompress(data: &[u8]) -> Vec<u8> {
    WeezlDecoder::with_tiff_size_switch(BitOrder::Msb, 8)
        .decode(data)
        .expect("weezl decompression failed")
}

fn pseudo_random(size: usize) -> Vec<u8> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect()
}

#[test]
fn test_weezl_decodes_our_streams() {
    let cases: Vec<(&str, Vec<u8>)> = vec![
        ("310 bytes", b"This is a test of compression! ".repeat(10)),
        ("text", b"The quick brown fox jumps over the lazy dog. ".repeat(200)),
        ("all byte values", (0..=255).collect()),
        ("uniform", vec![0xAA; 20_000]),
        ("random with clears", pseudo_random(30_000)),
    ];

    for (name, original) in cases {
        let compressed = compress(&original, LzwConfig::LIBTIFF).expect("compression failed");
        assert_eq!(weezl_decompress(&compressed), original, "{}", name);
    }
}

#[test]
fn test_we_decode_weezl_streams() {
    // Small enough that weezl never fills the table.
    let cases: Vec<(&str, Vec<u8>)> = vec![
        ("single byte", b"A".to_vec()),
        ("TOBEORNOT", b"TOBEORNOTTOBEORTOBEORNOT".to_vec()),
        ("310 bytes", b"This is a test of compression! ".repeat(10)),
        ("run", vec![b'X'; 1000]),
        ("short random", pseudo_random(200)),
    ];

    for (name, original) in cases {
        let compressed = weezl_compress(&original);
        let decompressed =
            decompress_tiff(&compressed, original.len()).expect("decompression failed");
        assert_eq!(decompressed, original, "{}", name);
    }
}
