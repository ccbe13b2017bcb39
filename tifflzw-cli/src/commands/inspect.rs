//! Inspect command implementation.

use std::fs;
use std::path::Path;
use tifflzw::{CLEAR_CODE, LzwDecoder, MIN_CODE_WIDTH, MsbBitReader};

pub fn cmd_inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    let leading_clear = MsbBitReader::new(&data)
        .read_code(MIN_CODE_WIDTH)
        .is_ok_and(|code| code == CLEAR_CODE);

    let mut decoder = LzwDecoder::new();
    let decoded = decoder.decode_to_end(&data)?;
    let stats = decoder.stats();

    println!("Stream Information");
    println!("==================");
    println!("File: {}", input.display());
    println!("Compressed size: {} bytes", data.len());
    println!("Decompressed size: {} bytes", decoded.len());
    println!("Codes: {}", stats.codes);
    println!("Clear codes: {}", stats.clear_codes);
    println!(
        "Leading clear code: {}",
        if leading_clear { "yes" } else { "no" }
    );
    println!("Widest code: {} bits", stats.peak_code_width);
    if !decoded.is_empty() {
        println!("Compression ratio: {:.1}%", stats.ratio() * 100.0);
    }

    Ok(())
}
