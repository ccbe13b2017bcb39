//! Decompress command implementation.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tifflzw::LzwConfig;
use tifflzw::io::{decompress_from_reader, decompress_segment};

/// `segment` is `(offset, byte_count)` of one strip inside a larger file.
pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    size: usize,
    segment: Option<(u64, usize)>,
    config: LzwConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(input)?);

    let data = match segment {
        Some((offset, byte_count)) => {
            decompress_segment(&mut reader, offset, byte_count, size, config)?
        }
        None => decompress_from_reader(reader, size, config)?,
    };

    fs::write(output, &data)?;
    println!(
        "{} -> {} ({} bytes)",
        input.display(),
        output.display(),
        data.len()
    );

    Ok(())
}
