//! Compress command implementation.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tifflzw::LzwConfig;
use tifflzw::io::compress_to_writer;
use tracing::info;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    config: LzwConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let writer = BufWriter::new(File::create(output)?);

    let written = compress_to_writer(&data, config, writer)?;
    info!(input = %input.display(), raw = data.len(), compressed = written, "compressed");

    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        data.len(),
        written
    );
    if !data.is_empty() {
        println!(
            "Compression ratio: {:.1}%",
            written as f64 / data.len() as f64 * 100.0
        );
    }

    Ok(())
}
