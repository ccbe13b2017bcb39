//! `std::io` adapters for moving compressed strips in and out of a container.
//!
//! The codec itself works on whole buffers; these helpers only shuttle the
//! compressed bytes between a reader or writer and [`compress`] /
//! [`decompress`].

use crate::config::LzwConfig;
use crate::error::Result;
use crate::{compress, decompress};
use std::io::{self, Read, Seek, SeekFrom, Write};
use tracing::debug;

/// Compress `data` and write the stream to `writer`.
///
/// Returns the number of compressed bytes written.
pub fn compress_to_writer<W: Write>(
    data: &[u8],
    config: LzwConfig,
    mut writer: W,
) -> Result<usize> {
    let compressed = compress(data, config)?;
    writer.write_all(&compressed)?;
    writer.flush()?;
    Ok(compressed.len())
}

/// Read a whole compressed stream from `reader` and decompress it.
pub fn decompress_from_reader<R: Read>(
    mut reader: R,
    expected_size: usize,
    config: LzwConfig,
) -> Result<Vec<u8>> {
    let mut compressed = Vec::new();
    reader.read_to_end(&mut compressed)?;
    decompress(&compressed, expected_size, config)
}

/// Decompress one strip or tile of `byte_count` compressed bytes starting
/// at `offset` in a seekable container.
pub fn decompress_segment<R: Read + Seek>(
    reader: &mut R,
    offset: u64,
    byte_count: usize,
    expected_size: usize,
    config: LzwConfig,
) -> Result<Vec<u8>> {
    debug!(offset, byte_count, expected_size, "reading LZW segment");

    reader.seek(SeekFrom::Start(offset))?;
    let mut compressed = Vec::new();
    reader
        .by_ref()
        .take(byte_count as u64)
        .read_to_end(&mut compressed)?;
    if compressed.len() < byte_count {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "segment at offset {offset} needs {byte_count} bytes, container holds {}",
                compressed.len()
            ),
        )
        .into());
    }
    decompress(&compressed, expected_size, config)
}
