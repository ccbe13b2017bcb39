//! # tifflzw: Pure Rust TIFF LZW
//!
//! LZW compression and decompression of TIFF strips and tiles, with the
//! TIFF horizontal differencing predictor.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **TIFF LZW**: MSB-first bit order, 9-12 bit codes, early code change
//! - **Predictor**: Horizontal differencing for chunky 8-bit samples
//! - **Strict decoding**: Corrupt or truncated streams fail with a typed error
//!
//! ## TIFF LZW Stream Format
//!
//! - **MSB-first bit order**: Codes are packed from the most significant bit
//! - **9-12 bit codes**: Width starts at 9 bits and never exceeds 12
//! - **Early code change**: Width grows one code earlier than plain LZW
//! - **Clear code (256)**: Resets the dictionary; sent before the table overflows
//! - **EOI code (257)**: Ends the stream; the last byte is zero padded
//!
//! ## Example
//!
//! ```rust
//! use tifflzw::{compress_tiff, decompress_tiff};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress_tiff(original);
//! let decompressed = decompress_tiff(&compressed, original.len()).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Predictor
//!
//! ```rust
//! use tifflzw::{compress, decompress, LzwConfig, Predictor, RowLayout};
//!
//! // 4x2 RGB image.
//! let pixels: Vec<u8> = (0..24).map(|i| (i * 10) as u8).collect();
//! let config = LzwConfig::LIBTIFF
//!     .with_predictor(Predictor::HorizontalDifferencing, RowLayout::new(4, 3));
//!
//! let compressed = compress(&pixels, config).unwrap();
//! let decompressed = decompress(&compressed, pixels.len(), config).unwrap();
//! assert_eq!(decompressed, pixels);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream_msb;
mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
pub mod io;
mod predictor;
mod stats;

pub use bitstream_msb::{MAX_CODE_WIDTH, MIN_CODE_WIDTH, MsbBitReader, MsbBitWriter};
pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use dictionary::{
    CLEAR_CODE, CODE_LIMIT, DecodeDictionary, EOI_CODE, EncodeDictionary, FIRST_CODE,
};
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use predictor::{
    PREDICTOR_FLOATING_POINT, PREDICTOR_HORIZONTAL, PREDICTOR_NONE, Predictor, RowLayout,
};
pub use stats::CodecStats;

/// Compress data with LZW using the given configuration.
///
/// Runs the configured predictor on a copy of `data`, then encodes it.
///
/// # Errors
///
/// Only the predictor can fail: [`LzwError::MissingRowLayout`] or
/// [`LzwError::InvalidRowLayout`].
///
/// # Example
///
/// ```rust
/// use tifflzw::{compress, LzwConfig};
///
/// let data = b"TOBEORNOTTOBEORTOBEORNOT";
/// let compressed = compress(data, LzwConfig::TIFF).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(config);

    match config.active_predictor()? {
        None => Ok(encoder.encode(data)),
        Some((predictor, layout)) => {
            let mut differenced = data.to_vec();
            predictor.apply(&mut differenced, layout)?;
            Ok(encoder.encode(&differenced))
        }
    }
}

/// Decompress LZW-compressed data and undo the configured predictor.
///
/// # Parameters
///
/// - `data`: LZW-compressed input
/// - `expected_size`: Size of the decompressed strip, known from the image geometry
/// - `config`: Configuration the data was compressed with
///
/// # Example
///
/// ```rust
/// use tifflzw::{compress, decompress, LzwConfig};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original, LzwConfig::TIFF).unwrap();
/// let decompressed = decompress(&compressed, original.len(), LzwConfig::TIFF).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress(data: &[u8], expected_size: usize, config: LzwConfig) -> Result<Vec<u8>> {
    let predictor = config.active_predictor()?;

    let mut output = LzwDecoder::new().decode(data, expected_size)?;
    if let Some((predictor, layout)) = predictor {
        predictor.reverse(&mut output, layout)?;
    }
    Ok(output)
}

/// Compress data with plain TIFF LZW (convenience function).
///
/// This is equivalent to `compress(data, LzwConfig::TIFF)`, which cannot
/// fail without a predictor.
///
/// # Example
///
/// ```rust
/// use tifflzw::compress_tiff;
///
/// let data = b"This is a TIFF LZW test";
/// let compressed = compress_tiff(data);
/// assert!(!compressed.is_empty());
/// ```
pub fn compress_tiff(data: &[u8]) -> Vec<u8> {
    LzwEncoder::new(LzwConfig::TIFF).encode(data)
}

/// Decompress TIFF LZW data (convenience function).
///
/// This is equivalent to `decompress(data, expected_size, LzwConfig::TIFF)`.
///
/// # Example
///
/// ```rust
/// use tifflzw::{compress_tiff, decompress_tiff};
///
/// let original = b"This is a TIFF LZW test";
/// let compressed = compress_tiff(original);
/// let decompressed = decompress_tiff(&compressed, original.len()).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress_tiff(data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    LzwDecoder::new().decode(data, expected_size)
}
