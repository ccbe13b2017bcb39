//! LZW-specific error types.

use thiserror::Error;

/// TIFF LZW compression/decompression errors.
///
/// Every decoding error is fatal: the decoder stops at the point of
/// violation and returns no partial output.
#[derive(Debug, Error)]
pub enum LzwError {
    /// The bit reader ran out of input in the middle of a code.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEndOfStream {
        /// Bit position where the stream ran dry.
        position: u64,
    },

    /// A code greater than the next assignable code was read, or the
    /// not-yet-assigned code appeared with no previous code to derive it from.
    #[error("Invalid LZW code {code} (next assignable code is {next_code})")]
    InvalidCode {
        /// The offending code.
        code: u16,
        /// Next assignable code at the time the code was read.
        next_code: u16,
    },

    /// The stream needs a new dictionary entry but the table is full and
    /// no clear code was sent.
    #[error("Dictionary overflow without clear code at bit position {position}")]
    DictionaryOverflowWithoutClear {
        /// Bit position of the code that would have overflowed the table.
        position: u64,
    },

    /// TIFF predictor tag value this codec does not implement.
    #[error("Unsupported TIFF predictor: {0}")]
    UnsupportedPredictor(u16),

    /// Row geometry that cannot drive the predictor.
    #[error("Invalid row layout: width {width}, samples per pixel {samples_per_pixel}")]
    InvalidRowLayout {
        /// Pixels per row.
        width: usize,
        /// Interleaved samples per pixel.
        samples_per_pixel: usize,
    },

    /// Horizontal differencing was requested without a row layout.
    #[error("Horizontal differencing requires a row layout")]
    MissingRowLayout,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LzwError::InvalidCode {
            code: 600,
            next_code: 300,
        };
        assert!(err.to_string().contains("600"));
        assert!(err.to_string().contains("300"));

        let err = LzwError::UnexpectedEndOfStream { position: 81 };
        assert!(err.to_string().contains("bit position 81"));

        let err = LzwError::UnsupportedPredictor(3);
        assert!(err.to_string().contains("predictor: 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: LzwError = io_err.into();
        assert!(matches!(err, LzwError::Io(_)));
    }
}
