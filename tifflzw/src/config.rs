//! LZW configuration for TIFF strips and tiles.

use crate::error::{LzwError, Result};
use crate::predictor::{Predictor, RowLayout};

/// LZW configuration parameters.
///
/// The bit order, code widths, control codes and early change are fixed by
/// TIFF; what varies between writers is whether a stream opens with a clear
/// code and which predictor wraps the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Emit a clear code before the first data code.
    ///
    /// The decoder starts from the post-clear state either way, so this only
    /// changes the encoder output.
    pub leading_clear: bool,
    /// Differencing step applied before encoding and after decoding.
    pub predictor: Predictor,
    /// Row geometry; required by [`Predictor::HorizontalDifferencing`].
    pub row_layout: Option<RowLayout>,
}

impl LzwConfig {
    /// Plain TIFF LZW: data codes from the first bit, no predictor.
    pub const TIFF: Self = Self {
        leading_clear: false,
        predictor: Predictor::None,
        row_layout: None,
    };

    /// TIFF LZW as written by libtiff: every stream opens with a clear code.
    pub const LIBTIFF: Self = Self {
        leading_clear: true,
        predictor: Predictor::None,
        row_layout: None,
    };

    /// Set whether a clear code opens the stream.
    pub fn with_leading_clear(mut self, leading_clear: bool) -> Self {
        self.leading_clear = leading_clear;
        self
    }

    /// Set the predictor and the row geometry it runs over.
    pub fn with_predictor(mut self, predictor: Predictor, row_layout: RowLayout) -> Self {
        self.predictor = predictor;
        self.row_layout = Some(row_layout);
        self
    }

    /// Predictor to run with its row layout; `None` when no predictor runs.
    pub(crate) fn active_predictor(&self) -> Result<Option<(Predictor, RowLayout)>> {
        match (self.predictor, self.row_layout) {
            (Predictor::None, _) => Ok(None),
            (predictor, Some(layout)) => Ok(Some((predictor, layout))),
            (_, None) => Err(LzwError::MissingRowLayout),
        }
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::TIFF
    }
}
