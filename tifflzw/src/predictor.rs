//! TIFF horizontal differencing predictor.
//!
//! Applied to raw sample rows before compression and undone after
//! decompression. Each sample is replaced by its difference from the same
//! channel of the previous pixel in the row, using wrapping 8-bit
//! arithmetic. The first pixel of every row is stored as is, and no
//! difference ever spans two rows.

use crate::error::{LzwError, Result};

/// TIFF `Predictor` tag value for no prediction.
pub const PREDICTOR_NONE: u16 = 1;
/// TIFF `Predictor` tag value for horizontal differencing.
pub const PREDICTOR_HORIZONTAL: u16 = 2;
/// TIFF `Predictor` tag value for floating point prediction (not supported).
pub const PREDICTOR_FLOATING_POINT: u16 = 3;

/// Differencing step applied around the LZW codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Predictor {
    /// Identity.
    #[default]
    None,
    /// Horizontal differencing over 8-bit samples.
    HorizontalDifferencing,
}

/// Geometry of the rows the predictor walks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Pixels per row.
    pub width: usize,
    /// Interleaved 8-bit samples per pixel (1 for grayscale, 3 for RGB).
    pub samples_per_pixel: usize,
}

impl RowLayout {
    /// Create a row layout.
    pub const fn new(width: usize, samples_per_pixel: usize) -> Self {
        Self {
            width,
            samples_per_pixel,
        }
    }

    /// Single-sample rows of `width` pixels.
    pub const fn grayscale(width: usize) -> Self {
        Self::new(width, 1)
    }

    /// Bytes per row.
    pub const fn row_len(&self) -> usize {
        self.width * self.samples_per_pixel
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.samples_per_pixel == 0 {
            return Err(LzwError::InvalidRowLayout {
                width: self.width,
                samples_per_pixel: self.samples_per_pixel,
            });
        }
        Ok(())
    }
}

impl Predictor {
    /// Map a TIFF `Predictor` tag value.
    pub fn from_tag(tag: u16) -> Result<Self> {
        match tag {
            PREDICTOR_NONE => Ok(Self::None),
            PREDICTOR_HORIZONTAL => Ok(Self::HorizontalDifferencing),
            other => Err(LzwError::UnsupportedPredictor(other)),
        }
    }

    /// TIFF `Predictor` tag value.
    pub fn tag(self) -> u16 {
        match self {
            Self::None => PREDICTOR_NONE,
            Self::HorizontalDifferencing => PREDICTOR_HORIZONTAL,
        }
    }

    /// Forward pass, run on raw samples before encoding.
    ///
    /// A trailing partial row is differenced as a short row.
    pub fn apply(self, data: &mut [u8], layout: RowLayout) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::HorizontalDifferencing => {
                layout.validate()?;
                let stride = layout.samples_per_pixel;
                for row in data.chunks_mut(layout.row_len()) {
                    // Right to left so every subtraction sees original samples.
                    for i in (stride..row.len()).rev() {
                        row[i] = row[i].wrapping_sub(row[i - stride]);
                    }
                }
                Ok(())
            }
        }
    }

    /// Inverse pass, run on decoded bytes after decoding.
    pub fn reverse(self, data: &mut [u8], layout: RowLayout) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::HorizontalDifferencing => {
                layout.validate()?;
                let stride = layout.samples_per_pixel;
                for row in data.chunks_mut(layout.row_len()) {
                    for i in stride..row.len() {
                        row[i] = row[i].wrapping_add(row[i - stride]);
                    }
                }
                Ok(())
            }
        }
    }
}
