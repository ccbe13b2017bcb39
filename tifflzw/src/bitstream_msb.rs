//! MSB-first bit stream operations for TIFF LZW.
//!
//! TIFF packs its codes from the most significant bit of each byte down,
//! with no byte alignment between codes. Only the end of the stream is
//! padded, with zero bits.

use crate::error::{LzwError, Result};

/// Smallest code width on the wire.
pub const MIN_CODE_WIDTH: u8 = 9;
/// Largest code width on the wire.
pub const MAX_CODE_WIDTH: u8 = 12;

/// MSB-first code reader for LZW decompression.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Next byte to pull into the buffer.
    byte_pos: usize,
    /// Bit buffer; valid bits are the low `bits_in_buffer` bits.
    buffer: u32,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_pos: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Fill buffer with at least `count` bits.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count && self.byte_pos < self.data.len() {
            let byte = self.data[self.byte_pos];
            self.byte_pos += 1;

            self.buffer = (self.buffer << 8) | u32::from(byte);
            self.bits_in_buffer += 8;
        }

        if self.bits_in_buffer < count {
            return Err(LzwError::UnexpectedEndOfStream {
                position: self.total_bits_read,
            });
        }

        Ok(())
    }

    /// Read one `width`-bit code (MSB-first).
    ///
    /// Fails with [`LzwError::UnexpectedEndOfStream`] if fewer than `width`
    /// bits remain; the cursor is left where it was.
    pub fn read_code(&mut self, width: u8) -> Result<u16> {
        debug_assert!((MIN_CODE_WIDTH..=MAX_CODE_WIDTH).contains(&width));

        self.fill_buffer(width)?;

        let shift = self.bits_in_buffer - width;
        let mask = (1u32 << width) - 1;
        let value = (self.buffer >> shift) & mask;

        self.bits_in_buffer -= width;
        self.buffer &= (1u32 << self.bits_in_buffer) - 1;
        self.total_bits_read += u64::from(width);

        Ok(value as u16)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Bits not yet consumed, including zero padding.
    pub fn bits_remaining(&self) -> u64 {
        (self.data.len() - self.byte_pos) as u64 * 8 + u64::from(self.bits_in_buffer)
    }
}

/// MSB-first code writer for LZW compression.
#[derive(Debug)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer; pending bits are the low `bits_in_buffer` bits.
    buffer: u32,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a writer whose output buffer starts with `capacity` bytes reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Append the low `width` bits of `code`, most significant bit first.
    pub fn write_code(&mut self, code: u16, width: u8) {
        debug_assert!((MIN_CODE_WIDTH..=MAX_CODE_WIDTH).contains(&width));
        debug_assert!(u32::from(code) < (1u32 << width));

        self.buffer = (self.buffer << width) | (u32::from(code) & ((1u32 << width) - 1));
        self.bits_in_buffer += width;

        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            self.output.push((self.buffer >> self.bits_in_buffer) as u8);
        }
        self.buffer &= (1u32 << self.bits_in_buffer) - 1;
    }

    /// Pad the final partial byte with zero bits and emit it.
    pub fn flush(&mut self) {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << remaining) as u8);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Number of complete bytes emitted so far.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Whether no complete byte has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Flush and take the output data.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}

impl Default for MsbBitWriter {
    fn default() -> Self {
        Self::new()
    }
}
