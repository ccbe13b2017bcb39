//! Per-call codec statistics.

/// Counters describing the most recent encode or decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecStats {
    /// Codes written or read, control codes included.
    pub codes: u64,
    /// Clear codes written or read.
    pub clear_codes: u64,
    /// Widest code seen on the wire.
    pub peak_code_width: u8,
    /// Uncompressed bytes.
    pub raw_len: usize,
    /// Compressed bytes.
    pub compressed_len: usize,
}

impl CodecStats {
    pub(crate) fn record_code(&mut self, width: u8) {
        self.codes += 1;
        self.peak_code_width = self.peak_code_width.max(width);
    }

    /// Compressed size as a fraction of the raw size.
    pub fn ratio(&self) -> f64 {
        if self.raw_len == 0 {
            return 0.0;
        }
        self.compressed_len as f64 / self.raw_len as f64
    }
}
