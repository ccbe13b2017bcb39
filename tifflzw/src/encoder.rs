//! LZW encoder (compression).

use crate::bitstream_msb::MsbBitWriter;
use crate::config::LzwConfig;
use crate::dictionary::{CLEAR_CODE, EOI_CODE, EncodeDictionary};
use crate::stats::CodecStats;
use tracing::{debug, trace};

/// LZW encoder for compression.
///
/// Each call to [`encode`](Self::encode) starts from a fresh dictionary, so
/// one encoder can be reused for any number of strips. The predictor named
/// in the configuration is not applied here; [`compress`](crate::compress)
/// runs it before handing the bytes over.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for sequence lookup.
    dict: EncodeDictionary,
    config: LzwConfig,
    stats: CodecStats,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Self {
        Self {
            dict: EncodeDictionary::new(),
            config,
            stats: CodecStats::default(),
        }
    }

    /// Encode data with LZW compression.
    ///
    /// # Algorithm
    ///
    /// 1. Extend the current match while `match + byte` is in the dictionary
    /// 2. On a miss, emit the match code and register `match + byte`
    /// 3. If the table is full instead, emit a clear code and start over
    /// 4. Restart the match from the byte that missed
    /// 5. Emit the final match, then the end-of-information code
    ///
    /// Every code goes out at the width in effect when it is emitted. Any
    /// byte sequence is encodable, so this cannot fail.
    pub fn encode(&mut self, input: &[u8]) -> Vec<u8> {
        self.dict.reset();
        self.stats = CodecStats {
            raw_len: input.len(),
            ..CodecStats::default()
        };

        let mut writer = MsbBitWriter::with_capacity(input.len() / 2 + 4);

        if self.config.leading_clear {
            self.emit(&mut writer, CLEAR_CODE);
        }

        let Some((&first, rest)) = input.split_first() else {
            self.emit(&mut writer, EOI_CODE);
            return self.finish(writer);
        };

        let mut current = u16::from(first);
        // Whether the decoder will have a previous code when it reads `current`.
        let mut decoder_has_prefix = false;

        for &byte in rest {
            if let Some(code) = self.dict.lookup(current, byte) {
                current = code;
                continue;
            }

            self.emit(&mut writer, current);
            decoder_has_prefix = true;

            if self.dict.insert(current, byte).is_none() {
                debug!(
                    bits = writer.len() * 8,
                    "LZW table full, emitting clear code"
                );
                self.emit(&mut writer, CLEAR_CODE);
                self.dict.reset();
                decoder_has_prefix = false;
            }

            current = u16::from(byte);
        }

        self.emit(&mut writer, current);

        // Reading that code makes the decoder add one more entry, which may
        // widen the code carrying the end-of-information marker.
        if decoder_has_prefix {
            self.dict.reserve_trailing_entry();
        }
        self.emit(&mut writer, EOI_CODE);

        self.finish(writer)
    }

    fn emit(&mut self, writer: &mut MsbBitWriter, code: u16) {
        let width = self.dict.code_width();
        if width > self.stats.peak_code_width && self.stats.peak_code_width != 0 {
            trace!(width, next_code = self.dict.next_code(), "code width grew");
        }
        writer.write_code(code, width);
        self.stats.record_code(width);
        if code == CLEAR_CODE {
            self.stats.clear_codes += 1;
        }
    }

    fn finish(&mut self, writer: MsbBitWriter) -> Vec<u8> {
        let output = writer.into_vec();
        self.stats.compressed_len = output.len();
        debug!(
            raw = self.stats.raw_len,
            compressed = output.len(),
            codes = self.stats.codes,
            clears = self.stats.clear_codes,
            "LZW encode finished"
        );
        output
    }

    /// Statistics for the most recent [`encode`](Self::encode) call.
    pub fn stats(&self) -> CodecStats {
        self.stats
    }

    /// The configuration this encoder was built with.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
        self.stats = CodecStats::default();
    }
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self::new(LzwConfig::TIFF)
    }
}
