//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary one code behind it. The
//! only code it can receive before having learned it is the one the encoder
//! assigned on its previous step (the KwKwK case), whose sequence is the
//! previous sequence followed by its own first byte.

use crate::bitstream_msb::MsbBitReader;
use crate::dictionary::{CLEAR_CODE, DecodeDictionary, EOI_CODE};
use crate::error::{LzwError, Result};
use crate::stats::CodecStats;
use tracing::{debug, warn};

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: DecodeDictionary,
    stats: CodecStats,
}

impl LzwDecoder {
    /// Create a new LZW decoder.
    ///
    /// Streams with and without a leading clear code are both accepted, so
    /// the decoder needs no configuration.
    pub fn new() -> Self {
        Self {
            dict: DecodeDictionary::new(),
            stats: CodecStats::default(),
        }
    }

    /// Decode LZW-compressed data.
    ///
    /// Decoding runs until the end-of-information code or until
    /// `expected_size` bytes have been produced, whichever comes first:
    /// - codes past `expected_size` are never read, and the tail of the last
    ///   sequence beyond it is dropped
    /// - a stream that runs dry without an end code is accepted only if
    ///   `expected_size` bytes were already produced
    /// - an input holding no complete code is never a valid stream
    ///
    /// # Errors
    ///
    /// - [`LzwError::UnexpectedEndOfStream`] if the input ends mid-code
    ///   before the output is complete
    /// - [`LzwError::InvalidCode`] for a code the dictionary cannot hold yet
    /// - [`LzwError::DictionaryOverflowWithoutClear`] if the stream keeps
    ///   adding entries to a full table
    pub fn decode(&mut self, input: &[u8], expected_size: usize) -> Result<Vec<u8>> {
        self.run(input, Some(expected_size))
    }

    /// Decode until the end-of-information code with no size bound.
    pub fn decode_to_end(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.run(input, None)
    }

    /// Decode into a caller-provided buffer, returning the bytes written.
    ///
    /// The buffer length plays the role of `expected_size` in
    /// [`decode`](Self::decode).
    pub fn decode_into(&mut self, input: &[u8], buffer: &mut [u8]) -> Result<usize> {
        let decoded = self.run(input, Some(buffer.len()))?;
        buffer[..decoded.len()].copy_from_slice(&decoded);
        Ok(decoded.len())
    }

    fn run(&mut self, input: &[u8], expected_size: Option<usize>) -> Result<Vec<u8>> {
        self.dict.reset();
        self.stats = CodecStats {
            compressed_len: input.len(),
            ..CodecStats::default()
        };

        let mut reader = MsbBitReader::new(input);
        let mut output = Vec::with_capacity(expected_size.unwrap_or(input.len() * 2));
        let mut prev_code: Option<u16> = None;

        loop {
            let width = self.dict.code_width();
            let code = match reader.read_code(width) {
                Ok(code) => code,
                Err(LzwError::UnexpectedEndOfStream { position }) => {
                    if let Some(expected) = expected_size
                        && output.len() >= expected
                        && self.stats.codes > 0
                    {
                        warn!(
                            position,
                            "LZW stream ended without end-of-information code"
                        );
                        break;
                    }
                    return Err(LzwError::UnexpectedEndOfStream { position });
                }
                Err(e) => return Err(e),
            };
            self.stats.record_code(width);

            match code {
                CLEAR_CODE => {
                    self.stats.clear_codes += 1;
                    debug!(position = reader.bits_read(), "LZW clear code");
                    self.dict.reset();
                    prev_code = None;
                }
                EOI_CODE => break,
                code => {
                    let next_code = self.dict.next_code();
                    if code > next_code || (code == next_code && prev_code.is_none()) {
                        return Err(LzwError::InvalidCode { code, next_code });
                    }

                    if let Some(prev) = prev_code {
                        // Entry to add: previous sequence plus the first byte
                        // of this one; for the not-yet-known code that byte
                        // comes from the previous sequence itself.
                        let source = if code == next_code { prev } else { code };
                        let first = self
                            .dict
                            .get(source)
                            .and_then(|sequence| sequence.first().copied())
                            .ok_or(LzwError::InvalidCode { code, next_code })?;

                        if self.dict.insert(prev, first).is_none() {
                            return Err(LzwError::DictionaryOverflowWithoutClear {
                                position: reader.bits_read() - u64::from(width),
                            });
                        }
                    }

                    let sequence = self
                        .dict
                        .get(code)
                        .ok_or(LzwError::InvalidCode { code, next_code })?;
                    output.extend_from_slice(sequence);
                    prev_code = Some(code);

                    if let Some(expected) = expected_size
                        && output.len() >= expected
                    {
                        self.expect_end(&mut reader, output.len(), expected);
                        break;
                    }
                }
            }
        }

        if let Some(expected) = expected_size
            && output.len() > expected
        {
            warn!(
                decoded = output.len(),
                expected, "last LZW sequence overruns expected size, truncating"
            );
            output.truncate(expected);
        }

        self.stats.raw_len = output.len();
        debug!(
            compressed = input.len(),
            raw = output.len(),
            codes = self.stats.codes,
            clears = self.stats.clear_codes,
            "LZW decode finished"
        );

        Ok(output)
    }

    /// Look at the code after the one that completed the output. Only an
    /// end-of-information code is counted; anything else is ignored.
    fn expect_end(&mut self, reader: &mut MsbBitReader<'_>, decoded: usize, expected: usize) {
        let width = self.dict.code_width();
        match reader.read_code(width) {
            Ok(EOI_CODE) => self.stats.record_code(width),
            Ok(_) => warn!(
                decoded,
                expected,
                position = reader.bits_read() - u64::from(width),
                "LZW stream continues past expected size, stopping"
            ),
            Err(_) => warn!(
                position = reader.bits_read(),
                "LZW stream ended without end-of-information code"
            ),
        }
    }

    /// Statistics for the most recent decode call.
    pub fn stats(&self) -> CodecStats {
        self.stats
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
        self.stats = CodecStats::default();
    }
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self::new()
    }
}
