//! LZW dictionary (code table) management.
//!
//! Encoder and decoder keep separate tables that grow in lockstep. The
//! encoder only needs "is `prefix + byte` known, and under which code", so
//! it keys a map by `(prefix code, next byte)`. The decoder needs the byte
//! sequence for a code, so it keeps every entry in one append-only arena
//! addressed by code.
//!
//! Both sides apply TIFF "early change": the code width grows one code
//! before the literal bound would require it. The decoder learns each entry
//! one code after the encoder, so the encoder widens once its next code
//! reaches `2^width` and the decoder once its next code reaches `2^width - 1`.
//! Both land on the same code in the stream.

use crate::bitstream_msb::{MAX_CODE_WIDTH, MIN_CODE_WIDTH};
use std::collections::HashMap;

/// Reset the dictionary to its initial state.
pub const CLEAR_CODE: u16 = 256;
/// End of the stream.
pub const EOI_CODE: u16 = 257;
/// First code assigned to a learned sequence.
pub const FIRST_CODE: u16 = 258;
/// No entry is ever assigned this code or above; reaching it forces a clear.
pub const CODE_LIMIT: u16 = 4094;

/// Encoder-side table: `(prefix code, next byte)` to assigned code.
///
/// Literal codes 0-255 are implicit and never stored.
#[derive(Debug)]
pub struct EncodeDictionary {
    entries: HashMap<(u16, u8), u16>,
    next_code: u16,
    code_width: u8,
}

impl EncodeDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_capacity(usize::from(CODE_LIMIT - FIRST_CODE)),
            next_code: FIRST_CODE,
            code_width: MIN_CODE_WIDTH,
        }
    }

    /// Drop all learned entries.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.next_code = FIRST_CODE;
        self.code_width = MIN_CODE_WIDTH;
    }

    /// Code already assigned to `prefix + byte`, if any.
    #[inline]
    pub fn lookup(&self, prefix: u16, byte: u8) -> Option<u16> {
        self.entries.get(&(prefix, byte)).copied()
    }

    /// Assign the next free code to `prefix + byte`.
    ///
    /// Returns `None`, leaving the table untouched, once the table is full.
    pub fn insert(&mut self, prefix: u16, byte: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }

        let code = self.next_code;
        self.entries.insert((prefix, byte), code);
        self.advance();
        Some(code)
    }

    /// Count the entry the decoder adds after reading the final data code.
    ///
    /// No sequence is stored; only `next_code` and the width move, so that
    /// the end-of-information code goes out at the width the decoder reads.
    pub fn reserve_trailing_entry(&mut self) {
        if !self.is_full() {
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.next_code += 1;
        if self.code_width < MAX_CODE_WIDTH && self.next_code >= 1 << self.code_width {
            self.code_width += 1;
        }
    }

    /// Whether the next insert would overflow the table.
    pub fn is_full(&self) -> bool {
        self.next_code >= CODE_LIMIT
    }

    /// Number of learned entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sequence has been learned since the last reset.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Next code that will be assigned.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }

    /// Width of the next emitted code.
    pub fn code_width(&self) -> u8 {
        self.code_width
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Location of one entry inside the decoder arena.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// Decoder-side table: code to byte sequence.
///
/// Entries live back to back in a single byte arena; a new entry copies its
/// prefix from the arena and appends one byte, so lookups are a slice.
#[derive(Debug)]
pub struct DecodeDictionary {
    arena: Vec<u8>,
    spans: Vec<Span>,
    code_width: u8,
}

impl DecodeDictionary {
    /// Create a dictionary holding the 256 literal codes.
    pub fn new() -> Self {
        let mut spans = Vec::with_capacity(usize::from(CODE_LIMIT));
        spans.extend((0..256).map(|start| Span { start, len: 1 }));
        // Clear and end-of-information have no sequence.
        spans.push(Span { start: 0, len: 0 });
        spans.push(Span { start: 0, len: 0 });

        Self {
            arena: (0..=255u8).collect(),
            spans,
            code_width: MIN_CODE_WIDTH,
        }
    }

    /// Drop all learned entries.
    pub fn reset(&mut self) {
        self.arena.truncate(256);
        self.spans.truncate(usize::from(FIRST_CODE));
        self.code_width = MIN_CODE_WIDTH;
    }

    /// Byte sequence for `code`; `None` for control codes and unassigned codes.
    #[inline]
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        if code == CLEAR_CODE || code == EOI_CODE {
            return None;
        }
        self.spans
            .get(usize::from(code))
            .map(|span| &self.arena[span.start..span.start + span.len])
    }

    /// Append the entry `sequence(prefix) + byte` at the next free code.
    ///
    /// `prefix` must be an assigned data code. Returns `None`, leaving the
    /// table untouched, once the table is full.
    pub fn insert(&mut self, prefix: u16, byte: u8) -> Option<u16> {
        if self.is_full() {
            return None;
        }
        debug_assert!(prefix < self.next_code() && prefix != CLEAR_CODE && prefix != EOI_CODE);

        let code = self.next_code();
        let prefix = self.spans[usize::from(prefix)];
        let start = self.arena.len();
        self.arena
            .extend_from_within(prefix.start..prefix.start + prefix.len);
        self.arena.push(byte);
        self.spans.push(Span {
            start,
            len: prefix.len + 1,
        });

        let next_code = self.next_code();
        if self.code_width < MAX_CODE_WIDTH && next_code >= (1 << self.code_width) - 1 {
            self.code_width += 1;
        }

        Some(code)
    }

    /// Whether the next insert would overflow the table.
    pub fn is_full(&self) -> bool {
        self.next_code() >= CODE_LIMIT
    }

    /// Next code that will be assigned.
    pub fn next_code(&self) -> u16 {
        self.spans.len() as u16
    }

    /// Width of the next code to read.
    pub fn code_width(&self) -> u8 {
        self.code_width
    }
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}
