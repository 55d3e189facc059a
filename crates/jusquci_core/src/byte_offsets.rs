//! Code-point to byte span conversion for hosts storing UTF-8.
//!
//! Tokens are reported in code points. A host that keeps the original
//! `&str` needs byte spans; `ByteOffsets` converts them incrementally while
//! the token stream is consumed in order, so each code point is measured
//! once.

use std::ops::Range;

use crate::cursor::Token;

/// Incremental code-point to byte offset converter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteOffsets {
    /// Code-point offset reached so far.
    char_pos: usize,
    /// Byte offset of `char_pos`.
    byte_pos: usize,
}

impl ByteOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte span of `token` within the UTF-8 encoding of `buf`.
    ///
    /// Tokens are expected in order. A token starting before the previous
    /// one restarts the count from the beginning of `buf`.
    pub fn span(&mut self, buf: &[char], token: &Token) -> Range<usize> {
        if token.start < self.char_pos {
            *self = Self::default();
        }
        let start = self.advance(buf, token.start);
        let end = self.advance(buf, token.end());
        start..end
    }

    /// Byte offset of the code point at `index` (at or after the current
    /// position).
    fn advance(&mut self, buf: &[char], index: usize) -> usize {
        let index = index.min(buf.len());
        self.byte_pos += utf8_len(&buf[self.char_pos..index]);
        self.char_pos = index;
        self.byte_pos
    }

    /// Reset to the start of a new buffer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn utf8_len(chars: &[char]) -> usize {
    chars.iter().map(|c| c.len_utf8()).sum()
}
