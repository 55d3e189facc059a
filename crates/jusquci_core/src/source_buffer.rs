//! Owned code-point buffer.
//!
//! The cursor works on `&[char]` so that every offset is a code-point
//! index. `SourceBuffer` decodes a `&str` once and hands out cursors over
//! the decoded text. Since the input is a `&str`, it always holds whole
//! code points: there is no encoding validation to do here.

use crate::cursor::{Cursor, CursorConfig, Token};

/// Decoded text, ready to be tokenized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    chars: Vec<char>,
    /// Every code point is ASCII: code-point and byte offsets coincide.
    is_ascii: bool,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            is_ascii: source.is_ascii(),
        }
    }

    pub fn from_chars(chars: Vec<char>) -> Self {
        let is_ascii = chars.iter().all(char::is_ascii);
        Self { chars, is_ascii }
    }

    #[inline]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn is_ascii(&self) -> bool {
        self.is_ascii
    }

    /// Create a [`Cursor`] at the start, without tracking.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.chars)
    }

    pub fn cursor_with(&self, config: CursorConfig) -> Cursor<'_> {
        Cursor::with_config(&self.chars, config)
    }

    /// The text of `token`, which must come from a cursor over this buffer.
    pub fn text(&self, token: &Token) -> String {
        token.text(&self.chars).iter().collect()
    }

    /// UTF-8 byte offset of the code point at `index`.
    ///
    /// `index` may equal [`len`](Self::len) (end of text). For in-order
    /// conversion of a whole token stream, [`ByteOffsets`](crate::ByteOffsets)
    /// avoids rescanning from the start.
    pub fn byte_offset(&self, index: usize) -> usize {
        if self.is_ascii {
            return index.min(self.chars.len());
        }
        self.chars.iter().take(index).map(|c| c.len_utf8()).sum()
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
