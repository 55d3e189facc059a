//! Surface tokens: the raw cursor stream with inversions merged.
//!
//! The cursor splits `penses-tu` into `penses` and `-tu`, leaving a
//! deferred hint between the two. [`Tokens`] follows the hint and reports
//! a single word spanning both parts, together with the tracking records of
//! the whole word.

use jusquci_core::{
    Cursor, CursorConfig, Deferred, SourceBuffer, SuffixSpan, Token, TokenKind, TrackingError,
};
use tracing::{trace, warn};

use crate::error::Result;

/// Iterator over surface tokens.
///
/// Yields `Err` when tracking storage cannot grow; iterating again retries
/// the same token.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    cursor: Cursor<'a>,
    /// Head of a word whose continuation failed to scan.
    pending: Option<Token>,
    done: bool,
}

impl<'a> Tokens<'a> {
    pub fn new(buf: &'a [char], config: CursorConfig) -> Self {
        Self::from_cursor(Cursor::with_config(buf, config))
    }

    /// Surface tokens from a fresh or recycled cursor.
    pub fn from_cursor(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            pending: None,
            done: false,
        }
    }

    /// The underlying cursor.
    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Give back the cursor, e.g. to [`recycle`](Cursor::recycle) it.
    pub fn into_cursor(self) -> Cursor<'a> {
        self.cursor
    }

    /// Inclusive suffixes of the last surface token (empty unless tracking).
    #[inline]
    pub fn suffix_spans(&self) -> &[SuffixSpan] {
        self.cursor.suffix_spans()
    }

    /// Compound hyphens of the last surface token (empty unless tracking).
    #[inline]
    pub fn hyphens(&self) -> &[usize] {
        self.cursor.hyphens()
    }

    /// Next surface token; [`TokenKind::End`] once the input is exhausted.
    pub fn next_token(&mut self) -> std::result::Result<Token, TrackingError> {
        let mut token = match self.pending.take() {
            Some(head) => head,
            None => self.cursor.next_token()?,
        };

        while self.cursor.deferred() == Deferred::Continuation {
            match self.cursor.next_token() {
                Ok(continuation) => {
                    debug_assert_eq!(continuation.start, token.end());
                    token.len += continuation.len;
                }
                Err(err) => {
                    self.pending = Some(token);
                    return Err(err);
                }
            }
        }

        trace!(
            kind = %token.kind,
            start = token.start,
            len = token.len,
            "surface token"
        );
        Ok(token)
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                warn!(%err, position = self.cursor.position(), "tokenizer could not grow tracking storage");
                Some(Err(err.into()))
            }
        }
    }
}

/// An owned surface token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub text: String,
    /// Offset of the first code point in the tokenized text.
    pub start: usize,
    /// Length in code points.
    pub len: usize,
}

impl Lexeme {
    fn new(buf: &[char], token: Token) -> Self {
        Self {
            kind: token.kind,
            text: token.text(buf).iter().collect(),
            start: token.start,
            len: token.len,
        }
    }
}

/// Tokenize `text` into owned surface tokens, spaces included.
///
/// ```
/// use jusquci::{tokenize, TokenKind};
///
/// let lexemes = tokenize("Penses-tu ?")?;
/// assert_eq!(lexemes[0].text, "Penses-tu");
/// assert_eq!(lexemes[0].kind, TokenKind::Word);
/// # Ok::<(), jusquci::Error>(())
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Lexeme>> {
    let buf = SourceBuffer::new(text);
    buf_lexemes(&buf, CursorConfig::default())
}

pub(crate) fn buf_lexemes(buf: &SourceBuffer, config: CursorConfig) -> Result<Vec<Lexeme>> {
    let chars = buf.as_chars();
    Tokens::new(chars, config)
        .map(|token| token.map(|token| Lexeme::new(chars, token)))
        .collect()
}
