//! Cursor-driven tokenizer state machine.
//!
//! [`Cursor::next_token`] produces one token per call. Overloaded leading
//! characters (`:`, `=`, `^`, `x`, `(`, `h`, `-`, ...) are first tried
//! against the special-sequence detectors; everything else dispatches on
//! the character's [`CharClass`] to a word, digit or citation-key scan, or
//! to a run of same-class characters.
//!
//! # Deferred continuation
//!
//! A pronoun inversion (`penses-tu`) ends the word before its hyphen and
//! sets a one-slot hint. The next call sees the hint at the hyphen and scans
//! `-tu` as a word continuation instead of a punctuation sign. Merging the
//! two tokens is left to the caller.
//!
//! # End of input
//!
//! Once the position reaches the end of the buffer, every call returns an
//! [`TokenKind::End`] token of length zero without advancing.

use std::ops::Range;

use crate::affix;
use crate::char_class::{classify, is_letter, is_word_char, CharClass, INTERPUNCT};
use crate::detect;
use crate::tag::TokenKind;
use crate::tracking::{SuffixSpan, Tracking, TrackingError};

/// A token: kind and code-point span in the scanned buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Kind of the token.
    pub kind: TokenKind,
    /// Offset of the first code point.
    pub start: usize,
    /// Length in code points.
    pub len: usize,
}

impl Token {
    /// Offset one past the last code point.
    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Code-point range of the token.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Returns `true` for the End token.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::End)
    }

    /// The token's code points within `buf`.
    ///
    /// `buf` must be the buffer the token was scanned from.
    #[inline]
    pub fn text<'a>(&self, buf: &'a [char]) -> &'a [char] {
        &buf[self.range()]
    }
}

/// Cursor construction options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorConfig {
    /// Record inclusive-suffix spans and compound-hyphen positions for each
    /// token. Required by the normalizer to rewrite inclusive suffixes.
    pub track: bool,
}

impl CursorConfig {
    /// Configuration with tracking enabled.
    pub const fn tracking() -> Self {
        Self { track: true }
    }
}

/// Hint left by one call for the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Deferred {
    /// Nothing pending.
    #[default]
    None,
    /// The hyphen at the current position continues the previous word.
    Continuation,
}

/// Tokenizer state over a borrowed code-point buffer.
///
/// Created with [`Cursor::new`] or through
/// [`SourceBuffer::cursor`](crate::SourceBuffer::cursor). A cursor can be
/// pointed at another buffer with [`reset`](Self::reset) or
/// [`recycle`](Self::recycle), which keep its tracking storage.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [char],
    pos: usize,
    /// Start of the token being scanned.
    start: usize,
    token: Token,
    prev: TokenKind,
    deferred: Deferred,
    tracking: Tracking,
}

impl<'a> Cursor<'a> {
    /// Cursor at the start of `buf`, without tracking.
    pub fn new(buf: &'a [char]) -> Self {
        Self::with_config(buf, CursorConfig::default())
    }

    pub fn with_config(buf: &'a [char], config: CursorConfig) -> Self {
        Self {
            buf,
            pos: 0,
            start: 0,
            token: Self::start_token(),
            prev: TokenKind::End,
            deferred: Deferred::None,
            tracking: Tracking::new(config.track),
        }
    }

    /// Restart on `buf`, keeping the tracking storage.
    pub fn reset(&mut self, buf: &'a [char]) {
        self.buf = buf;
        self.rewind();
    }

    /// Move this cursor's tracking storage to a cursor over `buf`.
    ///
    /// Unlike [`reset`](Self::reset), the new buffer may have a different
    /// lifetime.
    pub fn recycle<'b>(self, buf: &'b [char]) -> Cursor<'b> {
        let mut cursor = Cursor {
            buf,
            pos: 0,
            start: 0,
            token: Self::start_token(),
            prev: TokenKind::End,
            deferred: Deferred::None,
            tracking: self.tracking,
        };
        cursor.rewind();
        cursor
    }

    fn rewind(&mut self) {
        self.pos = 0;
        self.start = 0;
        self.token = Self::start_token();
        self.prev = TokenKind::End;
        self.deferred = Deferred::None;
        self.tracking.clear();
    }

    const fn start_token() -> Token {
        Token {
            kind: TokenKind::End,
            start: 0,
            len: 0,
        }
    }

    /// The scanned buffer.
    #[inline]
    pub fn buffer(&self) -> &'a [char] {
        self.buf
    }

    /// Current position (offset of the next token).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The token returned by the last successful call.
    #[inline]
    pub fn token(&self) -> Token {
        self.token
    }

    /// Code points of the last token.
    #[inline]
    pub fn token_text(&self) -> &'a [char] {
        self.token.text(self.buf)
    }

    /// Returns `true` once every code point has been scanned.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Pending hint for the next call.
    #[inline]
    pub fn deferred(&self) -> Deferred {
        self.deferred
    }

    /// Returns `true` if the cursor records suffixes and hyphens.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_enabled()
    }

    /// Inclusive suffixes absorbed by the last token (empty unless tracking).
    ///
    /// When the last token consumed a deferred continuation, the records of
    /// the word it continues are kept in front.
    #[inline]
    pub fn suffix_spans(&self) -> &[SuffixSpan] {
        self.tracking.suffixes()
    }

    /// Positions of compound hyphens absorbed by the last token.
    #[inline]
    pub fn hyphens(&self) -> &[usize] {
        self.tracking.hyphens()
    }

    #[cfg(test)]
    pub(crate) fn tracking_mut(&mut self) -> &mut Tracking {
        &mut self.tracking
    }

    /// Scan the next token.
    ///
    /// Fails only when tracking storage cannot grow. The cursor is then
    /// restored to its state before the call, and the call may be retried.
    pub fn next_token(&mut self) -> Result<Token, TrackingError> {
        let Some(&c) = self.buf.get(self.pos) else {
            self.tracking.clear();
            self.pos = self.buf.len();
            self.token = Token {
                kind: TokenKind::End,
                start: self.pos,
                len: 0,
            };
            return Ok(self.token);
        };

        let start = self.pos;
        self.start = start;
        let deferred = self.deferred;
        let continuing = c == '-' && deferred == Deferred::Continuation;
        // New records go after the previous token's, which are only dropped
        // once the scan succeeds.
        let mark = self.tracking.mark();

        match self.scan(c, continuing) {
            Ok(kind) => {
                debug_assert!(self.pos > start, "non-End token must advance");
                if !continuing {
                    self.tracking.discard_before(mark);
                }
                self.token = Token {
                    kind,
                    start,
                    len: self.pos - start,
                };
                self.prev = kind;
                Ok(self.token)
            }
            Err(err) => {
                self.pos = start;
                self.deferred = deferred;
                self.tracking.rollback(mark);
                Err(err)
            }
        }
    }

    fn scan(&mut self, c: char, continuing: bool) -> Result<TokenKind, TrackingError> {
        let buf = self.buf;
        let rest = &buf[self.pos..];
        match c {
            ' ' if self.prev == TokenKind::Space => Ok(self.space_run()),
            ' ' => Ok(self.single(TokenKind::Space)),
            '\n' => Ok(self.single(TokenKind::Newline)),
            INTERPUNCT => Ok(self.single(TokenKind::PunctuationSoft)),
            ':' => Ok(if let Some(len) = detect::emoji(rest) {
                self.take(len, TokenKind::Emoji)
            } else if let Some(len) = detect::side_emoticon(rest, true) {
                self.take(len, TokenKind::Emoticon)
            } else {
                self.single(TokenKind::PunctuationSoft)
            }),
            '=' => Ok(if let Some(len) = detect::side_emoticon(rest, true) {
                self.take(len, TokenKind::Emoticon)
            } else if let Some(len) = detect::arrow(rest) {
                self.take(len, TokenKind::PunctuationSoft)
            } else {
                self.single(TokenKind::PunctuationSoft)
            }),
            '^' => Ok(match detect::superscript_emoticon(rest) {
                Some(len) => self.take(len, TokenKind::Emoticon),
                None => self.single(TokenKind::PunctuationSoft),
            }),
            'x' | 'X' => {
                match detect::face_emoticon(rest).or_else(|| detect::side_emoticon(rest, true)) {
                    Some(len) => Ok(self.take(len, TokenKind::Emoticon)),
                    None => self.word(),
                }
            }
            'v' | 'o' | 'ô' | 'V' | 'O' | 'Ô' => match detect::face_emoticon(rest) {
                Some(len) => Ok(self.take(len, TokenKind::Emoticon)),
                None => self.word(),
            },
            '(' | '[' => {
                if let Some(len) = detect::side_emoticon(rest, false) {
                    Ok(self.take(len, TokenKind::Emoticon))
                } else if let Some(offset) = detect::intraword_paren(rest) {
                    self.pos += offset;
                    self.word()
                } else {
                    Ok(self.single(TokenKind::PunctuationSoft))
                }
            }
            'h' | 'w' => match detect::url(rest) {
                Some(len) => Ok(self.take(len, TokenKind::Url)),
                None => self.word(),
            },
            '-' if continuing => {
                self.deferred = Deferred::None;
                self.pos += 1;
                self.word()
            }
            '-' => Ok(match detect::arrow(rest) {
                Some(len) => self.take(len, TokenKind::PunctuationSoft),
                None => self.single(TokenKind::PunctuationSoft),
            }),
            _ => match classify(c) {
                CharClass::Word => self.word(),
                CharClass::Digit => Ok(self.digits()),
                CharClass::Space => Ok(self.space_run()),
                CharClass::Control => Ok(self.run(CharClass::Control, TokenKind::Control)),
                CharClass::PunctuationStrong => {
                    Ok(self.run(CharClass::PunctuationStrong, TokenKind::PunctuationStrong))
                }
                CharClass::CiteKeyIntroducer => {
                    let len = detect::citekey(rest).unwrap_or(1);
                    Ok(self.take(len, TokenKind::CiteKey))
                }
                CharClass::PunctuationSoft => Ok(self.single(TokenKind::PunctuationSoft)),
            },
        }
    }

    #[inline]
    fn take(&mut self, len: usize, kind: TokenKind) -> TokenKind {
        self.pos += len;
        kind
    }

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.take(1, kind)
    }

    /// Maximal run of `class` characters.
    fn run(&mut self, class: CharClass, kind: TokenKind) -> TokenKind {
        let len = self.buf[self.pos..]
            .iter()
            .take_while(|&&c| classify(c) == class)
            .count();
        self.take(len, kind)
    }

    /// Whitespace up to (not including) the next newline.
    fn space_run(&mut self) -> TokenKind {
        let len = self.buf[self.pos..]
            .iter()
            .take_while(|&&c| c != '\n' && c.is_whitespace())
            .count();
        self.take(len, TokenKind::SpaceRun)
    }

    /// Word characters, with brackets, hyphens, inclusive suffixes,
    /// apostrophes and abbreviation periods handled on the way.
    fn word(&mut self) -> Result<TokenKind, TrackingError> {
        let buf = self.buf;
        let start = self.start;
        let mut bracket_open = false;

        while let Some(&c) = buf.get(self.pos) {
            match c {
                '(' | '[' | '{' => bracket_open = true,
                ')' | ']' | '}' => {
                    if !bracket_open {
                        return Ok(TokenKind::Word);
                    }
                    bracket_open = false;
                }
                '-' => {
                    // depuis->là
                    if !is_letter(buf.get(self.pos + 1)) {
                        return Ok(TokenKind::Word);
                    }
                    // penses-tu
                    if affix::is_inversion(&buf[self.pos..]) {
                        self.deferred = Deferred::Continuation;
                        return Ok(TokenKind::Word);
                    }
                    // lecteur-rice-s
                    if self.absorb_inclusive_suffix()? {
                        continue;
                    }
                    // brise-glace
                    self.tracking.record_hyphen(self.pos)?;
                }
                '.' => {
                    // enseignant.e.s
                    if self.absorb_inclusive_suffix()? {
                        continue;
                    }
                    // p. ex.
                    if affix::is_abbreviation(&buf[start..self.pos]) {
                        self.pos += 1;
                        return Ok(TokenKind::Abbreviation);
                    }
                    return Ok(TokenKind::Word);
                }
                INTERPUNCT => {
                    // auteur·rice
                    if self.absorb_inclusive_suffix()? {
                        continue;
                    }
                    if !is_letter(buf.get(self.pos + 1)) {
                        return Ok(TokenKind::Word);
                    }
                }
                // jusqu'ici
                '\'' | '’' | '‘' => {
                    self.pos += 1;
                    return Ok(TokenKind::Word);
                }
                _ if !is_word_char(c) => return Ok(TokenKind::Word),
                _ => {}
            }
            self.pos += 1;
        }
        Ok(TokenKind::Word)
    }

    /// Absorb an inclusive suffix starting at the separator under the
    /// cursor. Returns `false` if there is none.
    fn absorb_inclusive_suffix(&mut self) -> Result<bool, TrackingError> {
        let Some(len) = affix::inclusive_suffix_len(&self.buf[self.pos..]) else {
            return Ok(false);
        };
        self.tracking.record_suffix(self.pos, self.pos + len)?;
        self.pos += len;
        Ok(true)
    }

    /// Digits and connectors; `Ordinal` if the run ends on a digit and an
    /// ordinal suffix follows.
    fn digits(&mut self) -> TokenKind {
        let buf = self.buf;
        let mut ends_on_digit = true;
        self.pos += 1;
        while let Some(&c) = buf.get(self.pos) {
            match c {
                '0'..='9' => ends_on_digit = true,
                ')' | '.' | '-' | '/' | '^' | '+' | '=' | '*' => ends_on_digit = false,
                _ => break,
            }
            self.pos += 1;
        }

        if ends_on_digit {
            if let Some(len) = affix::ordinal_suffix_len(&buf[self.pos..]) {
                return self.take(len, TokenKind::Ordinal);
            }
        }
        TokenKind::Number
    }
}
