//! Coarse character classification.
//!
//! Every code point maps to exactly one [`CharClass`]. The classes drive the
//! generic fallback of the cursor's dispatch: runs of the same class become
//! one token for spaces, control characters and strong punctuation.

/// Interpunct (U+00B7), used in inclusive spelling (`auteur·rice`).
///
/// Classified as a word character so it can live inside a word; a standalone
/// interpunct is still emitted as punctuation by the cursor.
pub const INTERPUNCT: char = '\u{B7}';

/// Coarse class of a single code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letters, plus the interpunct.
    Word,
    /// ASCII digits.
    Digit,
    /// `.`, `!` and `?`: sentence-ending punctuation.
    PunctuationStrong,
    /// Default bucket for everything not matched elsewhere.
    PunctuationSoft,
    /// Unicode whitespace (including `\n`, `\t`, `\r`).
    Space,
    /// `@`, which starts a citation key.
    CiteKeyIntroducer,
    /// Control characters that are not whitespace.
    Control,
}

/// Classify a code point.
///
/// Order matters: whitespace is checked before control characters, so
/// `\t` and `\n` are [`CharClass::Space`].
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if is_word_char(c) {
        CharClass::Word
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else if c == '@' {
        CharClass::CiteKeyIntroducer
    } else if c.is_control() {
        CharClass::Control
    } else if matches!(c, '.' | '!' | '?') {
        CharClass::PunctuationStrong
    } else {
        CharClass::PunctuationSoft
    }
}

/// Returns `true` for letters and the interpunct.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == INTERPUNCT
}

/// Lowercase a single code point.
///
/// Characters whose lowercase form expands to several code points (`İ`)
/// are returned unchanged; all affix tables are single-code-point lowercase.
#[inline]
pub(crate) fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// `Some(c)` is a letter (interpunct excluded).
#[inline]
pub(crate) fn is_letter(c: Option<&char>) -> bool {
    c.is_some_and(|c| c.is_alphabetic())
}
