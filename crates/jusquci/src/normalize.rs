//! Canonical surface forms.
//!
//! Numbers and ordinals collapse to fixed placeholders, punctuation runs
//! are shortened, and words get their inclusive suffixes, repeated letters,
//! brackets, quotes and ligatures normalized:
//!
//! | token | form |
//! |---|---|
//! | `97123880012` | `2` |
//! | `122ème` | `2ème` |
//! | `!!!!` | `!!` |
//! | `auteur-rice-x-s` | `auteur·ricexs` |
//! | `(pré)disai[en]t` | `prédisaient` |
//! | `cœur` | `coeur` |
//!
//! The word pipeline runs in a fixed order: suffix rewrite, then run
//! reduction, then bracket stripping, quote and ligature replacement.
//! Suffix spans are recorded against the original text, so they are
//! rewritten before anything moves characters around.

use jusquci_core::{
    Cursor, CursorConfig, SourceBuffer, SuffixSpan, Token, TokenKind, INTERPUNCT,
};
use tracing::debug;

use crate::error::Result;
use crate::surface::Tokens;

/// Canonical form of every number.
pub const NUMBER_PLACEHOLDER: char = '2';

/// Canonical form of every ordinal.
pub const ORDINAL_PLACEHOLDER: [char; 4] = ['2', 'è', 'm', 'e'];

/// Append the canonical form of `token` to `out`; returns its length.
///
/// `token` must come from `cursor` (possibly merged with its continuation,
/// as [`Tokens`] does). Inclusive suffixes are only rewritten when the
/// cursor tracks them.
pub fn normalize(cursor: &Cursor<'_>, token: &Token, out: &mut Vec<char>) -> usize {
    normalize_token(
        token.text(cursor.buffer()),
        token.kind,
        token.start,
        cursor.suffix_spans(),
        out,
    )
}

/// [`normalize`] on explicit parts: `text` starts at offset `start` of the
/// text the `suffixes` were recorded in.
pub fn normalize_token(
    text: &[char],
    kind: TokenKind,
    start: usize,
    suffixes: &[SuffixSpan],
    out: &mut Vec<char>,
) -> usize {
    let base = out.len();
    match kind {
        TokenKind::Ordinal => out.extend_from_slice(&ORDINAL_PLACEHOLDER),
        TokenKind::Number => out.push(NUMBER_PLACEHOLDER),
        TokenKind::PunctuationStrong | TokenKind::PunctuationSoft => {
            let mut punct = text.to_vec();
            reduce_repeated(&mut punct);
            out.extend(punct);
        }
        TokenKind::Word | TokenKind::Compound => {
            let mut word = text.to_vec();
            let end = start + text.len();
            for span in suffixes
                .iter()
                .rev()
                .filter(|span| span.start >= start && span.end <= end && !span.is_empty())
            {
                rewrite_suffix(&mut word, span.start - start, span.end - start);
            }
            reduce_repeated(&mut word);
            out.extend(word.into_iter().filter(|c| !is_bracket(*c)).flat_map(fold_char));
        }
        _ => out.extend_from_slice(text),
    }
    out.len() - base
}

/// `-rice-x-s` → `·ricexs`: the leading separator becomes an interpunct,
/// the other separators inside `start..end` go away.
fn rewrite_suffix(word: &mut Vec<char>, start: usize, end: usize) {
    word[start] = INTERPUNCT;
    let kept: Vec<char> = word[start + 1..end]
        .iter()
        .copied()
        .filter(|&c| !matches!(c, '.' | '-' | INTERPUNCT))
        .collect();
    word.splice(start + 1..end, kept);
}

/// Collapse every run of three or more identical characters to two.
///
/// Returns the new length. Idempotent.
pub fn reduce_repeated(chars: &mut Vec<char>) -> usize {
    let mut len = 0;
    for read in 0..chars.len() {
        let c = chars[read];
        if len >= 2 && chars[len - 1] == c && chars[len - 2] == c {
            continue;
        }
        chars[len] = c;
        len += 1;
    }
    chars.truncate(len);
    len
}

fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Quotes to a plain apostrophe, ligatures to two letters.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        '‘' | '’' | '‛' | '`' => ('\'', None),
        'œ' => ('o', Some('e')),
        'Œ' => ('O', Some('e')),
        'æ' => ('a', Some('e')),
        'Æ' => ('A', Some('e')),
        _ => (c, None),
    };
    std::iter::once(first).chain(second)
}

/// Normalize a whole text, keeping spaces and newlines as they are.
///
/// ```
/// let text = jusquci::normalize_text("Les auteur-rice-s sont làààà !!!!")?;
/// assert_eq!(text, "Les auteur·rices sont làà !!");
/// # Ok::<(), jusquci::Error>(())
/// ```
pub fn normalize_text(text: &str) -> Result<String> {
    let buf = SourceBuffer::new(text);
    let mut tokens = Tokens::new(buf.as_chars(), CursorConfig::tracking());
    let mut out = Vec::with_capacity(buf.len());
    let mut count = 0usize;
    while let Some(token) = tokens.next() {
        let token = token?;
        normalize(tokens.cursor(), &token, &mut out);
        count += 1;
    }
    debug!(tokens = count, chars_in = buf.len(), chars_out = out.len(), "normalized text");
    Ok(out.into_iter().collect())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
