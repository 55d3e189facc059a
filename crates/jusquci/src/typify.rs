//! Kind of an isolated string.

use jusquci_core::{Cursor, TokenKind};

/// Kind of the first token of `text`.
///
/// An empty string is [`TokenKind::End`]. A hyphen followed by a letter is
/// a [`TokenKind::Word`]: out of context, `-on` or `-tu` can only be the
/// continuation of an inverted verb, which a cursor starting at the hyphen
/// would report as punctuation.
pub fn typify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => TokenKind::End,
        (Some('-'), Some(c)) if c.is_alphabetic() => TokenKind::Word,
        _ => {
            let buf: Vec<char> = text.chars().collect();
            // Untracked cursors never fail.
            Cursor::new(&buf)
                .next_token()
                .map_or(TokenKind::End, |token| token.kind)
        }
    }
}
