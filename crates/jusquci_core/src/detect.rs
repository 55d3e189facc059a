//! Lookahead detectors for special sequences.
//!
//! Each detector inspects the input starting at the cursor position and
//! returns the length of the sequence it recognizes, or `None`. None of them
//! move the cursor; the dispatch in [`Cursor`](crate::Cursor) decides which
//! detectors are tried for which leading character, and in what order.

use crate::char_class::{fold, is_letter, is_word_char};

/// Mouths that may follow eyes (`:)`, `:-D`, `=p`, `XD`).
const MOUTHS: [char; 13] = ['d', 'p', 'D', 'P', 'O', 'o', 's', '3', 'S', ')', ']', '(', '['];

/// Eyes that may follow a mouth (`(:`, `[-;`).
const EYES: [char; 2] = [':', ';'];

/// Characters handed back from the end of a URL (`www.example.com,`).
const URL_TRAILING: [char; 13] = ['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"', '»', '›'];

/// `:happy:`: a colon, a non-empty run of alphanumerics or `_`, a colon.
pub fn emoji(input: &[char]) -> Option<usize> {
    if input.len() < 3 || input[0] != ':' {
        return None;
    }
    for (i, &c) in input.iter().enumerate().skip(1) {
        if c == ':' {
            return (i >= 2).then_some(i + 1);
        }
        if !(c.is_alphanumeric() || c == '_') {
            return None;
        }
    }
    None
}

/// `x.x`, `ô.ô`, `O_o`: symmetric three-character faces.
///
/// The outer characters are compared case-insensitively; the face must not
/// run into a letter.
pub fn face_emoticon(input: &[char]) -> Option<usize> {
    let [left, middle, right, tail @ ..] = input else {
        return None;
    };
    if fold(*left) != fold(*right) || !matches!(middle, '.' | '_') {
        return None;
    }
    (!is_letter(tail.first())).then_some(3)
}

/// `:-)`, `XD`, `=p` (eyes first) or `(:`, `(-;` (mouth first).
///
/// An optional `-` nose sits between the two features. The emoticon must
/// not run into a letter: `:-)x` is not an emoticon.
pub fn side_emoticon(input: &[char], eyes_first: bool) -> Option<usize> {
    let nose = usize::from(input.get(1) == Some(&'-'));
    let feature = *input.get(1 + nose)?;

    let expected: &[char] = if eyes_first { &MOUTHS } else { &EYES };
    if !expected.contains(&feature) {
        return None;
    }

    let len = 2 + nose;
    (!is_letter(input.get(len))).then_some(len)
}

/// `^^`
pub fn superscript_emoticon(input: &[char]) -> Option<usize> {
    matches!(input, ['^', '^', ..]).then_some(2)
}

/// `--->`, `==>`: a run of one repeated character closed by `>`.
///
/// The returned length includes the `>`.
pub fn arrow(input: &[char]) -> Option<usize> {
    let &head = input.first()?;
    let run = input.iter().take_while(|&&c| c == head).count();
    (input.get(run) == Some(&'>')).then_some(run + 1)
}

/// `(socio)anthropologique`, `[re]lire`: a parenthetical inside a word.
///
/// `input[0]` is the opening bracket. Only word characters and hyphens may
/// appear before the matching close, and a word character must follow it.
/// Returns the offset of that word character: the cursor jumps there and
/// keeps scanning the enclosing word.
pub fn intraword_paren(input: &[char]) -> Option<usize> {
    let close = match input.first()? {
        '(' => ')',
        '[' => ']',
        _ => return None,
    };
    for (i, &c) in input.iter().enumerate().skip(1) {
        if c == close {
            return input
                .get(i + 1)
                .filter(|&&next| is_word_char(next))
                .map(|_| i + 1);
        }
        if !is_word_char(c) && c != '-' {
            return None;
        }
    }
    None
}

/// `http…` or `www.…` up to the next space or control character.
///
/// Trailing punctuation (`www.example.com,`) is not part of the URL.
pub fn url(input: &[char]) -> Option<usize> {
    let prefix: &[char] = match input.first()? {
        'h' => &['h', 't', 't', 'p'],
        'w' => &['w', 'w', 'w', '.'],
        _ => return None,
    };
    if !input.starts_with(prefix) {
        return None;
    }

    let end = input
        .iter()
        .position(|&c| c.is_whitespace() || c.is_control())
        .unwrap_or(input.len());
    let trimmed = input[..end]
        .iter()
        .rposition(|c| !URL_TRAILING.contains(c))
        .map_or(0, |i| i + 1);

    Some(trimmed.max(prefix.len()))
}

/// `@becker1982`, `@_12xZle`: `@` and a run of word characters, digits or
/// underscores. A lone `@` is a one-character citation key.
pub fn citekey(input: &[char]) -> Option<usize> {
    let (&'@', rest) = input.split_first()? else {
        return None;
    };
    let body = rest
        .iter()
        .take_while(|&&c| is_word_char(c) || c.is_ascii_digit() || c == '_')
        .count();
    Some(1 + body)
}
