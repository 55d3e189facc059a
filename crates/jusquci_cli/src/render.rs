//! Line rendering.
//!
//! Every non-space token is printed followed by a space, with a line break
//! after strong punctuation and at the end of each input line.

use jusquci::{normalize, split_sentences, CursorConfig, Lexeme, SourceBuffer, TokenKind, Tokens};

use crate::error::Result;
use crate::options::CliOptions;

/// Surface tokens of `line`, spaces included; the text of each is its
/// normalized form when `normalized` is set.
pub fn line_lexemes(line: &str, normalized: bool) -> Result<Vec<Lexeme>> {
    let buf = SourceBuffer::new(line);
    let config = if normalized {
        CursorConfig::tracking()
    } else {
        CursorConfig::default()
    };
    let mut tokens = Tokens::new(buf.as_chars(), config);
    let mut lexemes = Vec::new();
    let mut form = Vec::new();
    while let Some(token) = tokens.next() {
        let token = token?;
        let text = if normalized {
            form.clear();
            normalize(tokens.cursor(), &token, &mut form);
            form.iter().collect()
        } else {
            buf.text(&token)
        };
        lexemes.push(Lexeme {
            kind: token.kind,
            text,
            start: token.start,
            len: token.len,
        });
    }
    Ok(lexemes)
}

/// Render one input line according to `options`.
pub fn render_line(line: &str, options: &CliOptions) -> Result<String> {
    let lexemes = line_lexemes(line, options.normalize)?;
    let mut out = String::with_capacity(line.len() + 8);

    if options.sentences {
        for sentence in split_sentences(lexemes) {
            let words: Vec<String> = sentence.words().map(|lexeme| form(lexeme, options)).collect();
            if !words.is_empty() {
                out.push_str(&words.join(" "));
                out.push('\n');
            }
        }
        return Ok(out);
    }

    for lexeme in lexemes.iter().filter(|lexeme| !lexeme.kind.is_space()) {
        out.push_str(&form(lexeme, options));
        out.push(' ');
        if lexeme.kind == TokenKind::PunctuationStrong {
            out.push('\n');
        }
    }
    out.push('\n');
    Ok(out)
}

fn form(lexeme: &Lexeme, options: &CliOptions) -> String {
    if options.kinds {
        format!("{}/{}", lexeme.text, lexeme.kind)
    } else {
        lexeme.text.clone()
    }
}
