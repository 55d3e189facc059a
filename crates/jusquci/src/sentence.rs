//! Sentence segmentation on token kinds.
//!
//! A sentence ends after strong punctuation, a newline, an emoticon or an
//! emoji. Whitespace following the end stays with the sentence it closes,
//! so the next sentence starts at its first non-space token.

use jusquci_core::{CursorConfig, SourceBuffer};

use crate::error::Result;
use crate::surface::{buf_lexemes, Lexeme};

/// A run of surface tokens forming one sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sentence {
    pub lexemes: Vec<Lexeme>,
}

impl Sentence {
    /// Code-point offset of the first token.
    pub fn start(&self) -> usize {
        self.lexemes.first().map_or(0, |lexeme| lexeme.start)
    }

    /// Length in code points, trailing whitespace included.
    pub fn len(&self) -> usize {
        self.lexemes.iter().map(|lexeme| lexeme.len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// The sentence as written.
    pub fn text(&self) -> String {
        self.lexemes.iter().map(|lexeme| lexeme.text.as_str()).collect()
    }

    /// Tokens other than whitespace.
    pub fn words(&self) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter().filter(|lexeme| !lexeme.kind.is_space())
    }
}

/// Group surface tokens into sentences.
pub fn split_sentences(lexemes: impl IntoIterator<Item = Lexeme>) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current = Sentence::default();
    let mut ended = false;

    for lexeme in lexemes {
        if ended && !lexeme.kind.is_space() {
            sentences.push(std::mem::take(&mut current));
            ended = false;
        }
        ended |= lexeme.kind.ends_sentence();
        current.lexemes.push(lexeme);
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// Tokenize `text` and split it into sentences.
///
/// ```
/// let sentences = jusquci::sentences("Bonjour ! Ça va ? :-) Oui")?;
/// let texts: Vec<String> = sentences.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, ["Bonjour ! ", "Ça va ? ", ":-) ", "Oui"]);
/// # Ok::<(), jusquci::Error>(())
/// ```
pub fn sentences(text: &str) -> Result<Vec<Sentence>> {
    let buf = SourceBuffer::new(text);
    let lexemes = buf_lexemes(&buf, CursorConfig::default())?;
    Ok(split_sentences(lexemes))
}
