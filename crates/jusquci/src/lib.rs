//! French tokenizer and normalizer.
//!
//! Builds on [`jusquci_core`]: the cursor's raw tokens are merged into
//! surface tokens ([`Tokens`], [`tokenize`]), rewritten into canonical forms
//! ([`normalize`], [`normalize_text`]) and grouped into [`sentences`].
//!
//! ```
//! use jusquci::{normalize_text, tokenize, TokenKind};
//!
//! let kinds: Vec<TokenKind> = tokenize("Viens-tu le 3ème ?")?
//!     .into_iter()
//!     .filter(|lexeme| !lexeme.kind.is_space())
//!     .map(|lexeme| lexeme.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Word, TokenKind::Word, TokenKind::Ordinal, TokenKind::PunctuationStrong]
//! );
//! assert_eq!(normalize_text("Viens-tu le 3ème ?")?, "Viens-tu le 2ème ?");
//! # Ok::<(), jusquci::Error>(())
//! ```

mod batch;
mod error;
mod normalize;
mod sentence;
mod surface;
mod typify;

pub use batch::{normalize_lines, tokenize_lines};
pub use error::{Error, Result};
pub use normalize::{
    normalize, normalize_text, normalize_token, reduce_repeated, NUMBER_PLACEHOLDER,
    ORDINAL_PLACEHOLDER,
};
pub use sentence::{sentences, split_sentences, Sentence};
pub use surface::{tokenize, Lexeme, Tokens};
pub use typify::typify;

pub use jusquci_core::{
    lexeme_catalog, ByteOffsets, Cursor, CursorConfig, LexemeDescriptor, SourceBuffer,
    SuffixSpan, Token, TokenKind, TrackingError,
};
