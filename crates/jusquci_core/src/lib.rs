//! Low-level French tokenizer.
//!
//! Standalone crate with no logging and a single error type, so that hosts
//! (search-engine adapters, bindings, editors) can embed the tokenizer
//! without the normalizer or the CLI.
//!
//! # Architecture
//!
//! - [`char_class`]: code point → coarse [`CharClass`]
//! - [`affix`]: recursive suffix grammar and flat abbreviation tables
//! - [`detect`]: lookahead detectors for emoticons, URLs, arrows, ...
//! - [`Cursor`]: the state machine, one [`Token`] per call
//! - [`SourceBuffer`] and [`ByteOffsets`]: decoding and byte-span bridging
//!
//! ```
//! use jusquci_core::{SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("p. ex.");
//! let mut cursor = buf.cursor();
//! let token = cursor.next_token()?;
//! assert_eq!(token.kind, TokenKind::Abbreviation);
//! assert_eq!(buf.text(&token), "p.");
//! # Ok::<(), jusquci_core::TrackingError>(())
//! ```

pub mod affix;
mod byte_offsets;
pub mod char_class;
mod cursor;
pub mod detect;
mod source_buffer;
mod tag;
mod tracking;

pub use byte_offsets::ByteOffsets;
pub use char_class::{classify, is_word_char, CharClass, INTERPUNCT};
pub use cursor::{Cursor, CursorConfig, Deferred, Token};
pub use source_buffer::SourceBuffer;
pub use tag::{lexeme_catalog, LexemeDescriptor, TokenKind};
pub use tracking::{SuffixSpan, TrackingError};
