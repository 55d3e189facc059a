//! Token kind tag.
//!
//! Discriminants are stable: embedding hosts (search-engine lexeme
//! catalogs, bindings) store them. `End` is 0 and is never listed in the
//! catalog; the other kinds are numbered from 1 in catalog order.

use std::fmt;

/// Kind of a token produced by the cursor.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input (zero-length).
    End = 0,
    /// A single space following a non-space token.
    Space = 1,
    /// A word, possibly with absorbed inclusive suffixes or hyphens.
    Word = 2,
    /// A hyphenated compound (`brise-glace`). Reserved for hosts; the
    /// cursor reports compounds as [`TokenKind::Word`].
    Compound = 3,
    /// A run of `.`, `!` or `?`.
    PunctuationStrong = 4,
    /// Any other punctuation sign.
    PunctuationSoft = 5,
    /// A number, possibly with connectors (`12/03/2024`, `1.5`).
    Number = 6,
    /// Anything starting with `http` or `www.`.
    Url = 7,
    /// `@becker1982`
    CiteKey = 8,
    /// `:-)`, `ô.ô`, `^^`
    Emoticon = 9,
    /// `:happy:`
    Emoji = 10,
    /// `A.`, `éd.`, `pp.`
    Abbreviation = 11,
    /// A run of control characters.
    Control = 12,
    /// `122ème`, `1ère`
    Ordinal = 13,
    /// `\n`
    Newline = 14,
    /// Subsequent spaces, tabs and other whitespace.
    SpaceRun = 15,
}

impl TokenKind {
    /// Every kind except [`TokenKind::End`], in id order.
    pub const ALL: &[TokenKind] = &[
        TokenKind::Space,
        TokenKind::Word,
        TokenKind::Compound,
        TokenKind::PunctuationStrong,
        TokenKind::PunctuationSoft,
        TokenKind::Number,
        TokenKind::Url,
        TokenKind::CiteKey,
        TokenKind::Emoticon,
        TokenKind::Emoji,
        TokenKind::Abbreviation,
        TokenKind::Control,
        TokenKind::Ordinal,
        TokenKind::Newline,
        TokenKind::SpaceRun,
    ];

    /// Stable numeric id.
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Kind for a numeric id, if any.
    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::End,
            1 => Self::Space,
            2 => Self::Word,
            3 => Self::Compound,
            4 => Self::PunctuationStrong,
            5 => Self::PunctuationSoft,
            6 => Self::Number,
            7 => Self::Url,
            8 => Self::CiteKey,
            9 => Self::Emoticon,
            10 => Self::Emoji,
            11 => Self::Abbreviation,
            12 => Self::Control,
            13 => Self::Ordinal,
            14 => Self::Newline,
            15 => Self::SpaceRun,
            _ => return None,
        })
    }

    /// Short alias, as used in lexeme catalogs.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Space => "space",
            Self::Word => "word",
            Self::Compound => "compound",
            Self::PunctuationStrong => "punct1",
            Self::PunctuationSoft => "punct2",
            Self::Number => "number",
            Self::Url => "url",
            Self::CiteKey => "citekey",
            Self::Emoticon => "emoticon",
            Self::Emoji => "emoji",
            Self::Abbreviation => "abbrev",
            Self::Control => "ctrl",
            Self::Ordinal => "ordinal",
            Self::Newline => "newline",
            Self::SpaceRun => "space1",
        }
    }

    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::End => "end of input",
            Self::Space => "a single simple space",
            Self::Word => "a word",
            Self::Compound => "brise-glace, peut-être",
            Self::PunctuationStrong => "strong punctuation (any sequence of '.', '?' or '!')",
            Self::PunctuationSoft => "any other punctuation sign",
            Self::Number => "a number",
            Self::Url => "anything that starts with 'www.' or 'http'",
            Self::CiteKey => "@becker1982 or @_12xZle",
            Self::Emoticon => ":-) ô.ô ^^",
            Self::Emoji => ":happy:",
            Self::Abbreviation => "'A.', 'éd.', 'pp.'",
            Self::Control => "control key",
            Self::Ordinal => "122ème 1ère",
            Self::Newline => "\\n",
            Self::SpaceRun => "any other space (subsequent space, tab, ...)",
        }
    }

    /// Kind for an alias returned by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        std::iter::once(Self::End)
            .chain(Self::ALL.iter().copied())
            .find(|kind| kind.name() == name)
    }

    /// `Space`, `SpaceRun` or `Newline`.
    #[inline]
    pub const fn is_space(self) -> bool {
        matches!(self, Self::Space | Self::SpaceRun | Self::Newline)
    }

    /// Kinds after which a sentence ends.
    #[inline]
    pub const fn ends_sentence(self) -> bool {
        matches!(
            self,
            Self::PunctuationStrong | Self::Newline | Self::Emoticon | Self::Emoji
        )
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenKind::{}", self.name())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Compile-time size assertion: TokenKind must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);

/// One row of the lexeme catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexemeDescriptor {
    /// Stable numeric id (never 0).
    pub id: u8,
    /// Short alias (`word`, `punct1`, ...).
    pub alias: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// Catalog of every token kind a host may store, in id order.
pub fn lexeme_catalog() -> impl ExactSizeIterator<Item = LexemeDescriptor> {
    TokenKind::ALL.iter().map(|&kind| LexemeDescriptor {
        id: kind.id(),
        alias: kind.name(),
        description: kind.description(),
    })
}
