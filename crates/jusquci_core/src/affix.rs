//! Affix matching: chainable optional suffixes and flat prefix tables.
//!
//! # Suffix grammar
//!
//! An [`AffixNode`] is a lowercase text plus an ordered list of optional
//! continuations. The feminine suffix tree realizes chains like
//! `auteur-rice-x-s`: `rice` → optional `x` → optional `s`. Siblings are
//! tried in declaration order and the first success wins, so the tables
//! below are priority-ordered.
//!
//! # Flat tables
//!
//! Abbreviations have no optional parts. They are looked up by exact
//! case-insensitive comparison, bucketed by length.

use crate::char_class::{fold, is_word_char};

/// One node of a suffix grammar.
///
/// `text` must be lowercase. Children are tried in order after the node
/// matched; the depth of every table in this module is at most 3.
#[derive(Debug)]
pub struct AffixNode {
    /// Lowercase text to match.
    pub text: &'static str,
    /// Optional continuations, in priority order.
    pub children: &'static [AffixNode],
}

impl AffixNode {
    /// Node with continuations.
    pub const fn new(text: &'static str, children: &'static [AffixNode]) -> Self {
        Self { text, children }
    }

    /// Node without continuations.
    pub const fn leaf(text: &'static str) -> Self {
        Self {
            text,
            children: &[],
        }
    }

    /// Length of the node's text in code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the node matches nothing (never the case in tables).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// "-s", "-x", "-x-s"
const PLURAL: &[AffixNode] = &[AffixNode::leaf("s")];
const PLURAL_OR_NONBINARY: &[AffixNode] = &[AffixNode::leaf("s"), AffixNode::new("x", PLURAL)];

/// Feminine suffixes of inclusive spelling (`lecteur·rice`, `ami.e.s`).
pub static FEMININE_SUFFIXES: &[AffixNode] = &[
    AffixNode::new("e", PLURAL_OR_NONBINARY),
    AffixNode::new("te", PLURAL_OR_NONBINARY),
    AffixNode::new("euse", PLURAL_OR_NONBINARY),
    AffixNode::new("ese", PLURAL_OR_NONBINARY),
    AffixNode::new("ère", PLURAL_OR_NONBINARY),
    AffixNode::new("ice", PLURAL_OR_NONBINARY),
    AffixNode::new("rice", PLURAL_OR_NONBINARY),
    AffixNode::new("trice", PLURAL_OR_NONBINARY),
    AffixNode::new("ale", PLURAL_OR_NONBINARY),
    AffixNode::new("ne", PLURAL_OR_NONBINARY),
    AffixNode::new("ive", PLURAL_OR_NONBINARY),
    AffixNode::new("esse", PLURAL_OR_NONBINARY),
    AffixNode::new("oresse", PLURAL_OR_NONBINARY),
    AffixNode::new("se", PLURAL_OR_NONBINARY),
    AffixNode::new("fe", PLURAL_OR_NONBINARY),
];

/// Pronouns and particles that follow a verb after a hyphen
/// (`peut-on`, `arrivons-nous`, `prends-les`, `celle-ci`).
pub static INVERSIONS: &[AffixNode] = &[
    AffixNode::leaf("je"),
    AffixNode::leaf("là"),
    AffixNode::leaf("ci"),
    AffixNode::leaf("t"),
    AffixNode::leaf("m"),
    AffixNode::leaf("tu"),
    AffixNode::leaf("on"),
    AffixNode::leaf("nous"),
    AffixNode::leaf("vous"),
    AffixNode::leaf("elle"),
    AffixNode::leaf("il"),
    AffixNode::leaf("ils"),
    AffixNode::leaf("elles"),
    AffixNode::leaf("iel"),
    AffixNode::leaf("iels"),
    AffixNode::leaf("moi"),
    AffixNode::leaf("toi"),
    AffixNode::leaf("lui"),
    AffixNode::leaf("leur"),
    AffixNode::leaf("eux"),
    AffixNode::leaf("elleux"),
    AffixNode::leaf("en"),
    AffixNode::leaf("ce"),
    AffixNode::leaf("y"),
    AffixNode::leaf("la"),
    AffixNode::leaf("les"),
    AffixNode::leaf("le"),
    AffixNode::leaf("ici"),
];

/// Ordinal suffixes attached to digits (`1ère`, `122ème`, `1ers`, `422e`).
pub static ORDINAL_SUFFIXES: &[AffixNode] = &[
    AffixNode::new("ère", PLURAL),
    AffixNode::new("ème", PLURAL),
    AffixNode::new("er", PLURAL),
    AffixNode::leaf("e"),
];

/// Longest entry of the abbreviation table.
pub const MAX_ABBREVIATION_LEN: usize = 4;

/// Single letters that are words, not initials, before a period.
const ONE_LETTER_WORDS: [char; 4] = ['a', 'à', 'x', 'y'];

/// Abbreviations of a given length.
///
/// Deliberately short: common abbreviations (`ex.`, `tél.`, `env.`) and
/// bibliographic ones. Entries that are also words (`art.`, `vol.`) are
/// left out.
fn abbreviations_of_len(len: usize) -> &'static [&'static str] {
    match len {
        2 => &["ch", "ph", "al", "éd", "ed", "ex", "pp", "dr", "mr"],
        3 => &["auj", "cit", "dir", "env", "fig", "hab", "maj", "tel", "tél", "mme"],
        4 => &["chap"],
        _ => &[],
    }
}

/// Match `node` (and, recursively, one of its continuations) at the start
/// of `input`.
///
/// Returns the end offset of the match within `input`. `input.len()` bounds
/// the match. After the node's text:
///
/// - end of input, or a non-word character other than `sep`: match;
/// - `sep`: children are tried after it; if none matches, the match stops
///   before the separator;
/// - a word character: children are tried right there (`ricex`, `1ers`);
///   if none matches, the whole match fails.
///
/// `sep = None` disables separator chaining.
pub fn match_affix(input: &[char], node: &AffixNode, sep: Option<char>) -> Option<usize> {
    let len = node.len();
    if input.len() < len {
        return None;
    }
    if !input.iter().zip(node.text.chars()).all(|(&c, t)| fold(c) == t) {
        return None;
    }

    let Some(&next) = input.get(len) else {
        return Some(len);
    };

    let (resume, fallback) = if Some(next) == sep {
        (len + 1, Some(len))
    } else if is_word_char(next) {
        (len, None)
    } else {
        return Some(len);
    };

    node.children
        .iter()
        .find_map(|child| match_affix(&input[resume..], child, sep).map(|end| resume + end))
        .or(fallback)
}

/// Length of an inclusive suffix starting at `input[0]`, the separator
/// (`-`, `.` or `·`), separator included.
pub fn inclusive_suffix_len(input: &[char]) -> Option<usize> {
    let (&sep, rest) = input.split_first()?;
    FEMININE_SUFFIXES
        .iter()
        .find_map(|node| match_affix(rest, node, Some(sep)))
        .map(|end| end + 1)
}

/// Returns `true` if `input` starts with a hyphen followed by an inverted
/// pronoun or particle.
pub fn is_inversion(input: &[char]) -> bool {
    match input.split_first() {
        Some((&'-', rest)) => INVERSIONS
            .iter()
            .any(|node| match_affix(rest, node, Some('-')).is_some()),
        _ => false,
    }
}

/// Length of an ordinal suffix at the start of `input`.
pub fn ordinal_suffix_len(input: &[char]) -> Option<usize> {
    ORDINAL_SUFFIXES
        .iter()
        .find_map(|node| match_affix(input, node, None))
}

/// Returns `true` if `word` (without its period) is a known abbreviation.
///
/// A single character counts as an initial (`A.`, `p.`) unless it is one
/// of the one-letter words `a`, `à`, `x`, `y`.
pub fn is_abbreviation(word: &[char]) -> bool {
    match word {
        [] => false,
        [single] => !ONE_LETTER_WORDS.contains(single),
        _ if word.len() > MAX_ABBREVIATION_LEN => false,
        _ => abbreviations_of_len(word.len())
            .iter()
            .any(|abbr| word.iter().zip(abbr.chars()).all(|(&c, a)| fold(c) == a)),
    }
}

#[cfg(test)]
mod tests;
