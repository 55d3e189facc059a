//! Frequencies of normalized word forms.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{CliError, Result};
use crate::render::line_lexemes;
use jusquci::TokenKind;

/// Normalized form → number of occurrences.
pub type Frequencies = FxHashMap<String, usize>;

/// Count the normalized words of `line` into `counts`.
pub fn count_line(line: &str, counts: &mut Frequencies) -> Result<()> {
    for lexeme in line_lexemes(line, true)? {
        if matches!(lexeme.kind, TokenKind::Word | TokenKind::Compound) {
            *counts.entry(lexeme.text).or_default() += 1;
        }
    }
    Ok(())
}

/// Count every line, on the rayon pool when `parallel` is set.
pub fn count_lines(lines: &[&str], parallel: bool) -> Result<Frequencies> {
    if !parallel {
        let mut counts = Frequencies::default();
        for line in lines {
            count_line(line, &mut counts)?;
        }
        return Ok(counts);
    }

    lines
        .par_iter()
        .map(|line| {
            let mut counts = Frequencies::default();
            count_line(line, &mut counts)?;
            Ok::<_, CliError>(counts)
        })
        .try_reduce(Frequencies::default, |mut left, right| {
            for (form, count) in right {
                *left.entry(form).or_default() += count;
            }
            Ok(left)
        })
}

/// Most frequent first; ties in lexical order.
pub fn sorted(counts: Frequencies) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_unstable_by(|(a, count_a), (b, count_b)| count_b.cmp(count_a).then_with(|| a.cmp(b)));
    entries
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
