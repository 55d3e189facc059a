//! Parallel processing of independent lines.
//!
//! Every line gets its own cursor, so lines are tokenized on the rayon
//! pool with no shared state. Output order matches input order.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::normalize::normalize_text;
use crate::surface::{tokenize, Lexeme};

/// [`normalize_text`] on every line, in parallel.
///
/// Fails if any line fails.
pub fn normalize_lines<S>(lines: &[S]) -> Result<Vec<String>>
where
    S: AsRef<str> + Sync,
{
    debug!(lines = lines.len(), "normalizing lines in parallel");
    lines
        .par_iter()
        .map(|line| normalize_text(line.as_ref()))
        .collect()
}

/// [`tokenize`] on every line, in parallel.
pub fn tokenize_lines<S>(lines: &[S]) -> Result<Vec<Vec<Lexeme>>>
where
    S: AsRef<str> + Sync,
{
    debug!(lines = lines.len(), "tokenizing lines in parallel");
    lines.par_iter().map(|line| tokenize(line.as_ref())).collect()
}
