//! Command-line front end for the jusquci tokenizer.
//!
//! Reads standard input, splits it into lines and prints the tokens of each
//! line (or sentences, or word frequencies) to standard output.

mod error;
mod freq;
mod options;
mod render;

use std::io::{Read, Write};
use std::sync::Once;

use rayon::prelude::*;
use tracing::debug;

pub use error::{CliError, Result};
pub use freq::{count_line, count_lines, sorted, Frequencies};
pub use options::{CliOptions, USAGE};
pub use render::{line_lexemes, render_line};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`; does nothing when it is unset.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Split `text` on `\n`; a trailing newline does not start an extra line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for end in memchr::memchr_iter(b'\n', text.as_bytes()) {
        lines.push(&text[start..end]);
        start = end + 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Process `input` according to `options` and write the result to `out`.
pub fn process(input: &str, options: &CliOptions, out: &mut impl Write) -> Result<()> {
    let lines = split_lines(input);
    debug!(lines = lines.len(), parallel = options.parallel, "processing input");

    if options.freq {
        for (form, count) in sorted(count_lines(&lines, options.parallel)?) {
            writeln!(out, "{count}\t{form}")?;
        }
        return Ok(());
    }

    let rendered: Vec<String> = if options.parallel {
        lines
            .par_iter()
            .map(|line| render_line(line, options))
            .collect::<Result<_>>()?
    } else {
        lines
            .iter()
            .map(|line| render_line(line, options))
            .collect::<Result<_>>()?
    };
    for line in rendered {
        out.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Read standard input to the end and process it to standard output.
pub fn run(options: &CliOptions) -> Result<()> {
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    process(&input, options, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
