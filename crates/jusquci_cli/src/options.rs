//! Command-line options.

use crate::error::CliError;

/// Options parsed from command line arguments.
///
/// Output modes are independent flags; `--freq` takes precedence over
/// `--sentences`, which takes precedence over the default token listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CliOptions {
    /// Print normalized forms (--normalize, -n)
    pub normalize: bool,
    /// Print `text/kind` pairs (--kinds, -k)
    pub kinds: bool,
    /// One sentence per output line (--sentences, -s)
    pub sentences: bool,
    /// Print normalized word frequencies instead of tokens (--freq, -f)
    pub freq: bool,
    /// Process lines on the rayon pool (--parallel, -p)
    pub parallel: bool,
    /// Print usage and exit (--help, -h)
    pub help: bool,
}

impl CliOptions {
    /// Parse arguments, program name excluded.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--normalize" | "-n" => options.normalize = true,
                "--kinds" | "-k" => options.kinds = true,
                "--sentences" | "-s" => options.sentences = true,
                "--freq" | "-f" => options.freq = true,
                "--parallel" | "-p" => options.parallel = true,
                "--help" | "-h" => options.help = true,
                other => return Err(CliError::Usage(format!("unknown argument '{other}'"))),
            }
        }
        Ok(options)
    }
}

/// Usage text printed by `--help` and after usage errors.
pub const USAGE: &str = "\
Usage: jusquci [options] < input.txt

Tokenizes French text read from standard input, line by line.

Options:
  -n, --normalize   Print normalized forms
  -k, --kinds       Print tokens as text/kind
  -s, --sentences   Print one sentence per line
  -f, --freq        Print normalized word frequencies
  -p, --parallel    Process lines in parallel
  -h, --help        Print this message

Set RUST_LOG (e.g. RUST_LOG=jusquci=debug) to enable logging.";

#[cfg(test)]
mod tests;
