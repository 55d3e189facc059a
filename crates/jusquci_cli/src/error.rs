use thiserror::Error;

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tokenizer(#[from] jusquci::Error),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
