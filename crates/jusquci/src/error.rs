use jusquci_core::TrackingError;
use thiserror::Error;

/// Error type for tokenization and normalization.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The cursor's tracking storage could not grow.
    #[error("tokenizer error: {0}")]
    Tracking(#[from] TrackingError),
}

/// Convenience Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
