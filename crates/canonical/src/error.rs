use thiserror::Error;

/// Errors that can occur during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    /// The input could not be interpreted as text (for example, bytes that
    /// are not valid UTF-8).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
