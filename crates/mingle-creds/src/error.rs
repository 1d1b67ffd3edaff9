//! Error types for credential store operations.

use thiserror::Error;

/// Errors from credential store operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A persisted line does not split into exactly two whitespace-separated
    /// tokens. Fatal at load time: the format has no recovery path.
    #[error("malformed credential on line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for credential store operations.
pub type CredentialResult<T> = Result<T, CredentialError>;
