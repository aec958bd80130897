//! Error types for the record store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur reading or replacing the durable collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer in time.
    #[error("operation timed out")]
    Timeout,

    /// The store answered with an error status.
    #[error("store returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The store answered with a body that is not a collection.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
