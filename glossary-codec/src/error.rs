//! Error types for import and export.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that abort an import or export. A failed import is discarded whole.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not valid JSON, or a collection failed to serialize.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON payload parsed but is not an array of records.
    #[error("expected a JSON array of terms")]
    NotAnArray,

    /// The file name does not map to a known format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl From<glossary_types::Error> for CodecError {
    fn from(err: glossary_types::Error) -> Self {
        match err {
            glossary_types::Error::Serialization(e) => Self::Json(e),
            glossary_types::Error::Validation(_) => Self::NotAnArray,
        }
    }
}
