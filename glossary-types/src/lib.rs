//! Core type definitions for the glossary.
//!
//! This crate defines the types every other glossary crate exchanges:
//! - [`TermRecord`]: one glossary entry (term, definition, examples, link)
//! - [`TermKey`]: the case-insensitive identity used for deduplication
//! - [`Collection`]: an insertion-ordered sequence of records
//!
//! Untyped JSON coming in over HTTP or from an import file is checked once,
//! here, by [`TermRecord::from_value`] and [`Collection::from_value`]. Callers
//! downstream only ever see validated records.

mod collection;
mod term;

pub use collection::{Collection, ParsedCollection};
pub use term::{TermKey, TermRecord};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A malformed request body or record, rejected before any mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The payload was expected to be a JSON array of records.
    #[error("Expected array")]
    NotAnArray,

    /// A record was expected to be a JSON object.
    #[error("Expected object")]
    NotAnObject,

    /// The identifying `term` field is absent or blank.
    #[error("Missing term")]
    MissingTerm,

    /// An example text is blank.
    #[error("example text is empty")]
    EmptyExample,
}
