//! Error types for the sync layer.

use glossary_codec::CodecError;
use glossary_store::StoreError;
use glossary_types::ValidationError;
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
///
/// Store failures never reach mutation callers; they appear here only for
/// operations that talk to the store directly, such as building a client.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A mutation was rejected before touching the cache.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An import payload could not be parsed; nothing was imported.
    #[error("import failed: {0}")]
    Parse(#[from] CodecError),

    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The local snapshot is unreadable.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No term at the given position.
    #[error("no term at index {index} (collection has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The push worker has stopped.
    #[error("channel closed")]
    ChannelClosed,
}
