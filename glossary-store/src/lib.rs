//! Whole-collection persistence for the glossary.
//!
//! A record store holds one ordered [`Collection`] and supports exactly two
//! primitive operations: read it all, or replace it all. There is no
//! field-level patching and no incremental diff; concurrent writers race and
//! the last replace wins.
//!
//! # Backends
//!
//! - [`FileRecordStore`]: a pretty-printed JSON file, replaced atomically
//! - [`MemoryRecordStore`]: in-process, with a switch to simulate outages
//!
//! The [`ops`] module builds the server-side operations (merge, append,
//! delete-by-term) on top of the two primitives.

mod error;
mod file_store;
mod memory_store;
pub mod ops;

pub use error::{StoreError, StoreResult};
pub use file_store::FileRecordStore;
pub use memory_store::MemoryRecordStore;

use async_trait::async_trait;
use glossary_types::Collection;

/// Durable home of a glossary collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns a short name for logs.
    fn name(&self) -> &'static str;

    /// Reads the whole collection. Absence reads as empty, never as an error.
    async fn get(&self) -> StoreResult<Collection>;

    /// Replaces the whole collection. Readers never observe a partial write.
    async fn replace(&self, collection: &Collection) -> StoreResult<()>;
}
