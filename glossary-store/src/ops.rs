//! Collection operations built on whole-collection read and replace.
//!
//! Each operation reads the stored collection, computes the new one in
//! memory and replaces it. Nothing is written when the read fails.
//!
//! The read and the replace are separate store calls. Callers that run these
//! concurrently must serialize them, or later writes drop earlier ones.

use crate::error::StoreResult;
use crate::RecordStore;
use glossary_merge::{merge, MergeOrder};
use glossary_types::{Collection, TermRecord};
use tracing::debug;

/// Merges `incoming` into the stored collection by case-folded term, incoming
/// winning, and returns the merged result.
pub async fn merge_into(store: &dyn RecordStore, incoming: &Collection) -> StoreResult<Collection> {
    let existing = store.get().await?;
    let merged = merge(&existing, incoming, MergeOrder::Natural);
    store.replace(&merged).await?;
    debug!(
        "Merged {} incoming terms into {} stored, {} total",
        incoming.len(),
        existing.len(),
        merged.len()
    );
    Ok(merged)
}

/// Appends one record to the end of the stored collection. No deduplication.
pub async fn append(store: &dyn RecordStore, record: TermRecord) -> StoreResult<TermRecord> {
    let mut existing = store.get().await?;
    existing.push(record.clone());
    store.replace(&existing).await?;
    Ok(record)
}

/// Removes every stored record whose term equals `term` exactly and returns
/// how many were removed.
pub async fn delete_term(store: &dyn RecordStore, term: &str) -> StoreResult<usize> {
    let mut existing = store.get().await?;
    let deleted = existing.remove_term_exact(term);
    store.replace(&existing).await?;
    Ok(deleted)
}
