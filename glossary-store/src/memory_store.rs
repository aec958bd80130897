//! In-memory record store.

use crate::error::{StoreError, StoreResult};
use crate::RecordStore;
use async_trait::async_trait;
use glossary_types::Collection;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// Record store held in process memory.
///
/// [`MemoryRecordStore::set_available`] toggles a simulated outage: while
/// unavailable, every call fails with [`StoreError::Unavailable`] and the
/// stored collection is left untouched.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    collection: RwLock<Collection>,
    unavailable: AtomicBool,
    replace_count: AtomicUsize,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `collection`.
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: RwLock::new(collection),
            ..Self::default()
        }
    }

    /// Simulates the store going down or coming back.
    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    /// Number of successful replaces so far.
    pub fn replace_count(&self) -> usize {
        self.replace_count.load(Ordering::SeqCst)
    }

    /// Returns the stored collection regardless of simulated availability.
    pub async fn snapshot(&self) -> Collection {
        self.collection.read().await.clone()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self) -> StoreResult<Collection> {
        self.check_available()?;
        Ok(self.collection.read().await.clone())
    }

    async fn replace(&self, collection: &Collection) -> StoreResult<()> {
        self.check_available()?;
        *self.collection.write().await = collection.clone();
        self.replace_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
