//! Client-local snapshot of the cached collection.
//!
//! The snapshot is read once at bootstrap and rewritten after every mutation.
//! It is the client's durable copy when the record store is out of reach.

use crate::error::{SyncError, SyncResult};
use glossary_types::Collection;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A key-value slot holding one serialized collection.
pub trait LocalSnapshot: Send {
    /// Loads the stored collection, or `None` if nothing has been saved yet.
    fn load(&self) -> SyncResult<Option<Collection>>;

    /// Overwrites the stored collection.
    fn save(&self, collection: &Collection) -> SyncResult<()>;
}

/// Snapshot kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocalSnapshot for FileSnapshot {
    fn load(&self) -> SyncResult<Option<Collection>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let parsed = Collection::from_json_str(&text)
            .map_err(|e| SyncError::Snapshot(format!("{}: {e}", self.path.display())))?;
        Ok(Some(parsed.collection))
    }

    fn save(&self, collection: &Collection) -> SyncResult<()> {
        let json = serde_json::to_string(collection)
            .map_err(|e| SyncError::Snapshot(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Snapshot held in memory, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySnapshot {
    slot: Mutex<Option<String>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot that already holds `collection`.
    pub fn with_collection(collection: &Collection) -> SyncResult<Self> {
        let snapshot = Self::new();
        snapshot.save(collection)?;
        Ok(snapshot)
    }

    /// Creates a snapshot holding arbitrary text, e.g. a corrupt payload.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    fn lock(&self) -> SyncResult<std::sync::MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| SyncError::Snapshot("snapshot lock poisoned".to_string()))
    }
}

impl LocalSnapshot for MemorySnapshot {
    fn load(&self) -> SyncResult<Option<Collection>> {
        let slot = self.lock()?;
        match slot.as_deref() {
            None => Ok(None),
            Some(text) => Collection::from_json_str(text)
                .map(|parsed| Some(parsed.collection))
                .map_err(|e| SyncError::Snapshot(e.to_string())),
        }
    }

    fn save(&self, collection: &Collection) -> SyncResult<()> {
        let json = serde_json::to_string(collection)
            .map_err(|e| SyncError::Snapshot(e.to_string()))?;
        *self.lock()? = Some(json);
        Ok(())
    }
}

impl<T: LocalSnapshot + Sync> LocalSnapshot for std::sync::Arc<T> {
    fn load(&self) -> SyncResult<Option<Collection>> {
        (**self).load()
    }

    fn save(&self, collection: &Collection) -> SyncResult<()> {
        (**self).save(collection)
    }
}
