//! JSON file record store.
//!
//! The collection lives in a single pretty-printed JSON file. A replace writes
//! a sibling temporary file and renames it over the original, so a reader sees
//! either the old or the new collection.

use crate::error::{StoreError, StoreResult};
use crate::RecordStore;
use async_trait::async_trait;
use glossary_types::Collection;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Record store backed by a JSON file on disk.
pub struct FileRecordStore {
    path: PathBuf,
    /// Serializes writers so they never share the temporary file.
    write_lock: Mutex<()>,
}

impl FileRecordStore {
    /// File name used inside a data directory.
    pub const FILE_NAME: &'static str = "glossary.json";

    /// Creates a store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a store at `<dir>/glossary.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Creates the data directory and an empty collection file if absent.
    async fn ensure_file(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }
        self.write_unlocked("[]").await?;
        info!("Initialized empty glossary at {}", self.path.display());
        Ok(())
    }

    async fn write_atomic(&self, contents: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_unlocked(contents).await
    }

    async fn write_unlocked(&self, contents: &str) -> StoreResult<()> {
        self.ensure_parent().await?;
        let tmp = self.temp_path();
        fs::write(&tmp, contents).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn get(&self) -> StoreResult<Collection> {
        self.ensure_file().await?;
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Collection::new());
        }

        let value: Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Unreadable glossary file {}, treating as empty: {}",
                    self.path.display(),
                    e
                );
                return Ok(Collection::new());
            }
        };

        match Collection::from_value(&value) {
            Ok(parsed) => {
                if parsed.skipped > 0 {
                    debug!(
                        "Ignored {} stored entries without a term in {}",
                        parsed.skipped,
                        self.path.display()
                    );
                }
                Ok(parsed.collection)
            }
            Err(e) => {
                warn!(
                    "Glossary file {} is not a collection, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Collection::new())
            }
        }
    }

    async fn replace(&self, collection: &Collection) -> StoreResult<()> {
        let json = collection.to_json_pretty().map_err(|e| match e {
            glossary_types::Error::Serialization(e) => StoreError::Serialization(e),
            other => StoreError::InvalidData(other.to_string()),
        })?;
        self.write_atomic(&json).await?;
        debug!("Wrote {} terms to {}", collection.len(), self.path.display());
        Ok(())
    }
}
