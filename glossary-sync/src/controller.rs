//! Synchronization controller.
//!
//! Owns the authoritative in-memory collection on the client side and moves
//! through three phases:
//!
//! 1. **Bootstrap**: the cache comes from the local snapshot, or from the
//!    default collection when there is none.
//! 2. **Reconcile**: once, the record store is asked for its collection. A
//!    non-empty answer replaces the cache outright; an empty answer or any
//!    failure keeps the bootstrap cache.
//! 3. **Synchronized**: every mutation updates the cache, rewrites the
//!    snapshot and enqueues a best-effort push. Push results never reach the
//!    mutation's caller.

use crate::config::SyncConfig;
use crate::defaults::default_collection;
use crate::error::{SyncError, SyncResult};
use crate::remote::HttpRecordStore;
use crate::snapshot::{FileSnapshot, LocalSnapshot};
use crate::worker::{PushCounters, PushStats, PushTask, PushWorker};
use glossary_codec::{Export, Format};
use glossary_merge::{merge, upsert_into, MergeOrder};
use glossary_store::RecordStore;
use glossary_types::{Collection, TermRecord, ValidationError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Lifecycle phase of a [`SyncController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Bootstrap,
    Reconcile,
    Synchronized,
}

/// What [`SyncController::reconcile`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The store had data; the cache now holds its `count` terms.
    ReplacedFromRemote { count: usize },
    /// The store was reachable but empty; the cache was kept.
    RemoteEmpty,
    /// The store failed or timed out; the cache was kept.
    RemoteUnavailable { reason: String },
    /// Reconcile already ran, or a mutation happened first; nothing was done.
    Skipped,
}

/// Result of a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records taken from the payload.
    pub imported: usize,
    /// Payload entries dropped for lacking a term.
    pub skipped: usize,
    /// Size of the collection after the merge.
    pub total: usize,
}

/// Client-side owner of the glossary collection.
pub struct SyncController {
    cache: Collection,
    phase: SyncPhase,
    snapshot: Box<dyn LocalSnapshot>,
    remote: Arc<dyn RecordStore>,
    request_timeout: Duration,
    push_tx: mpsc::UnboundedSender<PushTask>,
    worker: JoinHandle<()>,
    counters: Arc<PushCounters>,
}

impl SyncController {
    /// Enters the Bootstrap phase and starts the push worker.
    ///
    /// Must be called within a Tokio runtime. An unreadable snapshot is
    /// logged and treated as absent.
    pub fn bootstrap(
        snapshot: Box<dyn LocalSnapshot>,
        remote: Arc<dyn RecordStore>,
        request_timeout: Duration,
    ) -> Self {
        let cache = match snapshot.load() {
            Ok(Some(collection)) => {
                info!("Loaded {} terms from local snapshot", collection.len());
                collection
            }
            Ok(None) => {
                debug!("No local snapshot, seeding default glossary");
                default_collection()
            }
            Err(e) => {
                warn!("Ignoring unreadable local snapshot: {}", e);
                default_collection()
            }
        };

        let counters = Arc::new(PushCounters::default());
        let (push_tx, worker) =
            PushWorker::spawn(Arc::clone(&remote), request_timeout, Arc::clone(&counters));

        Self {
            cache,
            phase: SyncPhase::Bootstrap,
            snapshot,
            remote,
            request_timeout,
            push_tx,
            worker,
            counters,
        }
    }

    /// Bootstraps against a file snapshot and an HTTP record store.
    pub fn from_config(config: &SyncConfig) -> SyncResult<Self> {
        let remote = HttpRecordStore::from_config(config)?;
        Ok(Self::bootstrap(
            Box::new(FileSnapshot::new(&config.snapshot_path)),
            Arc::new(remote),
            config.request_timeout(),
        ))
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn collection(&self) -> &Collection {
        &self.cache
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn push_stats(&self) -> PushStats {
        self.counters.stats()
    }

    // ── Reconcile ────────────────────────────────────────────────

    /// Runs the one-time Reconcile step. Never fails; see [`ReconcileOutcome`].
    pub async fn reconcile(&mut self) -> ReconcileOutcome {
        if self.phase != SyncPhase::Bootstrap {
            return ReconcileOutcome::Skipped;
        }
        self.phase = SyncPhase::Reconcile;

        let outcome = match tokio::time::timeout(self.request_timeout, self.remote.get()).await {
            Ok(Ok(remote)) if !remote.is_empty() => {
                let count = remote.len();
                self.cache = remote;
                self.save_snapshot();
                info!("Replaced local glossary with {} terms from store", count);
                ReconcileOutcome::ReplacedFromRemote { count }
            }
            Ok(Ok(_)) => {
                info!("Store is empty, keeping {} local terms", self.cache.len());
                ReconcileOutcome::RemoteEmpty
            }
            Ok(Err(e)) => {
                warn!("Store unreachable, keeping local glossary: {}", e);
                ReconcileOutcome::RemoteUnavailable {
                    reason: e.to_string(),
                }
            }
            Err(_) => {
                warn!(
                    "Store fetch timed out after {:?}, keeping local glossary",
                    self.request_timeout
                );
                ReconcileOutcome::RemoteUnavailable {
                    reason: "timed out".to_string(),
                }
            }
        };

        self.phase = SyncPhase::Synchronized;
        outcome
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Adds a term, replacing any existing term with the same case-folded key
    /// in place.
    pub fn add_term(&mut self, record: TermRecord) -> SyncResult<()> {
        record.validate()?;
        upsert_into(&mut self.cache, record);
        self.commit("add term");
        Ok(())
    }

    /// Removes the term at `index` and returns it.
    pub fn delete_term(&mut self, index: usize) -> SyncResult<TermRecord> {
        let len = self.cache.len();
        let removed = self
            .cache
            .remove(index)
            .ok_or(SyncError::IndexOutOfRange { index, len })?;
        self.commit("delete term");
        Ok(removed)
    }

    /// Appends an example to the term at `index`.
    pub fn add_example(&mut self, index: usize, example: impl Into<String>) -> SyncResult<()> {
        let example = example.into();
        let example = example.trim();
        if example.is_empty() {
            return Err(ValidationError::EmptyExample.into());
        }
        let len = self.cache.len();
        let record = self
            .cache
            .get_mut(index)
            .ok_or(SyncError::IndexOutOfRange { index, len })?;
        record.examples.push(example.to_string());
        self.commit("add example");
        Ok(())
    }

    /// Imports a payload, merging it over the cache newest-first.
    ///
    /// A payload that fails to parse is discarded whole and the cache is left
    /// untouched.
    pub fn import(&mut self, payload: &str, format: Format) -> SyncResult<ImportSummary> {
        let parsed = glossary_codec::import(payload, format)?;
        self.cache = merge(&self.cache, &parsed.collection, MergeOrder::NewestFirst);
        let summary = ImportSummary {
            imported: parsed.collection.len(),
            skipped: parsed.skipped,
            total: self.cache.len(),
        };
        info!(
            "Imported {} terms ({} skipped), {} total",
            summary.imported, summary.skipped, summary.total
        );
        self.commit("import");
        Ok(summary)
    }

    /// Imports a file, choosing the format from its extension.
    pub fn import_file(&mut self, path: &Path) -> SyncResult<ImportSummary> {
        let format = Format::from_path(path)?;
        let payload = std::fs::read_to_string(path)?;
        self.import(&payload, format)
    }

    /// Restores the default collection.
    pub fn reset(&mut self) {
        self.cache = default_collection();
        self.commit("reset");
    }

    // ── Export ───────────────────────────────────────────────────

    /// Renders the cache for download.
    pub fn export(&self, format: Format) -> SyncResult<Export> {
        Ok(glossary_codec::export(&self.cache, format)?)
    }

    /// Writes an export into `dir` under its fixed file name.
    pub fn export_to_dir(&self, format: Format, dir: &Path) -> SyncResult<PathBuf> {
        let export = self.export(format)?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(export.file_name);
        std::fs::write(&path, export.content)?;
        Ok(path)
    }

    // ── Push worker ──────────────────────────────────────────────

    /// Waits until every push enqueued so far has been attempted.
    pub async fn flush(&self) -> SyncResult<()> {
        let (done, wait) = oneshot::channel();
        self.push_tx
            .send(PushTask::Flush(done))
            .map_err(|_| SyncError::ChannelClosed)?;
        wait.await.map_err(|_| SyncError::ChannelClosed)
    }

    /// Drains pending pushes, stops the worker and returns the final cache.
    pub async fn shutdown(self) -> Collection {
        let Self {
            cache,
            push_tx,
            worker,
            ..
        } = self;
        drop(push_tx);
        if let Err(e) = worker.await {
            warn!("Push worker ended abnormally: {}", e);
        }
        cache
    }

    fn commit(&mut self, reason: &'static str) {
        self.phase = SyncPhase::Synchronized;
        self.save_snapshot();
        let task = PushTask::Push {
            collection: self.cache.clone(),
            reason,
        };
        if self.push_tx.send(task).is_err() {
            warn!("Push worker stopped, {} stays local", reason);
        }
    }

    fn save_snapshot(&self) {
        if let Err(e) = self.snapshot.save(&self.cache) {
            warn!("Failed to write local snapshot: {}", e);
        }
    }
}
