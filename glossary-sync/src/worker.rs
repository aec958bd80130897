//! Background push worker.
//!
//! Mutations enqueue the full cached collection and return immediately. The
//! worker replaces the remote collection with it, bounded by a timeout, and
//! only logs the outcome. Pushes already waiting in the queue when the worker
//! picks one up are coalesced: only the newest collection is sent, since each
//! push carries the whole collection anyway.

use glossary_store::RecordStore;
use glossary_types::Collection;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Work items for the push worker.
pub(crate) enum PushTask {
    /// Replace the remote collection.
    Push {
        collection: Collection,
        reason: &'static str,
    },
    /// Signal once every push queued before this one has been attempted.
    Flush(oneshot::Sender<()>),
}

/// Counters describing what the worker has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushStats {
    /// Pushes the store accepted.
    pub pushed: u64,
    /// Pushes that failed or timed out.
    pub failed: u64,
    /// Queued pushes skipped because a newer one superseded them.
    pub coalesced: u64,
}

#[derive(Debug, Default)]
pub(crate) struct PushCounters {
    pushed: AtomicU64,
    failed: AtomicU64,
    coalesced: AtomicU64,
}

impl PushCounters {
    pub(crate) fn stats(&self) -> PushStats {
        PushStats {
            pushed: self.pushed.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
            coalesced: self.coalesced.load(Ordering::SeqCst),
        }
    }
}

pub(crate) struct PushWorker {
    remote: Arc<dyn RecordStore>,
    timeout: Duration,
    counters: Arc<PushCounters>,
    rx: mpsc::UnboundedReceiver<PushTask>,
}

impl PushWorker {
    /// Spawns the worker on the current Tokio runtime.
    pub(crate) fn spawn(
        remote: Arc<dyn RecordStore>,
        timeout: Duration,
        counters: Arc<PushCounters>,
    ) -> (mpsc::UnboundedSender<PushTask>, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = Self {
            remote,
            timeout,
            counters,
            rx,
        };
        (tx, tokio::spawn(worker.run()))
    }

    async fn run(mut self) {
        while let Some(task) = self.rx.recv().await {
            match task {
                PushTask::Push { collection, reason } => {
                    let (latest, reason, flushes) = self.coalesce(collection, reason);
                    self.push(&latest, reason).await;
                    for done in flushes {
                        let _ = done.send(());
                    }
                }
                PushTask::Flush(done) => {
                    let _ = done.send(());
                }
            }
        }
        debug!("Push worker stopped");
    }

    /// Drains pushes already queued behind `collection`, stopping at the
    /// first flush so later pushes stay ordered after it.
    fn coalesce(
        &mut self,
        mut latest: Collection,
        mut reason: &'static str,
    ) -> (Collection, &'static str, Vec<oneshot::Sender<()>>) {
        let mut flushes = Vec::new();
        while let Ok(task) = self.rx.try_recv() {
            match task {
                PushTask::Push {
                    collection,
                    reason: newer,
                } => {
                    self.counters.coalesced.fetch_add(1, Ordering::SeqCst);
                    latest = collection;
                    reason = newer;
                }
                PushTask::Flush(done) => {
                    flushes.push(done);
                    break;
                }
            }
        }
        (latest, reason, flushes)
    }

    async fn push(&self, collection: &Collection, reason: &'static str) {
        match tokio::time::timeout(self.timeout, self.remote.replace(collection)).await {
            Ok(Ok(())) => {
                self.counters.pushed.fetch_add(1, Ordering::SeqCst);
                debug!(
                    "Pushed {} terms to {} store after {}",
                    collection.len(),
                    self.remote.name(),
                    reason
                );
            }
            Ok(Err(e)) => {
                self.counters.failed.fetch_add(1, Ordering::SeqCst);
                warn!("Push after {} failed, keeping local state: {}", reason, e);
            }
            Err(_) => {
                self.counters.failed.fetch_add(1, Ordering::SeqCst);
                warn!(
                    "Push after {} timed out after {:?}, keeping local state",
                    reason, self.timeout
                );
            }
        }
    }
}
