//! Client-side glossary cache with best-effort sync.
//!
//! The [`SyncController`] keeps the working collection in memory, mirrors it
//! into a local snapshot after every change, and pushes it to the record
//! store in the background.
//!
//! # Components
//!
//! - **Controller**: owns the cache; Bootstrap → Reconcile → Synchronized
//! - **Snapshot**: client-local durable copy ([`FileSnapshot`], [`MemorySnapshot`])
//! - **Remote**: the record store over HTTP ([`HttpRecordStore`])
//! - **Push worker**: drains a queue of whole-collection pushes and logs
//!   failures without surfacing them
//!
//! # Example
//!
//! ```no_run
//! use glossary_sync::{SyncConfig, SyncController};
//! use glossary_types::TermRecord;
//!
//! # async fn run() -> glossary_sync::SyncResult<()> {
//! let mut controller = SyncController::from_config(&SyncConfig::default())?;
//! controller.reconcile().await;
//! controller.add_term(TermRecord::new("record", "An immutable reference type"))?;
//! controller.flush().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod controller;
mod defaults;
mod error;
mod remote;
mod snapshot;
mod worker;

pub use config::SyncConfig;
pub use controller::{ImportSummary, ReconcileOutcome, SyncController, SyncPhase};
pub use defaults::default_collection;
pub use error::{SyncError, SyncResult};
pub use remote::HttpRecordStore;
pub use snapshot::{FileSnapshot, LocalSnapshot, MemorySnapshot};
pub use worker::PushStats;
