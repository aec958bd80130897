//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a [`SyncController`](crate::SyncController).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Base URL of the record store server.
    pub remote_url: String,
    /// Bound on each fetch and push (ms). A timeout counts as a failure.
    pub request_timeout_ms: u64,
    /// File holding the client-local snapshot.
    pub snapshot_path: PathBuf,
}

impl SyncConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote_url: "http://localhost:4000".to_string(),
            request_timeout_ms: 8_000,
            snapshot_path: PathBuf::from("glossary-snapshot.json"),
        }
    }
}
