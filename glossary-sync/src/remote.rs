//! HTTP client for the record store server.
//!
//! Speaks the whole-collection contract: `GET /collection` to read and
//! `PUT /collection` to replace.

use crate::config::SyncConfig;
use async_trait::async_trait;
use glossary_store::{RecordStore, StoreError, StoreResult};
use glossary_types::Collection;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Record store reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    base_url: String,
    client: Client,
}

impl HttpRecordStore {
    /// Creates a client for the server at `base_url`, bounding every request
    /// by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to create HTTP client: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &SyncConfig) -> StoreResult<Self> {
        Self::new(&config.remote_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/collection", self.base_url)
    }
}

fn map_request_error(e: reqwest::Error) -> StoreError {
    if e.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Unavailable(e.to_string())
    }
}

async fn check_status(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or(body);
    Err(StoreError::Http {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get(&self) -> StoreResult<Collection> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(map_request_error)?;
        let response = check_status(response).await?;
        let value: Value = response
            .json()
            .await
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;
        let parsed =
            Collection::from_value(&value).map_err(|e| StoreError::InvalidData(e.to_string()))?;
        debug!("Fetched {} terms from {}", parsed.collection.len(), self.base_url);
        Ok(parsed.collection)
    }

    async fn replace(&self, collection: &Collection) -> StoreResult<()> {
        let response = self
            .client
            .put(self.collection_url())
            .json(collection)
            .send()
            .await
            .map_err(map_request_error)?;
        check_status(response).await?;
        debug!("Pushed {} terms to {}", collection.len(), self.base_url);
        Ok(())
    }
}
