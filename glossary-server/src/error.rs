//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use glossary_store::StoreError;
use glossary_types::ValidationError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// A failed request, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The body is JSON of the wrong shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The durable store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
