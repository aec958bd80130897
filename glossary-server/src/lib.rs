//! HTTP API over a glossary record store.
//!
//! Every route reads or replaces the whole stored collection:
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | `GET` | `/collection` | the stored array |
//! | `PUT` | `/collection` | `{ok, count}` |
//! | `POST` | `/collection/merge` | the merged array |
//! | `POST` | `/collection/term` | 201 with the appended record |
//! | `DELETE` | `/collection/term/{term}` | `{deleted}` |
//!
//! The same routes are also served under `/api/glossary`. Bodies are read as
//! raw bytes, so a missing content type is accepted and malformed JSON is a
//! 400 like any other bad body.
//!
//! Writes hold one server-wide lock from read to replace, so concurrent
//! appends, merges and deletes never overwrite each other.

mod error;

pub use error::ApiError;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use glossary_store::{ops, RecordStore};
use glossary_types::{Collection, TermRecord};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Store shared by all handlers.
pub type SharedStore = Arc<dyn RecordStore>;

/// Legacy prefix the routes are also mounted under.
pub const LEGACY_PREFIX: &str = "/api/glossary";

type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone)]
struct AppState {
    store: SharedStore,
    writes: Arc<Mutex<()>>,
}

fn parse_body(body: &Bytes) -> ApiResult<Value> {
    Ok(serde_json::from_slice(body)?)
}

fn parse_collection(body: &Bytes) -> ApiResult<Collection> {
    let parsed = Collection::from_value(&parse_body(body)?)?;
    if parsed.skipped > 0 {
        debug!("Dropped {} records without a term", parsed.skipped);
    }
    Ok(parsed.collection)
}

// ── Handlers ─────────────────────────────────────────────────────

async fn get_collection(State(state): State<AppState>) -> ApiResult<Json<Collection>> {
    Ok(Json(state.store.get().await?))
}

async fn replace_collection(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let collection = parse_collection(&body)?;
    let _guard = state.writes.lock().await;
    state.store.replace(&collection).await?;
    info!("Stored {} terms", collection.len());
    Ok(Json(json!({ "ok": true, "count": collection.len() })))
}

async fn merge_collection(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Collection>> {
    let incoming = parse_collection(&body)?;
    let _guard = state.writes.lock().await;
    let merged = ops::merge_into(state.store.as_ref(), &incoming).await?;
    info!("Merged {} terms, {} stored", incoming.len(), merged.len());
    Ok(Json(merged))
}

async fn add_term(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<TermRecord>)> {
    let record = TermRecord::from_value(&parse_body(&body)?)?;
    let _guard = state.writes.lock().await;
    let record = ops::append(state.store.as_ref(), record).await?;
    info!("Added term {:?}", record.term);
    Ok((StatusCode::CREATED, Json(record)))
}

async fn delete_term(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> ApiResult<Json<Value>> {
    let _guard = state.writes.lock().await;
    let deleted = ops::delete_term(state.store.as_ref(), &term).await?;
    info!("Deleted {} records for term {:?}", deleted, term);
    Ok(Json(json!({ "deleted": deleted })))
}

// ── Router ───────────────────────────────────────────────────────

fn mount(router: Router<AppState>, base: &str) -> Router<AppState> {
    router
        .route(base, get(get_collection).put(replace_collection))
        .route(&format!("{base}/merge"), post(merge_collection))
        .route(&format!("{base}/term"), post(add_term))
        .route(&format!("{base}/term/{{term}}"), delete(delete_term))
}

/// Build the HTTP API router over the given store.
pub fn build_router(store: SharedStore) -> Router {
    let router = mount(Router::new(), "/collection");
    mount(router, LEGACY_PREFIX).with_state(AppState {
        store,
        writes: Arc::new(Mutex::new(())),
    })
}
