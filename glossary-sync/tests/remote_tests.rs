use glossary_store::{RecordStore, StoreError};
use glossary_sync::{HttpRecordStore, SyncConfig};
use glossary_types::{Collection, TermRecord};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> HttpRecordStore {
    HttpRecordStore::new(server.uri(), Duration::from_secs(5)).unwrap()
}

// ── Construction ────────────────────────────────────────────────

#[test]
fn trailing_slash_is_trimmed() {
    let store = HttpRecordStore::new("http://localhost:4000/", Duration::from_secs(1)).unwrap();
    assert_eq!(store.base_url(), "http://localhost:4000");
    assert_eq!(store.name(), "http");
}

#[test]
fn from_config_uses_remote_url() {
    let config = SyncConfig {
        remote_url: "http://glossary.internal:9000".to_string(),
        ..Default::default()
    };
    let store = HttpRecordStore::from_config(&config).unwrap();
    assert_eq!(store.base_url(), "http://glossary.internal:9000");
}

// ── GET /collection ─────────────────────────────────────────────

#[tokio::test]
async fn get_parses_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"term": "class", "definition": "A blueprint", "examples": ["new C()"]},
            {"term": "LINQ", "definition": "Queries", "examples": [], "link": "https://x"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let collection = store_for(&server).get().await.unwrap();

    assert_eq!(
        collection,
        Collection::from(vec![
            TermRecord::new("class", "A blueprint").with_examples(["new C()"]),
            TermRecord::new("LINQ", "Queries").with_link("https://x"),
        ])
    );
}

#[tokio::test]
async fn get_server_error_maps_to_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "disk on fire"})))
        .mount(&server)
        .await;

    let err = store_for(&server).get().await.unwrap_err();

    match err {
        StoreError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "disk on fire");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_non_array_body_is_invalid_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"terms": []})))
        .mount(&server)
        .await;

    let err = store_for(&server).get().await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[tokio::test]
async fn get_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/collection"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let store = HttpRecordStore::new(server.uri(), Duration::from_millis(100)).unwrap();
    let err = store.get().await.unwrap_err();

    assert!(matches!(err, StoreError::Timeout));
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let store =
        HttpRecordStore::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();

    let err = store.get().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

// ── PUT /collection ─────────────────────────────────────────────

#[tokio::test]
async fn replace_sends_whole_collection() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collection"))
        .and(body_json(json!([
            {"term": "yield", "definition": "Lazy iteration", "examples": ["yield return x;"]}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "count": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let collection = Collection::from(vec![
        TermRecord::new("yield", "Lazy iteration").with_examples(["yield return x;"]),
    ]);
    store_for(&server).replace(&collection).await.unwrap();
}

#[tokio::test]
async fn replace_rejection_carries_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/collection"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = store_for(&server)
        .replace(&Collection::new())
        .await
        .unwrap_err();

    match err {
        StoreError::Http { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}
