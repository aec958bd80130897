use glossary_store::{FileRecordStore, RecordStore, StoreError};
use glossary_types::{Collection, TermRecord};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample() -> Collection {
    Collection::from(vec![
        TermRecord::new("class", "A blueprint").with_examples(["class Foo {}"]),
        TermRecord::new("LINQ", "Language Integrated Query")
            .with_link("https://learn.microsoft.com"),
    ])
}

// ── get ──────────────────────────────────────────────────────────

#[tokio::test]
async fn get_initializes_missing_file() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path().join("data"));

    let c = store.get().await.unwrap();

    assert!(c.is_empty());
    assert!(store.path().exists());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
}

#[tokio::test]
async fn get_treats_corrupt_file_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());
    std::fs::write(store.path(), "{ not json").unwrap();

    assert!(store.get().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_treats_non_array_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"{"term":"x"}"#).unwrap();

    assert!(store.get().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_treats_blank_file_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());
    std::fs::write(store.path(), "  \n").unwrap();

    assert!(store.get().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_skips_stored_entries_without_term() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());
    std::fs::write(store.path(), r#"[{"term":"a"},{"definition":"orphan"}]"#).unwrap();

    let c = store.get().await.unwrap();
    assert_eq!(c.len(), 1);
}

// ── replace ──────────────────────────────────────────────────────

#[tokio::test]
async fn replace_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());

    store.replace(&sample()).await.unwrap();

    assert_eq!(store.get().await.unwrap(), sample());
}

#[tokio::test]
async fn replace_writes_pretty_json() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());

    store.replace(&sample()).await.unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.starts_with("[\n  {\n    \"term\": \"class\""));
}

#[tokio::test]
async fn replace_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());

    store.replace(&sample()).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["glossary.json".to_string()]);
}

#[tokio::test]
async fn replace_is_wholesale() {
    let dir = TempDir::new().unwrap();
    let store = FileRecordStore::in_dir(dir.path());

    store.replace(&sample()).await.unwrap();
    let smaller = Collection::from(vec![TermRecord::new("only", "one")]);
    store.replace(&smaller).await.unwrap();

    assert_eq!(store.get().await.unwrap(), smaller);
}

#[tokio::test]
async fn replace_on_unwritable_medium_fails_with_io() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();
    let store = FileRecordStore::in_dir(&blocker);

    let err = store.replace(&sample()).await.unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[tokio::test]
async fn survives_reopen() {
    let dir = TempDir::new().unwrap();
    FileRecordStore::in_dir(dir.path())
        .replace(&sample())
        .await
        .unwrap();

    let reopened = FileRecordStore::in_dir(dir.path());
    assert_eq!(reopened.get().await.unwrap(), sample());
    assert_eq!(reopened.name(), "file");
}
