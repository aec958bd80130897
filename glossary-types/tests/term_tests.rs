use glossary_types::{TermKey, TermRecord, ValidationError};
use serde_json::json;

// ── Construction ──────────────────────────────────────────────────

#[test]
fn new_record_has_no_examples_or_link() {
    let r = TermRecord::new("class", "A blueprint");
    assert_eq!(r.term, "class");
    assert_eq!(r.definition, "A blueprint");
    assert!(r.examples.is_empty());
    assert!(r.link.is_none());
}

#[test]
fn with_link_empty_clears_link() {
    let r = TermRecord::new("a", "b").with_link("");
    assert!(r.link.is_none());
    let r = TermRecord::new("a", "b").with_link("https://example.com");
    assert_eq!(r.link.as_deref(), Some("https://example.com"));
}

#[test]
fn with_examples_preserves_order() {
    let r = TermRecord::new("a", "b").with_examples(["z", "y", "x"]);
    assert_eq!(r.examples, vec!["z", "y", "x"]);
}

// ── Keys ──────────────────────────────────────────────────────────

#[test]
fn key_folds_case() {
    assert_eq!(TermRecord::new("LINQ", "").key(), TermKey::new("linq"));
    assert_eq!(TermKey::new("Class").as_str(), "class");
    assert_eq!(TermKey::new("Class").to_string(), "class");
}

#[test]
fn blank_term_fails_validation() {
    assert_eq!(
        TermRecord::new("   ", "x").validate(),
        Err(ValidationError::MissingTerm)
    );
    assert!(TermRecord::new("x", "").validate().is_ok());
}

// ── from_value ────────────────────────────────────────────────────

#[test]
fn from_value_full_record() {
    let v = json!({
        "term": "delegate",
        "definition": "Type-safe function pointer",
        "examples": ["Action<int>", "Func<T>"],
        "link": "https://learn.microsoft.com"
    });
    let r = TermRecord::from_value(&v).unwrap();
    assert_eq!(r.term, "delegate");
    assert_eq!(r.examples.len(), 2);
    assert_eq!(r.link.as_deref(), Some("https://learn.microsoft.com"));
}

#[test]
fn from_value_defaults_optional_fields() {
    let r = TermRecord::from_value(&json!({ "term": "x" })).unwrap();
    assert_eq!(r.definition, "");
    assert!(r.examples.is_empty());
    assert!(r.link.is_none());

    let r = TermRecord::from_value(&json!({ "term": "x", "definition": null, "link": "" }))
        .unwrap();
    assert_eq!(r.definition, "");
    assert!(r.link.is_none());
}

#[test]
fn from_value_missing_term() {
    assert_eq!(
        TermRecord::from_value(&json!({ "definition": "orphan" })),
        Err(ValidationError::MissingTerm)
    );
    assert_eq!(
        TermRecord::from_value(&json!({ "term": "" })),
        Err(ValidationError::MissingTerm)
    );
    assert_eq!(
        TermRecord::from_value(&json!({ "term": 42 })),
        Err(ValidationError::MissingTerm)
    );
}

#[test]
fn from_value_rejects_non_object() {
    assert_eq!(
        TermRecord::from_value(&json!("class")),
        Err(ValidationError::NotAnObject)
    );
    assert_eq!(
        TermRecord::from_value(&json!(null)),
        Err(ValidationError::NotAnObject)
    );
}

#[test]
fn from_value_coerces_other_fields() {
    let r = TermRecord::from_value(&json!({ "term": "x", "examples": "one" })).unwrap();
    assert!(r.examples.is_empty());

    let r = TermRecord::from_value(&json!({ "term": "x", "examples": [1, "kept", null] }))
        .unwrap();
    assert_eq!(r.examples, vec!["kept"]);

    let r = TermRecord::from_value(&json!({ "term": "x", "definition": 42, "link": true }))
        .unwrap();
    assert_eq!(r.definition, "42");
    assert_eq!(r.link.as_deref(), Some("true"));

    let r = TermRecord::from_value(&json!({ "term": "x", "definition": {"a": 1}, "link": [] }))
        .unwrap();
    assert_eq!(r.definition, "");
    assert!(r.link.is_none());
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn serialize_omits_absent_link() {
    let json = serde_json::to_value(TermRecord::new("a", "b")).unwrap();
    assert_eq!(json, json!({ "term": "a", "definition": "b", "examples": [] }));
}

#[test]
fn deserialize_defaults() {
    let r: TermRecord = serde_json::from_str(r#"{"term":"a"}"#).unwrap();
    assert_eq!(r, TermRecord::new("a", ""));
}
