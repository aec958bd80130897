use glossary_codec::{export, import, import_json, CodecError, Format};
use glossary_types::{Collection, TermRecord};
use pretty_assertions::assert_eq;
use std::path::Path;

fn sample() -> Collection {
    Collection::from(vec![
        TermRecord::new("delegate", "Type-safe function pointer").with_examples(["Action<int>"]),
        TermRecord::new("LINQ", "Language Integrated Query")
            .with_link("https://learn.microsoft.com"),
    ])
}

// ── Format metadata ──────────────────────────────────────────────

#[test]
fn export_file_names_are_fixed() {
    assert_eq!(Format::Json.file_name(), "glossary.json");
    assert_eq!(Format::Csv.file_name(), "glossary.csv");
}

#[test]
fn format_from_path_uses_extension() {
    assert_eq!(Format::from_path(Path::new("x/glossary.JSON")).unwrap(), Format::Json);
    assert_eq!(Format::from_path(Path::new("terms.csv")).unwrap(), Format::Csv);
    assert_eq!(Format::from_path(Path::new("terms.txt")).unwrap(), Format::Csv);
    assert!(matches!(
        Format::from_path(Path::new("terms.xlsx")),
        Err(CodecError::UnsupportedFormat(_))
    ));
}

#[test]
fn format_from_str_and_display() {
    assert_eq!("CSV".parse::<Format>().unwrap(), Format::Csv);
    assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    assert!("yaml".parse::<Format>().is_err());
    assert_eq!(Format::Csv.to_string(), "csv");
}

// ── Export ───────────────────────────────────────────────────────

#[test]
fn json_export_is_pretty_and_reimportable() {
    let out = export(&sample(), Format::Json).unwrap();
    assert_eq!(out.file_name, "glossary.json");
    assert_eq!(out.content_type, "application/json");
    assert!(out.content.contains("\n  {\n"));

    let back = import(&out.content, Format::Json).unwrap();
    assert_eq!(back.collection, sample());
    assert_eq!(back.skipped, 0);
}

#[test]
fn csv_export_is_reimportable() {
    let out = export(&sample(), Format::Csv).unwrap();
    assert_eq!(out.file_name, "glossary.csv");
    let back = import(&out.content, Format::Csv).unwrap();
    assert_eq!(back.collection, sample());
}

// ── Import ───────────────────────────────────────────────────────

#[test]
fn json_import_rejects_malformed_payloads() {
    assert!(matches!(import_json("[{\"term\":"), Err(CodecError::Json(_))));
    assert!(matches!(import_json("{\"term\":\"x\"}"), Err(CodecError::NotAnArray)));
}

#[test]
fn json_import_skips_records_without_term() {
    let parsed = import_json(r#"[{"term":"a"},{"definition":"orphan"},{"term":""}]"#).unwrap();
    assert_eq!(parsed.collection.len(), 1);
    assert_eq!(parsed.skipped, 2);
}

#[test]
fn csv_import_counts_dropped_rows() {
    let parsed = import("term,definition\na,1\n,2\n", Format::Csv).unwrap();
    assert_eq!(parsed.collection.len(), 1);
    assert_eq!(parsed.skipped, 1);
}
