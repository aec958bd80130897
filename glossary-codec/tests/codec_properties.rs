//! Property-based tests for the delimited-text codec.
//!
//! decode(encode(C)) must reproduce every term, definition, link and example
//! list, including values with commas, quotes, pipes, backslashes and line
//! breaks.

use glossary_codec::{decode, encode};
use glossary_types::{Collection, TermRecord};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

/// Non-empty text whose first and last characters are not whitespace, since
/// the reader trims every field.
fn edge_trimmed_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-z]([a-zA-Z0-9 ,"|\n\r\\]{0,16}[a-z])?"#).unwrap()
}

fn record_strategy() -> impl Strategy<Value = TermRecord> {
    (
        edge_trimmed_text(),
        prop_oneof![Just(String::new()), edge_trimmed_text()],
        prop::collection::vec(edge_trimmed_text(), 0..4),
        prop::option::of(edge_trimmed_text()),
    )
        .prop_map(|(term, definition, examples, link)| TermRecord {
            term,
            definition,
            examples,
            link,
        })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn decode_inverts_encode(records in prop::collection::vec(record_strategy(), 0..8)) {
        let original = Collection::from(records);
        let decoded = decode(&encode(&original));
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn decode_never_panics(input in r#"[a-z ,"|\n\r\\]{0,64}"#) {
        let _ = decode(&input);
    }
}
