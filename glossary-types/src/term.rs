//! Glossary term records and their deduplication key.

use crate::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One glossary entry.
///
/// `term` is stored with the case it was written in; comparisons for
/// deduplication go through [`TermRecord::key`], which folds case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// The term being defined. Identifies the record.
    pub term: String,
    /// Free-text definition.
    #[serde(default)]
    pub definition: String,
    /// Usage examples, in the order they were added.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Optional reference URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TermRecord {
    /// Creates a record with no examples and no link.
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            examples: Vec::new(),
            link: None,
        }
    }

    /// Replaces the example list.
    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the link. An empty string clears it.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = normalize_link(Some(link.into()));
        self
    }

    /// Returns the case-insensitive key of this record.
    #[must_use]
    pub fn key(&self) -> TermKey {
        TermKey::new(&self.term)
    }

    /// Whether the record carries a usable identifying term.
    #[must_use]
    pub fn has_term(&self) -> bool {
        !self.term.trim().is_empty()
    }

    /// Checks the record's identifying field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.has_term() {
            Ok(())
        } else {
            Err(ValidationError::MissingTerm)
        }
    }

    /// Builds a record from untyped JSON.
    ///
    /// Only `term` is checked: it must be a non-blank string. Every other
    /// field is coerced. A scalar definition or link reads as its text and
    /// anything else as empty, a blank link as no link, a non-array
    /// `examples` as no examples, and non-string example items are dropped.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let term = match object.get("term") {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            _ => return Err(ValidationError::MissingTerm),
        };

        let examples = match object.get("examples") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            term,
            definition: scalar_text(object, "definition").unwrap_or_default(),
            examples,
            link: normalize_link(scalar_text(object, "link")),
        })
    }
}

fn scalar_text(object: &Map<String, Value>, field: &str) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize_link(link: Option<String>) -> Option<String> {
    link.filter(|l| !l.trim().is_empty())
}

/// Case-folded term used to detect duplicates across collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermKey(String);

impl TermKey {
    /// Folds a term into its key.
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    /// Returns the folded key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
