//! Ordered collections of term records.

use crate::term::TermRecord;
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An insertion-ordered sequence of [`TermRecord`]s.
///
/// Serializes as a bare JSON array. Order is never sorted implicitly; callers
/// that want recency-first display reverse explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<TermRecord>);

/// Result of validating an untyped array: the usable records plus how many
/// elements were dropped for lacking a term or having malformed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCollection {
    pub collection: Collection,
    pub skipped: usize,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Validates an untyped JSON array element by element.
    ///
    /// Fails only when the payload itself is not an array; individual bad
    /// elements are counted in [`ParsedCollection::skipped`].
    pub fn from_value(value: &Value) -> Result<ParsedCollection, ValidationError> {
        let items = value.as_array().ok_or(ValidationError::NotAnArray)?;
        let mut records = Vec::with_capacity(items.len());
        let mut skipped = 0;
        for item in items {
            match TermRecord::from_value(item) {
                Ok(record) => records.push(record),
                Err(_) => skipped += 1,
            }
        }
        Ok(ParsedCollection {
            collection: Self(records),
            skipped,
        })
    }

    /// Parses JSON text and validates it with [`Collection::from_value`].
    pub fn from_json_str(text: &str) -> crate::Result<ParsedCollection> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value)?)
    }

    /// Serializes as a pretty-printed (two-space indented) JSON array.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TermRecord> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TermRecord> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TermRecord> {
        self.0.get_mut(index)
    }

    /// Appends a record at the end, without deduplication.
    pub fn push(&mut self, record: TermRecord) {
        self.0.push(record);
    }

    /// Removes and returns the record at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<TermRecord> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Removes every record whose term equals `term` exactly (case-sensitive).
    /// Returns how many were removed.
    pub fn remove_term_exact(&mut self, term: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|r| r.term != term);
        before - self.0.len()
    }

    /// Reverses the order in place.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    #[must_use]
    pub fn records(&self) -> &[TermRecord] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<TermRecord> {
        self.0
    }
}

impl From<Vec<TermRecord>> for Collection {
    fn from(records: Vec<TermRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<TermRecord> for Collection {
    fn from_iter<I: IntoIterator<Item = TermRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = TermRecord;
    type IntoIter = std::vec::IntoIter<TermRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a TermRecord;
    type IntoIter = std::slice::Iter<'a, TermRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
