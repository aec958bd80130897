//! Key-based merge of glossary collections.
//!
//! Two collections are combined by case-folded term. The incoming side always
//! wins a collision and replaces the whole record: examples and link are not
//! unioned, and there is no timestamp comparison.
//!
//! Records keep the position their key first occupied. A bulk import asks for
//! [`MergeOrder::NewestFirst`], which reverses the merged result so the most
//! recently imported entries surface at the top; a plain sync merge uses
//! [`MergeOrder::Natural`].
//!
//! Merging is total: records without a term are dropped, never rejected.

use glossary_types::{Collection, TermKey, TermRecord};
use std::collections::HashMap;

/// Ordering applied to a merge result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeOrder {
    /// First-seen key order, base keys before new incoming keys.
    #[default]
    Natural,
    /// `Natural` reversed. Used for bulk imports.
    NewestFirst,
}

/// Merges `incoming` over `base`.
///
/// The result holds exactly one record per distinct [`TermKey`] found in
/// either input. For keys present on both sides, the last incoming record
/// with that key is kept.
#[must_use]
pub fn merge(base: &Collection, incoming: &Collection, order: MergeOrder) -> Collection {
    let mut slots: HashMap<TermKey, usize> = HashMap::with_capacity(base.len() + incoming.len());
    let mut merged: Vec<TermRecord> = Vec::with_capacity(base.len() + incoming.len());

    for record in base.iter().chain(incoming.iter()) {
        upsert(&mut slots, &mut merged, record);
    }

    let mut result = Collection::from(merged);
    if order == MergeOrder::NewestFirst {
        result.reverse();
    }
    result
}

/// Inserts or replaces a single record by key, keeping its existing slot.
pub fn upsert_into(collection: &mut Collection, record: TermRecord) {
    if !record.has_term() {
        return;
    }
    let key = record.key();
    match collection.iter().position(|r| r.key() == key) {
        Some(i) => {
            if let Some(slot) = collection.get_mut(i) {
                *slot = record;
            }
        }
        None => collection.push(record),
    }
}

fn upsert(slots: &mut HashMap<TermKey, usize>, merged: &mut Vec<TermRecord>, record: &TermRecord) {
    if !record.has_term() {
        return;
    }
    let key = record.key();
    match slots.get(&key) {
        Some(&i) => merged[i] = record.clone(),
        None => {
            slots.insert(key, merged.len());
            merged.push(record.clone());
        }
    }
}
