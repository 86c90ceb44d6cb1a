//! Substring search over note content.
//!
//! # Responsibility
//! - Provide the pure predicate used by the gallery filter.
//!
//! # Invariants
//! - Matching is case-insensitive substring containment.
//! - The empty query matches every note.
//! - Results are recomputed from scratch per query; no index is kept.

use crate::model::note::Note;

/// Returns whether `content` matches `query`.
///
/// Both sides are lowercased before the containment test, so `"MILK"`
/// matches `"Buy milk"`. An empty query always matches.
pub fn matches(content: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    content.to_lowercase().contains(&query.to_lowercase())
}

/// Filters `notes` down to those matching `query`, preserving order.
pub fn filter<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| matches(&note.content, query))
        .collect()
}
