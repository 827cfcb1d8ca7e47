//! Free-text search over the catalog.
//!
//! `search` is a pure function of the catalog and the query state. It is
//! cheap enough to run on every keystroke: one linear pass over the
//! catalog plus one stable sort of the matches.

use std::cmp::Reverse;

use crate::model::{CatalogItem, ItemKind, ItemStatus};
use crate::query::normalize::{matches_all_tokens, tokenize};

// ===== QueryState =====

/// Mutable search input owned by the search overlay.
///
/// The sort key is fixed to date-descending; there is no relevance
/// ranking (matching is boolean).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Raw text as typed. Empty (after trimming) means "not searching".
    pub raw_input: String,
    /// Keep only items of this kind, when set.
    pub kind_filter: Option<ItemKind>,
    /// Keep only items with this status, when set.
    pub status_filter: Option<ItemStatus>,
}

impl QueryState {
    /// Reset input and filters to the initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the query would return anything at all.
    pub fn is_blank(&self) -> bool {
        self.raw_input.trim().is_empty()
    }
}

// ===== search =====

/// Run the query over the catalog.
///
/// - Empty trimmed input returns an empty result ("not searching" is
///   distinct from "searching, zero matches").
/// - An item matches when every query token is a substring of the
///   normalized title, description, or author (AND across tokens within
///   a field, OR across fields).
/// - Kind/status filters intersect with the text matches.
/// - Results are sorted date-descending; missing dates sort as epoch.
///   The sort is stable, so equal dates keep catalog order.
pub fn search(catalog: &[CatalogItem], query: &QueryState) -> Vec<CatalogItem> {
    if query.is_blank() {
        return Vec::new();
    }
    let tokens = tokenize(&query.raw_input);
    if tokens.is_empty() {
        // Input was all symbols; nothing to match on.
        return Vec::new();
    }

    let mut results: Vec<CatalogItem> = catalog
        .iter()
        .filter(|item| {
            matches_all_tokens(&item.title, &tokens)
                || matches_all_tokens(&item.description, &tokens)
                || matches_all_tokens(&item.author, &tokens)
        })
        .filter(|item| query.kind_filter.is_none_or(|k| item.kind == k))
        .filter(|item| query.status_filter.is_none_or(|s| item.status == s))
        .cloned()
        .collect();

    // Vec::sort_by_key is stable; ties keep their original relative order.
    results.sort_by_key(|item| Reverse(item.sort_date()));
    results
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
