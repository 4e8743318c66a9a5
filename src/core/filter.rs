//! # Suggestion Filtering
//!
//! `filter` is the pure matching rule: case-folded substring on `name`,
//! results in dataset order. `SuggestionCache` memoizes it on the applied
//! query so redraws and unrelated state changes reuse the same list.
//!
//! Results are indices into the `Dataset`, not cloned records. The cache hands
//! out an `Arc<[usize]>`; while the query is unchanged every caller gets the
//! same allocation, which makes "did the list change?" a pointer comparison.

use std::sync::Arc;

use log::debug;

use crate::core::dataset::Dataset;

/// Indices of records whose name contains `query`, ignoring case.
///
/// An empty query matches every record.
pub fn filter(dataset: &Dataset, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    dataset
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Single-entry memo for `filter`, keyed on the applied query.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    key: Option<String>,
    value: Arc<[usize]>,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestions for `query`, recomputed only when `query` differs from the
    /// last call.
    pub fn get(&mut self, dataset: &Dataset, query: &str) -> Arc<[usize]> {
        if self.key.as_deref() != Some(query) {
            self.value = filter(dataset, query).into();
            self.key = Some(query.to_string());
            debug!(
                "Recomputed suggestions for {:?}: {} of {}",
                query,
                self.value.len(),
                dataset.len()
            );
        }
        Arc::clone(&self.value)
    }

    /// Drop the cached entry so the next `get` recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
