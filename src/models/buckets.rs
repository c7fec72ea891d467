use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::UsState;

/// Cleaned observation rows accumulated per state for a single year.
///
/// Buckets are kept in the order states first contribute rows, and the
/// output preserves that order within each year.
#[derive(Debug, Default)]
pub struct StateBuckets {
    order: Vec<UsState>,
    rows: HashMap<UsState, Vec<Vec<String>>>,
}

impl StateBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's cleaned rows to the state's bucket. An empty
    /// contribution creates no bucket.
    pub fn append_rows(&mut self, state: UsState, mut new_rows: Vec<Vec<String>>) {
        if new_rows.is_empty() {
            return;
        }
        match self.rows.entry(state) {
            Entry::Occupied(mut entry) => entry.get_mut().append(&mut new_rows),
            Entry::Vacant(entry) => {
                self.order.push(state);
                entry.insert(new_rows);
            }
        }
    }

    /// Number of states holding at least one row.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total rows across all buckets.
    pub fn row_count(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Consume the buckets, yielding `(state, rows)` pairs in the order
    /// states first contributed.
    pub fn into_ordered(mut self) -> Vec<(UsState, Vec<Vec<String>>)> {
        self.order
            .iter()
            .map(|state| (*state, self.rows.remove(state).unwrap_or_default()))
            .collect()
    }
}
