//! Bounded history of searched queries.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Number of searches remembered by default.
pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Most-recent-first list of search inputs.
///
/// Re-searching a query moves it to the front instead of duplicating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    capacity: usize,
    entries: VecDeque<String>,
}

impl RecentSearches {
    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a search. Blank input is ignored.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.capacity == 0 {
            return;
        }

        self.entries.retain(|entry| entry != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Returns the entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the most recent search.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Returns the number of remembered searches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been searched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every search.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }
}
