//! History log
//!
//! Append-only record of navigations, shared by every tab in the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub visited_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit. No deduplication.
    pub fn record(&mut self, url: impl Into<String>) {
        let url = url.into();
        tracing::debug!(url = %url, position = self.entries.len(), "Recorded history entry");
        self.entries.push(HistoryEntry {
            url,
            visited_at: Utc::now(),
        });
    }

    /// The entry visited before the most recent one
    pub fn last_visited_before(&self) -> Option<&str> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries
            .get(self.entries.len() - 2)
            .map(|e| e.url.as_str())
    }

    /// Step back one navigation: hands out the prior entry and drops the newest.
    ///
    /// Has no effect once a single entry remains.
    pub fn back(&mut self) -> Option<String> {
        let prior = self.last_visited_before()?.to_string();
        self.entries.pop();
        Some(prior)
    }

    /// Visited URLs in visit order
    pub fn list(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.url.as_str()).collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
