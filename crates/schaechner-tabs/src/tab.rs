//! Tab data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Titles longer than this many characters are shortened in the tab strip
pub const TITLE_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    /// Current URL
    pub url: String,
    /// Page title as last reported by the page
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tab {
    pub fn new(url: String) -> Self {
        let now = Utc::now();
        Self {
            id: TabId::new(),
            url,
            title: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update URL (navigation)
    pub fn navigate(&mut self, url: String) {
        self.url = url;
        self.updated_at = Utc::now();
    }

    /// Update page title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Title as shown in the tab strip
    pub fn display_title(&self) -> String {
        truncate_title(&self.title)
    }
}

/// Shorten a title to [`TITLE_DISPLAY_LIMIT`] characters followed by `...`.
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_DISPLAY_LIMIT) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}
