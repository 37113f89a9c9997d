//! Session aggregate
//!
//! The complete in-memory state of one running browser. Nothing here outlives
//! the process.

use schaechner_navigation::{HistoryLog, SearchEngine};
use schaechner_tabs::TabRegistry;

use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::labels::{LabelKey, Labels, Language};

#[derive(Debug, Default)]
pub struct Session {
    pub language: Language,
    pub search_engine: SearchEngine,
    pub tabs: TabRegistry,
    /// Shared by all tabs
    pub history: HistoryLog,
    pub bookmarks: BookmarkStore,
}

impl Session {
    pub fn new(language: Language, search_engine: SearchEngine) -> Self {
        Self {
            language,
            search_engine,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.language, config.search_engine)
    }

    pub fn labels(&self) -> Labels {
        Labels::new(self.language)
    }

    pub fn label(&self, key: LabelKey) -> &'static str {
        self.labels().get(key)
    }
}
