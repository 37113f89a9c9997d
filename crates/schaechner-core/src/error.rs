//! Core error types

use thiserror::Error;

use crate::labels::{LabelKey, Language};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] schaechner_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] schaechner_navigation::NavigationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No history entry at position {0}")]
    HistoryEntryNotFound(usize),

    #[error("No bookmark at position {0}")]
    BookmarkNotFound(usize),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Missing label {key} for language {language}")]
    MissingLabel { language: Language, key: LabelKey },
}
