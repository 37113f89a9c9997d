//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use schaechner_navigation::SearchEngine;

use crate::labels::Language;
use crate::Result;

/// How the back button moves through pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackNavigation {
    /// The page's own back stack is authoritative; the history log is display-only
    #[default]
    Engine,
    /// Page back plus replaying the previous history log entry onto the tab
    EngineWithHistoryReplay,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL for new tabs
    pub homepage: String,
    /// UI language at startup
    pub language: Language,
    /// Search engine for address bar queries
    pub search_engine: SearchEngine,
    pub back_navigation: BackNavigation,
}

impl Config {
    /// Load configuration from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;

        tracing::info!(
            path = %path.display(),
            language = %config.language,
            search_engine = %config.search_engine,
            "Loaded configuration"
        );

        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Schaechner"))
            .unwrap_or_else(|| PathBuf::from(".schaechner"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: "https://www.google.com".to_string(),
            language: Language::En,
            search_engine: SearchEngine::Google,
            back_navigation: BackNavigation::Engine,
        }
    }
}
