//! Search engines selectable from the settings dialog

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    /// Offered as "Edge" in the settings dialog
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 3] = [
        SearchEngine::Google,
        SearchEngine::Bing,
        SearchEngine::DuckDuckGo,
    ];

    /// Prefix the (space-to-plus encoded) query is appended to
    pub fn query_prefix(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::DuckDuckGo => "duckduckgo",
        }
    }

    /// Name shown in the settings combo box
    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Edge",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
        }
    }
}

impl std::fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchEngine {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(SearchEngine::Google),
            "bing" | "edge" => Ok(SearchEngine::Bing),
            "duckduckgo" | "ddg" => Ok(SearchEngine::DuckDuckGo),
            _ => Err(NavigationError::UnknownSearchEngine(s.to_string())),
        }
    }
}
