//! Localized UI labels
//!
//! Every [`LabelKey`] has text for every [`Language`]; [`Labels::validate`]
//! runs at startup and rejects blank entries.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Name shown in the language combo box
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "de" | "deutsch" | "german" => Ok(Language::De),
            _ => Err(CoreError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    WindowTitle,
    GoBtn,
    BackBtn,
    ForwardBtn,
    NewTabBtn,
    BookmarkBtn,
    SettingsBtn,
    BookmarkAddedTitle,
    BookmarkAddedMsg,
    SettingsTitle,
    LanguageLabel,
    SaveBtn,
    HistoryBtn,
    OpenBookmarks,
    OpenHistory,
    OpenSettings,
    BookmarksTitle,
    SearchEngineLabel,
    ExitConfirmTitle,
    ExitConfirmMsg,
}

impl LabelKey {
    pub const ALL: [LabelKey; 20] = [
        LabelKey::WindowTitle,
        LabelKey::GoBtn,
        LabelKey::BackBtn,
        LabelKey::ForwardBtn,
        LabelKey::NewTabBtn,
        LabelKey::BookmarkBtn,
        LabelKey::SettingsBtn,
        LabelKey::BookmarkAddedTitle,
        LabelKey::BookmarkAddedMsg,
        LabelKey::SettingsTitle,
        LabelKey::LanguageLabel,
        LabelKey::SaveBtn,
        LabelKey::HistoryBtn,
        LabelKey::OpenBookmarks,
        LabelKey::OpenHistory,
        LabelKey::OpenSettings,
        LabelKey::BookmarksTitle,
        LabelKey::SearchEngineLabel,
        LabelKey::ExitConfirmTitle,
        LabelKey::ExitConfirmMsg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKey::WindowTitle => "window_title",
            LabelKey::GoBtn => "go_btn",
            LabelKey::BackBtn => "back_btn",
            LabelKey::ForwardBtn => "forward_btn",
            LabelKey::NewTabBtn => "new_tab_btn",
            LabelKey::BookmarkBtn => "bookmark_btn",
            LabelKey::SettingsBtn => "settings_btn",
            LabelKey::BookmarkAddedTitle => "bookmark_added_title",
            LabelKey::BookmarkAddedMsg => "bookmark_added_msg",
            LabelKey::SettingsTitle => "settings_title",
            LabelKey::LanguageLabel => "language_label",
            LabelKey::SaveBtn => "save_btn",
            LabelKey::HistoryBtn => "history_btn",
            LabelKey::OpenBookmarks => "open_bookmarks",
            LabelKey::OpenHistory => "open_history",
            LabelKey::OpenSettings => "open_settings",
            LabelKey::BookmarksTitle => "bookmarks_title",
            LabelKey::SearchEngineLabel => "search_engine_label",
            LabelKey::ExitConfirmTitle => "exit_confirm_title",
            LabelKey::ExitConfirmMsg => "exit_confirm_msg",
        }
    }
}

impl std::fmt::Display for LabelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn label(language: Language, key: LabelKey) -> &'static str {
    match language {
        Language::En => match key {
            LabelKey::WindowTitle => "Schächner Web Browser",
            LabelKey::GoBtn => "Go",
            LabelKey::BackBtn => "<",
            LabelKey::ForwardBtn => ">",
            LabelKey::NewTabBtn => "+",
            LabelKey::BookmarkBtn => "Bookmark",
            LabelKey::SettingsBtn => "Settings",
            LabelKey::BookmarkAddedTitle => "Bookmark Added",
            LabelKey::BookmarkAddedMsg => "Bookmark has been added.",
            LabelKey::SettingsTitle => "Settings",
            LabelKey::LanguageLabel => "Select Language:",
            LabelKey::SaveBtn => "Save",
            LabelKey::HistoryBtn => "History",
            LabelKey::OpenBookmarks => "Open Bookmarks",
            LabelKey::OpenHistory => "Open History",
            LabelKey::OpenSettings => "Open Settings",
            LabelKey::BookmarksTitle => "Bookmarks",
            LabelKey::SearchEngineLabel => "Search Engine:",
            LabelKey::ExitConfirmTitle => "Exit Confirmation",
            LabelKey::ExitConfirmMsg => "Are you sure you want to exit?",
        },
        Language::De => match key {
            LabelKey::WindowTitle => "Schächner Webbrowser",
            LabelKey::GoBtn => "Suche",
            LabelKey::BackBtn => "<",
            LabelKey::ForwardBtn => ">",
            LabelKey::NewTabBtn => "+",
            LabelKey::BookmarkBtn => "Lesezeichen",
            LabelKey::SettingsBtn => "Einstellungen",
            LabelKey::BookmarkAddedTitle => "Lesezeichen hinzugefügt",
            LabelKey::BookmarkAddedMsg => "Lesezeichen wurde hinzugefügt.",
            LabelKey::SettingsTitle => "Einstellungen",
            LabelKey::LanguageLabel => "Sprache auswählen:",
            LabelKey::SaveBtn => "Speichern",
            LabelKey::HistoryBtn => "Verlauf",
            LabelKey::OpenBookmarks => "Lesezeichen öffnen",
            LabelKey::OpenHistory => "Verlauf öffnen",
            LabelKey::OpenSettings => "Einstellungen öffnen",
            LabelKey::BookmarksTitle => "Lesezeichen",
            LabelKey::SearchEngineLabel => "Suchmaschine:",
            LabelKey::ExitConfirmTitle => "Beenden bestätigen",
            LabelKey::ExitConfirmMsg => "Möchten Sie den Browser wirklich beenden?",
        },
    }
}

/// Label set for one language
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    language: Language,
}

impl Labels {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn get(&self, key: LabelKey) -> &'static str {
        label(self.language, key)
    }

    /// Check that no supported language has a blank label
    pub fn validate() -> Result<()> {
        for language in Language::ALL {
            for key in LabelKey::ALL {
                if label(language, key).trim().is_empty() {
                    return Err(CoreError::MissingLabel { language, key });
                }
            }
        }
        Ok(())
    }
}
