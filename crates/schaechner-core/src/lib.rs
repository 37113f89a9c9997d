//! Schächner Core
//!
//! Central coordination layer for the browser. The core owns all session state;
//! page rendering, scripting and networking belong to the embedded engine
//! behind [`PageView`].

mod bookmarks;
mod browser;
mod config;
mod error;
mod labels;
mod page;
mod session;

pub use bookmarks::{Bookmark, BookmarkStore};
pub use browser::{Browser, UiNotice};
pub use config::{BackNavigation, Config};
pub use error::CoreError;
pub use labels::{label, LabelKey, Labels, Language};
pub use page::{PageEvent, PageEventQueue, PageEventSink, PageView, PageViewFactory};
pub use session::Session;

// Re-export core components
pub use schaechner_navigation::{
    resolve, HistoryEntry, HistoryLog, NavigationError, SearchEngine,
};
pub use schaechner_tabs::{truncate_title, Tab, TabError, TabId, TabRegistry};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Log lines go to stderr so the shell's own output stays readable.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
