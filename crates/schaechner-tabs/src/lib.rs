//! Schächner Tab Management
//!
//! Tracks the open tabs in display order and which one is active.
//! At most one tab is active; the active tab is always a member of the set,
//! and there is no active tab only when the set is empty.

mod error;
mod registry;
mod tab;

pub use error::TabError;
pub use registry::TabRegistry;
pub use tab::{truncate_title, Tab, TabId, TITLE_DISPLAY_LIMIT};

pub type Result<T> = std::result::Result<T, TabError>;
