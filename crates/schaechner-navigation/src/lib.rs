//! Schächner Navigation
//!
//! Address bar input resolution:
//!   1. No `.` in the input → search with the selected engine
//!   2. Explicit `http://` / `https://` → navigate unchanged
//!   3. Anything else → navigate with `https://` prepended
//!
//! The history log is global to the session and lives only as long as the process.

mod engine;
mod error;
mod history;
mod input;

pub use engine::SearchEngine;
pub use error::NavigationError;
pub use history::{HistoryEntry, HistoryLog};
pub use input::resolve;

pub type Result<T> = std::result::Result<T, NavigationError>;
