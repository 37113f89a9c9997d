//! Input resolution for the address bar

use crate::engine::SearchEngine;

/// Turn free-text address bar input into the URL handed to the page.
///
/// Resolution never fails; it only rewrites text. Input without a `.` is a
/// search query (spaces become `+`, nothing else is escaped). Input with a `.`
/// keeps an explicit `http://`/`https://` scheme or gets `https://` prepended.
pub fn resolve(input: &str, engine: SearchEngine) -> String {
    if !input.contains('.') {
        return format!("{}{}", engine.query_prefix(), input.replace(' ', "+"));
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        return input.to_string();
    }

    format!("https://{}", input)
}
