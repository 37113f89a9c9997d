//! Navigation and address bar commands
use schaechner_core::LabelKey;

use super::{CommandOutput, CommandResult};
use crate::state::AppState;

pub fn go(state: &mut AppState, input: &str) -> CommandResult {
    let url = state.browser_mut().navigate_current_tab(input)?;
    Ok(CommandOutput::line(format!("-> {url}")))
}

pub fn back(state: &mut AppState) -> CommandResult {
    state.browser_mut().go_back()?;
    Ok(current_page(state))
}

pub fn forward(state: &mut AppState) -> CommandResult {
    state.browser_mut().go_forward()?;
    Ok(current_page(state))
}

pub fn history(state: &AppState) -> CommandOutput {
    let browser = state.browser();
    let mut lines = vec![format!("{}:", browser.label(LabelKey::HistoryBtn))];

    lines.extend(
        browser
            .session()
            .history
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{:>3}. {} {}",
                    i + 1,
                    entry.visited_at.format("%H:%M:%S"),
                    entry.url
                )
            }),
    );

    CommandOutput::lines(lines)
}

pub fn open_history(state: &mut AppState, index: usize) -> CommandResult {
    let url = state.browser_mut().open_history_entry(index)?;
    Ok(CommandOutput::line(format!("-> {url}")))
}

/// Where the active tab ended up once the page has reported back
fn current_page(state: &mut AppState) -> CommandOutput {
    let mut lines = state.settle();
    if let Some(tab) = state.browser().active_tab() {
        lines.push(format!("-> {}", tab.url));
    }
    CommandOutput::lines(lines)
}
