//! Tab strip commands
use schaechner_core::TabId;

use super::{CommandOutput, CommandResult, ShellError};
use crate::state::AppState;

/// Open a tab at the homepage, then load `input` into it when given
pub fn new_tab(state: &mut AppState, input: Option<String>) -> CommandResult {
    let browser = state.browser_mut();
    browser.new_tab();

    let mut lines = vec![format!("Opened tab {}", browser.tabs().len())];
    if let Some(input) = input {
        let url = browser.navigate_current_tab(&input)?;
        lines.push(format!("-> {url}"));
    }

    Ok(CommandOutput::lines(lines))
}

pub fn close_tab(state: &mut AppState, index: Option<usize>) -> CommandResult {
    let tab_id = match index {
        Some(index) => tab_at(state, index)?,
        None => state
            .browser()
            .active_tab()
            .map(|tab| tab.id)
            .ok_or_else(|| ShellError::Core(schaechner_core::TabError::NoActiveTab.into()))?,
    };

    let closed = state.browser_mut().close_tab(tab_id)?;
    let mut lines = vec![format!("Closed {}", closed.url)];
    if state.browser().tabs().is_empty() {
        lines.push("No tabs open; use @new to open one".to_string());
    }

    Ok(CommandOutput::lines(lines))
}

pub fn switch_tab(state: &mut AppState, index: usize) -> CommandResult {
    let tab_id = tab_at(state, index)?;
    state.browser_mut().activate_tab(tab_id)?;
    Ok(list_tabs(state))
}

pub fn list_tabs(state: &AppState) -> CommandOutput {
    let browser = state.browser();
    let active = browser.active_tab().map(|tab| tab.id);

    CommandOutput::lines(
        browser
            .tabs()
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let marker = if Some(tab.id) == active { '*' } else { ' ' };
                format!("{marker} {}. [{}] {}", i + 1, tab.display_title(), tab.url)
            })
            .collect(),
    )
}

fn tab_at(state: &AppState, index: usize) -> Result<TabId, ShellError> {
    state
        .browser()
        .tabs()
        .get(index)
        .map(|tab| tab.id)
        .ok_or_else(|| ShellError::InvalidPosition((index + 1).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{execute, test_state, ShellCommand};

    #[test]
    fn test_list_marks_active_tab() {
        let mut state = test_state();
        execute(&mut state, ShellCommand::NewTab(Some("openai.com".to_string()))).unwrap();

        let output = execute(&mut state, ShellCommand::Tabs).unwrap();
        assert_eq!(
            output.lines,
            vec![
                "  1. [www.google...] https://www.google.com".to_string(),
                "* 2. [openai.com] https://openai.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_switch_and_close() {
        let mut state = test_state();
        execute(&mut state, ShellCommand::NewTab(None)).unwrap();
        execute(&mut state, ShellCommand::NewTab(None)).unwrap();

        execute(&mut state, ShellCommand::SwitchTab(1)).unwrap();
        let second = state.browser().tabs()[1].id;
        assert_eq!(state.browser().active_tab().unwrap().id, second);

        execute(&mut state, ShellCommand::CloseTab(None)).unwrap();
        let first = state.browser().tabs()[0].id;
        assert_eq!(state.browser().active_tab().unwrap().id, first);
        assert_eq!(state.browser().tabs().len(), 2);
    }

    #[test]
    fn test_close_last_tab_leaves_empty_strip() {
        let mut state = test_state();
        let output = execute(&mut state, ShellCommand::CloseTab(Some(0))).unwrap();
        assert_eq!(output.lines.last().unwrap(), "No tabs open; use @new to open one");

        assert!(matches!(
            execute(&mut state, ShellCommand::CloseTab(None)),
            Err(ShellError::Core(_))
        ));
        assert!(matches!(
            execute(&mut state, ShellCommand::Go("openai.com".to_string())),
            Err(ShellError::Core(_))
        ));
    }

    #[test]
    fn test_bad_position() {
        let mut state = test_state();
        assert!(matches!(
            execute(&mut state, ShellCommand::SwitchTab(4)),
            Err(ShellError::InvalidPosition(p)) if p == "5"
        ));
    }
}
