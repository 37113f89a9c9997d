//! Settings and bookmark commands
use schaechner_core::{LabelKey, Language, SearchEngine};

use super::{CommandOutput, CommandResult};
use crate::state::AppState;

pub fn show_settings(state: &AppState) -> CommandOutput {
    let browser = state.browser();
    let session = browser.session();

    CommandOutput::lines(vec![
        format!("{}:", browser.label(LabelKey::SettingsTitle)),
        format!(
            "  {} {}",
            browser.label(LabelKey::LanguageLabel),
            session.language.display_name()
        ),
        format!(
            "  {} {}",
            browser.label(LabelKey::SearchEngineLabel),
            session.search_engine.display_name()
        ),
    ])
}

pub fn set_language(state: &mut AppState, language: Language) -> CommandOutput {
    state.browser_mut().change_language(language);
    CommandOutput::line(state.browser().label(LabelKey::WindowTitle))
}

pub fn set_search_engine(state: &mut AppState, engine: SearchEngine) -> CommandOutput {
    state.browser_mut().change_search_engine(engine);
    CommandOutput::line(format!(
        "{} {}",
        state.browser().label(LabelKey::SearchEngineLabel),
        engine.display_name()
    ))
}

/// The confirmation itself arrives as a UI notice
pub fn add_bookmark(state: &mut AppState) -> CommandResult {
    state.browser_mut().add_bookmark()?;
    Ok(CommandOutput::empty())
}

pub fn list_bookmarks(state: &AppState) -> CommandOutput {
    let browser = state.browser();
    let mut lines = vec![format!("{}:", browser.label(LabelKey::BookmarksTitle))];

    lines.extend(
        browser
            .session()
            .bookmarks
            .list()
            .iter()
            .enumerate()
            .map(|(i, bookmark)| format!("{:>3}. {}: {}", i + 1, bookmark.title, bookmark.url)),
    );

    CommandOutput::lines(lines)
}

pub fn open_bookmark(state: &mut AppState, index: usize) -> CommandResult {
    let url = state.browser_mut().open_bookmark(index)?;
    Ok(CommandOutput::line(format!("-> {url}")))
}

#[cfg(test)]
mod tests {
    use crate::commands::{execute, test_state, ShellCommand, ShellError};
    use schaechner_core::CoreError;

    fn run(state: &mut crate::state::AppState, line: &str) -> Vec<String> {
        let command = ShellCommand::parse(line).unwrap().unwrap();
        execute(state, command).unwrap().lines
    }

    #[test]
    fn test_bookmark_flow() {
        let mut state = test_state();
        run(&mut state, "a.com");

        assert_eq!(
            run(&mut state, "@bookmark"),
            vec!["[Bookmark Added] Bookmark has been added."]
        );
        assert_eq!(
            run(&mut state, "@bookmarks"),
            vec!["Bookmarks:", "  1. a.com: https://a.com"]
        );

        run(&mut state, "b.com");
        assert_eq!(run(&mut state, "@open-bookmark 1"), vec!["-> https://a.com"]);

        let command = ShellCommand::parse("@open-bookmark 2").unwrap().unwrap();
        assert!(matches!(
            execute(&mut state, command),
            Err(ShellError::Core(CoreError::BookmarkNotFound(1)))
        ));
    }

    #[test]
    fn test_language_switch_relabels() {
        let mut state = test_state();
        assert_eq!(run(&mut state, "@lang de"), vec!["Schächner Webbrowser"]);
        assert_eq!(
            run(&mut state, "@settings"),
            vec![
                "Einstellungen:",
                "  Sprache auswählen: Deutsch",
                "  Suchmaschine: Google",
            ]
        );

        run(&mut state, "example.com");
        assert_eq!(
            run(&mut state, "@bookmark"),
            vec!["[Lesezeichen hinzugefügt] Lesezeichen wurde hinzugefügt."]
        );
        assert_eq!(run(&mut state, "@history")[0], "Verlauf:");
    }

    #[test]
    fn test_engine_switch() {
        let mut state = test_state();
        assert_eq!(run(&mut state, "@engine bing"), vec!["Search Engine: Edge"]);
        assert_eq!(
            run(&mut state, "rust book"),
            vec!["-> https://www.bing.com/search?q=rust+book"]
        );
    }
}
