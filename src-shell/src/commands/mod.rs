//! Shell commands
//!
//! Lines starting with `@` are commands; anything else is address bar input.
//!
//! - `@back`, `@forward`: page navigation
//! - `@new [url]`, `@close [n]`, `@switch n`, `@tabs`: tab strip
//! - `@bookmark`, `@bookmarks`, `@open-bookmark n`: bookmarks
//! - `@history`, `@open-history n`: history
//! - `@lang en|de`, `@engine google|bing|duckduckgo`, `@settings`
//! - `@help`, `@quit`

pub mod navigation;
pub mod settings;
pub mod tabs;

use schaechner_core::{CoreError, Language, SearchEngine};
use thiserror::Error;

use crate::state::AppState;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unknown command: @{0}")]
    UnknownCommand(String),

    #[error("@{0} needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a position: {0}")]
    InvalidPosition(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type CommandResult = std::result::Result<CommandOutput, ShellError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Address bar input
    Go(String),
    Back,
    Forward,
    NewTab(Option<String>),
    /// 1-based position; `None` closes the active tab
    CloseTab(Option<usize>),
    SwitchTab(usize),
    Tabs,
    Bookmark,
    Bookmarks,
    OpenBookmark(usize),
    History,
    OpenHistory(usize),
    Language(Language),
    Engine(SearchEngine),
    Settings,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Address bar input is passed on exactly as typed, surrounding spaces included.
    pub fn parse(input: &str) -> Result<Option<Self>, ShellError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let Some(without_prefix) = trimmed.strip_prefix('@') else {
            return Ok(Some(ShellCommand::Go(input.to_string())));
        };

        let mut parts = without_prefix.splitn(2, ' ');
        let command = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let command = match command.as_str() {
            "back" | "b" => ShellCommand::Back,
            "forward" | "f" => ShellCommand::Forward,
            "new" | "n" => ShellCommand::NewTab(arg),
            "close" | "c" => ShellCommand::CloseTab(arg.as_deref().map(position).transpose()?),
            "switch" | "s" => ShellCommand::SwitchTab(position(&required(arg, "switch")?)?),
            "tabs" | "t" => ShellCommand::Tabs,
            "bookmark" => ShellCommand::Bookmark,
            "bookmarks" => ShellCommand::Bookmarks,
            "open-bookmark" => {
                ShellCommand::OpenBookmark(position(&required(arg, "open-bookmark")?)?)
            }
            "history" | "h" => ShellCommand::History,
            "open-history" => ShellCommand::OpenHistory(position(&required(arg, "open-history")?)?),
            "lang" | "language" => {
                ShellCommand::Language(required(arg, "lang")?.parse::<Language>().map_err(ShellError::Core)?)
            }
            "engine" => ShellCommand::Engine(
                required(arg, "engine")?
                    .parse::<SearchEngine>()
                    .map_err(|e| ShellError::Core(CoreError::Navigation(e)))?,
            ),
            "settings" => ShellCommand::Settings,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(arg: Option<String>, command: &'static str) -> Result<String, ShellError> {
    arg.ok_or(ShellError::MissingArgument(command))
}

/// 1-based list position to index
fn position(raw: &str) -> Result<usize, ShellError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ShellError::InvalidPosition(raw.to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    /// The user asked to leave; the caller still has to confirm
    pub exit_requested: bool,
}

impl CommandOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            exit_requested: false,
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            exit_requested: false,
        }
    }

    fn exit() -> Self {
        Self {
            lines: Vec::new(),
            exit_requested: true,
        }
    }
}

pub fn execute(state: &mut AppState, command: ShellCommand) -> CommandResult {
    let mut output = match command {
        ShellCommand::Go(input) => navigation::go(state, &input)?,
        ShellCommand::Back => navigation::back(state)?,
        ShellCommand::Forward => navigation::forward(state)?,
        ShellCommand::History => navigation::history(state),
        ShellCommand::OpenHistory(index) => navigation::open_history(state, index)?,
        ShellCommand::NewTab(url) => tabs::new_tab(state, url)?,
        ShellCommand::CloseTab(index) => tabs::close_tab(state, index)?,
        ShellCommand::SwitchTab(index) => tabs::switch_tab(state, index)?,
        ShellCommand::Tabs => tabs::list_tabs(state),
        ShellCommand::Bookmark => settings::add_bookmark(state)?,
        ShellCommand::Bookmarks => settings::list_bookmarks(state),
        ShellCommand::OpenBookmark(index) => settings::open_bookmark(state, index)?,
        ShellCommand::Language(language) => settings::set_language(state, language),
        ShellCommand::Engine(engine) => settings::set_search_engine(state, engine),
        ShellCommand::Settings => settings::show_settings(state),
        ShellCommand::Help => help(),
        ShellCommand::Quit => CommandOutput::exit(),
    };

    output.lines.extend(state.settle());
    Ok(output)
}

/// Whether an answer to the exit prompt confirms leaving
pub fn confirms_exit(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "j" | "ja"
    )
}

fn help() -> CommandOutput {
    CommandOutput::lines(
        [
            "<text>               go to a URL or search for <text>",
            "@back / @forward     move through the page's history",
            "@new [url]           open a tab",
            "@close [n]           close tab n (default: the active tab)",
            "@switch n            activate tab n",
            "@tabs                list tabs",
            "@bookmark            bookmark the active page",
            "@bookmarks           list bookmarks",
            "@open-bookmark n     load bookmark n",
            "@history             list visited pages",
            "@open-history n      load history entry n",
            "@lang en|de          change the interface language",
            "@engine name         google, bing (edge) or duckduckgo",
            "@settings            show current settings",
            "@quit                exit",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let mut state = AppState::new(schaechner_core::Config::default()).unwrap();
    state.initialize();
    state
}
