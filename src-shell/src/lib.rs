//! Schächner Web Browser - interactive shell
//!
//! Builds one browsing session, opens the homepage tab and reads address bar
//! input and `@commands` until the user confirms they want to leave.

mod commands;
mod headless;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use schaechner_core::{Config, CoreError, LabelKey};

use commands::{confirms_exit, execute, ShellCommand};
use state::AppState;

pub fn run() -> anyhow::Result<()> {
    // Initialize logging
    schaechner_core::init_logging();

    let config_path = config_path_from_args(std::env::args().skip(1))?;
    let config = Config::load(&config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;

    let mut state = AppState::new(config)?;
    state.initialize();

    println!("{}", state.browser().label(LabelKey::WindowTitle));
    println!("Type @help for commands.");

    tracing::info!("Schächner Browser started");

    let mut rl = DefaultEditor::new()?;
    loop {
        let prompt = prompt_for(&state);
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }

                let command = match ShellCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                match execute(&mut state, command) {
                    Ok(output) => {
                        for line in &output.lines {
                            println!("{line}");
                        }
                        if output.exit_requested && confirm_exit(&mut rl, &state)? {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if confirm_exit(&mut rl, &state)? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    tracing::info!("Schächner Browser stopped");
    Ok(())
}

/// Ask before leaving; only an explicit yes accepts
fn confirm_exit(rl: &mut DefaultEditor, state: &AppState) -> anyhow::Result<bool> {
    let browser = state.browser();
    let question = format!(
        "{}: {} [y/N] ",
        browser.label(LabelKey::ExitConfirmTitle),
        browser.label(LabelKey::ExitConfirmMsg)
    );

    match rl.readline(&question) {
        Ok(answer) => Ok(confirms_exit(&answer)),
        Err(ReadlineError::Interrupted) => Ok(false),
        Err(ReadlineError::Eof) => Ok(true),
        Err(err) => Err(err.into()),
    }
}

fn prompt_for(state: &AppState) -> String {
    match state.browser().active_tab() {
        Some(tab) => format!("[{}]> ", tab.display_title()),
        None => "[]> ".to_string(),
    }
}

fn config_path_from_args(
    mut args: impl Iterator<Item = String>,
) -> Result<PathBuf, CoreError> {
    match args.next().as_deref() {
        None => Ok(Config::config_path()),
        Some("--config") => args
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| CoreError::Config("--config needs a path".to_string())),
        Some(other) => Err(CoreError::Config(format!("unexpected argument: {other}"))),
    }
}
