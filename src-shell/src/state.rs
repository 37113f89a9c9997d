//! Application state management
use schaechner_core::{Browser, Config, PageEvent, Result, UiNotice};

use crate::headless::HeadlessPageFactory;

pub struct AppState {
    browser: Browser,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let browser = Browser::new(config, Box::new(HeadlessPageFactory))?;
        Ok(Self { browser })
    }

    /// Open the initial tab at the homepage
    pub fn initialize(&mut self) {
        self.browser.new_tab();
        self.browser.pump_page_events();
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut Browser {
        &mut self.browser
    }

    /// Apply page reports and collect what the user should be told about
    pub fn settle(&mut self) -> Vec<String> {
        let mut lines = Vec::new();

        for failure in self.browser.pump_page_events() {
            if let PageEvent::LoadFailed { url, reason, .. } = failure {
                lines.push(format!("! Failed to load {url}: {reason}"));
            }
        }

        for notice in self.browser.take_notices() {
            match notice {
                UiNotice::BookmarkAdded { title, message } => {
                    lines.push(format!("[{title}] {message}"));
                }
            }
        }

        lines
    }
}
