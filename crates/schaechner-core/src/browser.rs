//! Main browser state container
//!
//! Turns user actions into session mutations and page view calls. Each action
//! runs to completion; there is no rollback when a later step fails.

use std::collections::HashMap;

use schaechner_navigation::{resolve, SearchEngine};
use schaechner_tabs::{Tab, TabError, TabId};

use crate::bookmarks::Bookmark;
use crate::config::{BackNavigation, Config};
use crate::error::CoreError;
use crate::labels::{LabelKey, Labels, Language};
use crate::page::{PageEvent, PageEventQueue, PageView, PageViewFactory};
use crate::session::Session;
use crate::Result;

/// Confirmation the UI should show to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiNotice {
    BookmarkAdded { title: String, message: String },
}

/// Main browser instance
pub struct Browser {
    config: Config,
    session: Session,
    /// Page view per open tab
    views: HashMap<TabId, Box<dyn PageView>>,
    factory: Box<dyn PageViewFactory>,
    events: PageEventQueue,
    notices: Vec<UiNotice>,
}

impl Browser {
    pub fn new(config: Config, factory: Box<dyn PageViewFactory>) -> Result<Self> {
        Labels::validate()?;

        let session = Session::from_config(&config);

        tracing::info!(
            language = %session.language,
            search_engine = %session.search_engine,
            "Browser initialized"
        );

        Ok(Self {
            config,
            session,
            views: HashMap::new(),
            factory,
            events: PageEventQueue::new(),
            notices: Vec::new(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn label(&self, key: LabelKey) -> &'static str {
        self.session.label(key)
    }

    // === Tab operations ===

    /// Open a tab at the configured homepage
    pub fn new_tab(&mut self) -> TabId {
        let homepage = self.config.homepage.clone();
        self.open_tab(homepage)
    }

    pub fn open_tab(&mut self, url: String) -> TabId {
        let id = self.session.tabs.open_tab(url.clone());

        let mut view = self.factory.create(id, self.events.sink_for(id));
        view.set_url(&url);
        self.views.insert(id, view);

        id
    }

    pub fn close_tab(&mut self, tab_id: TabId) -> Result<Tab> {
        let tab = self.session.tabs.close_tab(tab_id)?;
        self.views.remove(&tab_id);
        Ok(tab)
    }

    pub fn activate_tab(&mut self, tab_id: TabId) -> Result<()> {
        Ok(self.session.tabs.set_active_tab(tab_id)?)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.session
            .tabs
            .active_tab()
            .and_then(|id| self.session.tabs.get(id).ok())
    }

    pub fn tabs(&self) -> &[Tab] {
        self.session.tabs.tabs()
    }

    // === Navigation operations ===

    /// Resolve address bar input and load it into the active tab.
    ///
    /// The visit is recorded as soon as the load is issued, whether or not the
    /// page eventually loads.
    pub fn navigate_current_tab(&mut self, input: &str) -> Result<String> {
        let tab_id = self.active_tab_id()?;
        let url = resolve(input, self.session.search_engine);

        self.load_into(tab_id, url.clone())?;
        self.session.history.record(url.clone());

        tracing::info!(tab_id = %tab_id, input = %input, url = %url, "Navigated");

        Ok(url)
    }

    pub fn go_back(&mut self) -> Result<()> {
        let tab_id = self.active_tab_id()?;
        self.view_mut(tab_id)?.back();

        if self.config.back_navigation == BackNavigation::EngineWithHistoryReplay {
            if let Some(url) = self.session.history.back() {
                tracing::debug!(tab_id = %tab_id, url = %url, "Replaying history entry");
                self.load_into(tab_id, url)?;
            }
        }

        Ok(())
    }

    pub fn go_forward(&mut self) -> Result<()> {
        let tab_id = self.active_tab_id()?;
        self.view_mut(tab_id)?.forward();
        Ok(())
    }

    /// Load a history entry into the active tab without recording a new visit
    pub fn open_history_entry(&mut self, index: usize) -> Result<String> {
        let url = self
            .session
            .history
            .get(index)
            .map(|entry| entry.url.clone())
            .ok_or(CoreError::HistoryEntryNotFound(index))?;

        let tab_id = self.active_tab_id()?;
        self.load_into(tab_id, url.clone())?;
        Ok(url)
    }

    // === Bookmark operations ===

    /// Bookmark the page shown in the active tab
    pub fn add_bookmark(&mut self) -> Result<Bookmark> {
        let tab = self.session.tabs.require_active()?;
        let (tab_id, stored_url, stored_title) = (tab.id, tab.url.clone(), tab.title.clone());

        let view = self.view_mut(tab_id)?;
        let url = non_empty_or(view.current_url(), stored_url);
        let title = non_empty_or(view.current_title(), stored_title);

        let bookmark = self.session.bookmarks.add(title, url).clone();

        let notice = UiNotice::BookmarkAdded {
            title: self.label(LabelKey::BookmarkAddedTitle).to_string(),
            message: self.label(LabelKey::BookmarkAddedMsg).to_string(),
        };
        self.notices.push(notice);

        Ok(bookmark)
    }

    /// Load a bookmark into the active tab without recording a new visit
    pub fn open_bookmark(&mut self, index: usize) -> Result<String> {
        let url = self
            .session
            .bookmarks
            .get(index)
            .map(|bookmark| bookmark.url.clone())
            .ok_or(CoreError::BookmarkNotFound(index))?;

        let tab_id = self.active_tab_id()?;
        self.load_into(tab_id, url.clone())?;
        Ok(url)
    }

    // === Settings operations ===

    pub fn change_language(&mut self, language: Language) {
        tracing::info!(from = %self.session.language, to = %language, "Changed language");
        self.session.language = language;
    }

    pub fn change_search_engine(&mut self, engine: SearchEngine) {
        tracing::info!(from = %self.session.search_engine, to = %engine, "Changed search engine");
        self.session.search_engine = engine;
    }

    // === Page events ===

    /// Apply pending page reports to the session.
    ///
    /// Returns load failures so the UI can surface them; the session itself
    /// does not react to them.
    pub fn pump_page_events(&mut self) -> Vec<PageEvent> {
        let mut failures = Vec::new();

        for event in self.events.drain() {
            match event {
                PageEvent::TitleChanged { tab, title } => {
                    if let Err(e) = self.session.tabs.update_title(tab, title) {
                        tracing::debug!(tab_id = %tab, error = %e, "Dropped title for closed tab");
                    }
                }
                PageEvent::UrlChanged { tab, url } => {
                    if let Err(e) = self.session.tabs.navigate(tab, url) {
                        tracing::debug!(tab_id = %tab, error = %e, "Dropped URL for closed tab");
                    }
                }
                PageEvent::LoadFailed { tab, url, reason } => {
                    tracing::warn!(tab_id = %tab, url = %url, reason = %reason, "Page failed to load");
                    failures.push(PageEvent::LoadFailed { tab, url, reason });
                }
            }
        }

        failures
    }

    /// Take the confirmations queued since the last call
    pub fn take_notices(&mut self) -> Vec<UiNotice> {
        std::mem::take(&mut self.notices)
    }

    fn active_tab_id(&self) -> Result<TabId> {
        Ok(self.session.tabs.require_active()?.id)
    }

    fn view_mut(&mut self, tab_id: TabId) -> Result<&mut Box<dyn PageView>> {
        self.views
            .get_mut(&tab_id)
            .ok_or(CoreError::Tab(TabError::NotFound(tab_id)))
    }

    fn load_into(&mut self, tab_id: TabId, url: String) -> Result<()> {
        self.session.tabs.navigate(tab_id, url.clone())?;
        self.view_mut(tab_id)?.set_url(&url);
        Ok(())
    }
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageEventSink;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type CallLog = Arc<Mutex<Vec<(TabId, String)>>>;

    /// Page that keeps its own back/forward stacks and titles itself after its URL
    struct FakePage {
        tab: TabId,
        back: Vec<String>,
        forward: Vec<String>,
        current: String,
        title: String,
        events: PageEventSink,
        calls: CallLog,
    }

    impl FakePage {
        fn show(&mut self, url: String) {
            self.title = url.trim_start_matches("https://").to_string();
            self.current = url;
            self.events.url_changed(self.current.clone());
            self.events.title_changed(self.title.clone());
        }
    }

    impl PageView for FakePage {
        fn set_url(&mut self, url: &str) {
            self.calls.lock().push((self.tab, format!("set_url {url}")));
            if !self.current.is_empty() {
                self.back.push(self.current.clone());
            }
            self.forward.clear();
            self.show(url.to_string());
        }

        fn back(&mut self) {
            self.calls.lock().push((self.tab, "back".to_string()));
            if let Some(prev) = self.back.pop() {
                self.forward.push(self.current.clone());
                self.show(prev);
            }
        }

        fn forward(&mut self) {
            self.calls.lock().push((self.tab, "forward".to_string()));
            if let Some(next) = self.forward.pop() {
                self.back.push(self.current.clone());
                self.show(next);
            }
        }

        fn current_url(&self) -> String {
            self.current.clone()
        }

        fn current_title(&self) -> String {
            self.title.clone()
        }
    }

    #[derive(Default)]
    struct FakeFactory {
        calls: CallLog,
    }

    impl PageViewFactory for FakeFactory {
        fn create(&mut self, tab: TabId, events: PageEventSink) -> Box<dyn PageView> {
            Box::new(FakePage {
                tab,
                back: Vec::new(),
                forward: Vec::new(),
                current: String::new(),
                title: String::new(),
                events,
                calls: Arc::clone(&self.calls),
            })
        }
    }

    fn test_browser(config: Config) -> (Browser, CallLog) {
        let factory = FakeFactory::default();
        let calls = Arc::clone(&factory.calls);
        (Browser::new(config, Box::new(factory)).unwrap(), calls)
    }

    #[test]
    fn test_browser_initialization() {
        let (mut browser, calls) = test_browser(Config::default());
        assert!(browser.active_tab().is_none());

        let tab = browser.new_tab();
        assert_eq!(browser.active_tab().unwrap().id, tab);
        assert_eq!(browser.active_tab().unwrap().url, "https://www.google.com");
        assert_eq!(
            calls.lock().as_slice(),
            &[(tab, "set_url https://www.google.com".to_string())]
        );
        // Opening a tab is not a visit
        assert!(browser.session().history.is_empty());
    }

    #[test]
    fn test_navigate_domain_records_history() {
        let (mut browser, _) = test_browser(Config::default());
        browser.new_tab();

        let url = browser.navigate_current_tab("openai.com").unwrap();
        assert_eq!(url, "https://openai.com");
        assert_eq!(browser.active_tab().unwrap().url, "https://openai.com");
        assert_eq!(browser.session().history.list(), vec!["https://openai.com"]);
    }

    #[test]
    fn test_navigate_search_uses_selected_engine() {
        let (mut browser, calls) = test_browser(Config::default());
        let tab = browser.new_tab();
        browser.change_search_engine(SearchEngine::DuckDuckGo);

        let url = browser.navigate_current_tab("weather today").unwrap();
        assert_eq!(url, "https://duckduckgo.com/?q=weather+today");
        assert_eq!(
            calls.lock().last().unwrap(),
            &(tab, "set_url https://duckduckgo.com/?q=weather+today".to_string())
        );
    }

    #[test]
    fn test_actions_without_tabs_report_no_active_tab() {
        let (mut browser, _) = test_browser(Config::default());

        for result in [
            browser.navigate_current_tab("openai.com").map(|_| ()),
            browser.go_back(),
            browser.go_forward(),
            browser.add_bookmark().map(|_| ()),
        ] {
            assert!(matches!(result, Err(CoreError::Tab(TabError::NoActiveTab))));
        }
        assert!(browser.session().history.is_empty());
    }

    #[test]
    fn test_add_bookmark_reads_active_page() {
        let (mut browser, _) = test_browser(Config::default());
        browser.open_tab("https://a.com".to_string());

        let bookmark = browser.add_bookmark().unwrap();
        assert_eq!(
            bookmark,
            Bookmark {
                title: "a.com".to_string(),
                url: "https://a.com".to_string()
            }
        );
        assert_eq!(browser.session().bookmarks.list(), &[bookmark]);
        assert_eq!(
            browser.take_notices(),
            vec![UiNotice::BookmarkAdded {
                title: "Bookmark Added".to_string(),
                message: "Bookmark has been added.".to_string()
            }]
        );
        assert!(browser.take_notices().is_empty());
    }

    #[test]
    fn test_bookmark_notice_follows_language() {
        let (mut browser, _) = test_browser(Config::default());
        browser.new_tab();
        browser.change_language(Language::De);

        browser.add_bookmark().unwrap();
        assert_eq!(
            browser.take_notices(),
            vec![UiNotice::BookmarkAdded {
                title: "Lesezeichen hinzugefügt".to_string(),
                message: "Lesezeichen wurde hinzugefügt.".to_string()
            }]
        );
    }

    #[test]
    fn test_engine_back_leaves_history_alone() {
        let (mut browser, _) = test_browser(Config::default());
        browser.open_tab("https://start.com".to_string());
        browser.navigate_current_tab("a.com").unwrap();
        browser.navigate_current_tab("b.com").unwrap();
        browser.pump_page_events();

        browser.go_back().unwrap();
        browser.pump_page_events();

        assert_eq!(browser.active_tab().unwrap().url, "https://a.com");
        assert_eq!(
            browser.session().history.list(),
            vec!["https://a.com", "https://b.com"]
        );

        browser.go_forward().unwrap();
        browser.pump_page_events();
        assert_eq!(browser.active_tab().unwrap().url, "https://b.com");
    }

    #[test]
    fn test_history_replay_back_pops_log() {
        let config = Config {
            back_navigation: BackNavigation::EngineWithHistoryReplay,
            ..Config::default()
        };
        let (mut browser, calls) = test_browser(config);
        let tab = browser.new_tab();
        browser.navigate_current_tab("a.com").unwrap();
        browser.navigate_current_tab("b.com").unwrap();
        calls.lock().clear();

        browser.go_back().unwrap();
        assert_eq!(
            calls.lock().as_slice(),
            &[
                (tab, "back".to_string()),
                (tab, "set_url https://a.com".to_string())
            ]
        );
        assert_eq!(browser.session().history.list(), vec!["https://a.com"]);

        // One entry left: only the page moves
        browser.go_back().unwrap();
        assert_eq!(browser.session().history.list(), vec!["https://a.com"]);
    }

    #[test]
    fn test_title_events_update_registry() {
        let (mut browser, _) = test_browser(Config::default());
        let tab = browser.open_tab("https://example-domain.org".to_string());

        assert!(browser.pump_page_events().is_empty());

        let stored = browser.session().tabs.get(tab).unwrap();
        assert_eq!(stored.title, "example-domain.org");
        assert_eq!(stored.display_title(), "example-do...");
    }

    #[test]
    fn test_events_for_closed_tabs_are_dropped() {
        let (mut browser, _) = test_browser(Config::default());
        let first = browser.new_tab();
        let second = browser.open_tab("https://b.com".to_string());

        browser.close_tab(second).unwrap();
        assert!(browser.pump_page_events().is_empty());
        assert_eq!(browser.tabs().len(), 1);
        assert_eq!(browser.active_tab().unwrap().id, first);
    }

    #[test]
    fn test_load_failures_are_returned() {
        let (mut browser, _) = test_browser(Config::default());
        let tab = browser.new_tab();
        browser.pump_page_events();

        browser
            .events
            .sink_for(tab)
            .load_failed("https://www.google.com", "connection refused");

        let failures = browser.pump_page_events();
        assert_eq!(
            failures,
            vec![PageEvent::LoadFailed {
                tab,
                url: "https://www.google.com".to_string(),
                reason: "connection refused".to_string()
            }]
        );
    }

    #[test]
    fn test_open_history_and_bookmark_entries() {
        let (mut browser, _) = test_browser(Config::default());
        browser.new_tab();
        browser.navigate_current_tab("a.com").unwrap();
        browser.add_bookmark().unwrap();
        browser.navigate_current_tab("b.com").unwrap();

        assert_eq!(browser.open_history_entry(0).unwrap(), "https://a.com");
        assert_eq!(browser.active_tab().unwrap().url, "https://a.com");
        assert_eq!(browser.session().history.len(), 2);

        browser.navigate_current_tab("c.com").unwrap();
        assert_eq!(browser.open_bookmark(0).unwrap(), "https://a.com");
        assert_eq!(browser.session().history.len(), 3);

        assert!(matches!(
            browser.open_history_entry(9),
            Err(CoreError::HistoryEntryNotFound(9))
        ));
        assert!(matches!(
            browser.open_bookmark(1),
            Err(CoreError::BookmarkNotFound(1))
        ));
    }

    #[test]
    fn test_history_is_shared_across_tabs() {
        let (mut browser, _) = test_browser(Config::default());
        let first = browser.new_tab();
        browser.navigate_current_tab("a.com").unwrap();
        browser.new_tab();
        browser.navigate_current_tab("b.com").unwrap();
        browser.activate_tab(first).unwrap();
        browser.navigate_current_tab("c.com").unwrap();

        assert_eq!(
            browser.session().history.list(),
            vec!["https://a.com", "https://b.com", "https://c.com"]
        );
    }

    #[test]
    fn test_activate_unknown_tab_fails() {
        let (mut browser, _) = test_browser(Config::default());
        let ghost = TabId::new();
        assert!(matches!(
            browser.activate_tab(ghost),
            Err(CoreError::Tab(TabError::NotFound(id))) if id == ghost
        ));
        assert!(browser.close_tab(ghost).is_err());
    }
}
