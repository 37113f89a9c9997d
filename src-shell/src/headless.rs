//! Headless page view
//!
//! Stands in for the rendering engine: keeps a per-tab back/forward stack and
//! names each page after its host. Nothing is fetched.

use schaechner_core::{PageEventSink, PageView, PageViewFactory, TabId};
use url::Url;

pub struct HeadlessPage {
    back: Vec<String>,
    forward: Vec<String>,
    current: String,
    title: String,
    events: PageEventSink,
}

impl HeadlessPage {
    pub fn new(events: PageEventSink) -> Self {
        Self {
            back: Vec::new(),
            forward: Vec::new(),
            current: String::new(),
            title: String::new(),
            events,
        }
    }

    fn show(&mut self, url: String) {
        self.title = match Url::parse(&url) {
            Ok(parsed) => parsed.host_str().unwrap_or(url.as_str()).to_string(),
            Err(e) => {
                self.events.load_failed(url.clone(), e.to_string());
                url.clone()
            }
        };
        self.current = url;

        self.events.url_changed(self.current.clone());
        self.events.title_changed(self.title.clone());
    }
}

impl PageView for HeadlessPage {
    fn set_url(&mut self, url: &str) {
        if !self.current.is_empty() {
            self.back.push(std::mem::take(&mut self.current));
        }
        self.forward.clear();
        self.show(url.to_string());
    }

    fn back(&mut self) {
        if let Some(prev) = self.back.pop() {
            self.forward.push(std::mem::take(&mut self.current));
            self.show(prev);
        }
    }

    fn forward(&mut self) {
        if let Some(next) = self.forward.pop() {
            self.back.push(std::mem::take(&mut self.current));
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

#[derive(Debug, Default)]
pub struct HeadlessPageFactory;

impl PageViewFactory for HeadlessPageFactory {
    fn create(&mut self, tab: TabId, events: PageEventSink) -> Box<dyn PageView> {
        tracing::debug!(tab_id = %tab, "Created headless page");
        Box::new(HeadlessPage::new(events))
    }
}
