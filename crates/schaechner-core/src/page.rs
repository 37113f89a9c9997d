//! Page view collaborator
//!
//! One page view per tab, supplied by the embedded rendering engine. The core
//! drives it through [`PageView`] and hears back through a [`PageEventSink`]:
//! the engine publishes title changes, URL changes and load failures into a
//! shared queue which [`crate::Browser::pump_page_events`] drains.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use schaechner_tabs::TabId;

pub trait PageView {
    fn set_url(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn current_url(&self) -> String;
    fn current_title(&self) -> String;
}

/// Creates the page view for a freshly opened tab
pub trait PageViewFactory {
    fn create(&mut self, tab: TabId, events: PageEventSink) -> Box<dyn PageView>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    TitleChanged { tab: TabId, title: String },
    /// The page moved on its own (engine back/forward, redirects)
    UrlChanged { tab: TabId, url: String },
    LoadFailed { tab: TabId, url: String, reason: String },
}

impl PageEvent {
    pub fn tab(&self) -> TabId {
        match self {
            PageEvent::TitleChanged { tab, .. }
            | PageEvent::UrlChanged { tab, .. }
            | PageEvent::LoadFailed { tab, .. } => *tab,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageEventQueue {
    events: Arc<Mutex<VecDeque<PageEvent>>>,
}

impl PageEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscription handle handed to the page view of `tab`
    pub fn sink_for(&self, tab: TabId) -> PageEventSink {
        PageEventSink {
            tab,
            events: Arc::clone(&self.events),
        }
    }

    /// Take all pending events, oldest first
    pub fn drain(&self) -> Vec<PageEvent> {
        self.events.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

/// Publishing side of the page event queue, bound to one tab
#[derive(Debug, Clone)]
pub struct PageEventSink {
    tab: TabId,
    events: Arc<Mutex<VecDeque<PageEvent>>>,
}

impl PageEventSink {
    pub fn title_changed(&self, title: impl Into<String>) {
        self.publish(PageEvent::TitleChanged {
            tab: self.tab,
            title: title.into(),
        });
    }

    pub fn url_changed(&self, url: impl Into<String>) {
        self.publish(PageEvent::UrlChanged {
            tab: self.tab,
            url: url.into(),
        });
    }

    pub fn load_failed(&self, url: impl Into<String>, reason: impl Into<String>) {
        self.publish(PageEvent::LoadFailed {
            tab: self.tab,
            url: url.into(),
            reason: reason.into(),
        });
    }

    fn publish(&self, event: PageEvent) {
        self.events.lock().push_back(event);
    }
}
