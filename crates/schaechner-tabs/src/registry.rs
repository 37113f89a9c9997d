//! Tab Registry
//!
//! Owns every open tab, in display order, and the active-tab selection.

use crate::error::TabError;
use crate::tab::{Tab, TabId};
use crate::Result;

#[derive(Debug, Default)]
pub struct TabRegistry {
    /// Tabs in display order
    tabs: Vec<Tab>,
    /// Currently active tab ID
    active: Option<TabId>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tab at the end of the strip and make it active
    pub fn open_tab(&mut self, url: String) -> TabId {
        let tab = Tab::new(url);
        let id = tab.id;

        tracing::info!(tab_id = %id, url = %tab.url, "Opened new tab");

        self.tabs.push(tab);
        self.active = Some(id);
        id
    }

    /// Close a tab.
    ///
    /// Closing the active tab selects the tab that preceded it in display order,
    /// or the new first tab when it was the first.
    pub fn close_tab(&mut self, id: TabId) -> Result<Tab> {
        let index = self.index_of(id)?;
        let tab = self.tabs.remove(index);

        if self.active == Some(id) {
            self.active = if self.tabs.is_empty() {
                None
            } else {
                let next = index.saturating_sub(1);
                Some(self.tabs[next].id)
            };

            tracing::debug!(
                closed = %id,
                active = ?self.active.map(|t| t.to_string()),
                "Reselected active tab"
            );
        }

        tracing::info!(tab_id = %id, "Closed tab");

        Ok(tab)
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.active
    }

    /// Active tab, or [`TabError::NoActiveTab`] when the set is empty
    pub fn require_active(&self) -> Result<&Tab> {
        let id = self.active.ok_or(TabError::NoActiveTab)?;
        self.get(id)
    }

    pub fn set_active_tab(&mut self, id: TabId) -> Result<()> {
        self.index_of(id)?;
        if self.active != Some(id) {
            tracing::debug!(tab_id = %id, "Activated tab");
        }
        self.active = Some(id);
        Ok(())
    }

    /// Point a tab at a new URL. The only way a tab's URL changes.
    pub fn navigate(&mut self, id: TabId, url: String) -> Result<&Tab> {
        let tab = self.get_mut(id)?;
        tab.navigate(url);
        tracing::debug!(tab_id = %id, url = %tab.url, "Tab navigated");
        Ok(tab)
    }

    /// Store the title the page reported; the latest report wins
    pub fn update_title(&mut self, id: TabId, title: String) -> Result<&Tab> {
        let tab = self.get_mut(id)?;
        tab.set_title(title);
        Ok(tab)
    }

    pub fn get(&self, id: TabId) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| t.id == id)
            .ok_or(TabError::NotFound(id))
    }

    fn get_mut(&mut self, id: TabId) -> Result<&mut Tab> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TabError::NotFound(id))
    }

    /// Position of a tab in display order
    pub fn index_of(&self, id: TabId) -> Result<usize> {
        self.tabs
            .iter()
            .position(|t| t.id == id)
            .ok_or(TabError::NotFound(id))
    }

    /// Tabs in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
