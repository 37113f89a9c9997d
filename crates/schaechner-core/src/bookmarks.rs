use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

/// Saved pages in the order they were bookmarked. Duplicates are kept.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: String, url: String) -> &Bookmark {
        tracing::info!(title = %title, url = %url, "Added bookmark");
        self.bookmarks.push(Bookmark { title, url });
        &self.bookmarks[self.bookmarks.len() - 1]
    }

    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
