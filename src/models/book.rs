//! Book model

use serde::{Deserialize, Serialize};

/// Catalog entry, identified by its ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Author", default)]
    pub author: String,
    #[serde(rename = "ISBN", default)]
    pub isbn: String,
    #[serde(rename = "IsAvailable", default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            is_available: true,
        }
    }

    pub fn mark_as_loaned(&mut self) {
        self.is_available = false;
    }

    pub fn mark_as_available(&mut self) {
        self.is_available = true;
    }

    /// Case-insensitive substring match against title or author.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}
