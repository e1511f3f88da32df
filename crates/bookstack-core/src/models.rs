//! Catalog entity types.

use serde::{Deserialize, Serialize};

/// A stored catalog entry. The id is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl Book {
    pub fn new(id: u32, title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}

/// Input shape for registering a book.
///
/// The id is optional: when absent the registry allocates one, when present
/// it is stored as-is (see `LibraryService::add_book` for the collision
/// caveat). `author` and `price` default to empty/zero so callers can post
/// partial records, matching the original service's lenient intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub price: f64,
}

impl BookDraft {
    /// Finalize the draft into a stored `Book` under the given id.
    pub fn into_book(self, id: u32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}
