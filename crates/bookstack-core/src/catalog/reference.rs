//! Immutable reference dataset, fixed at service start.

use crate::models::Book;
use std::collections::HashMap;

/// Read-only `id -> Book` mapping built once before any concurrent access.
///
/// There is no mutation path after construction, so sharing across request
/// handlers needs no synchronization.
pub struct ReferenceCatalog {
    books: HashMap<u32, Book>,
}

impl ReferenceCatalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: entries.into_iter().map(|b| (b.id, b)).collect(),
        }
    }

    /// The built-in dataset shipped with the service (ids 1-3).
    pub fn builtin() -> Self {
        Self::new([
            Book::new(1, "Clean Code", "Robert C. Martin", 39.99),
            Book::new(2, "Effective Java", "Joshua Bloch", 49.99),
            Book::new(3, "Domain-Driven Design", "Eric Evans", 59.99),
        ])
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Titles of all reference books. Order is unspecified.
    pub fn titles(&self) -> Vec<String> {
        self.books.values().map(|b| b.title.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
