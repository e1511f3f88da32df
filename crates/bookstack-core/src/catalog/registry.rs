//! Runtime registry for books added while the service is running.

use crate::config::CatalogConfig;
use crate::models::Book;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::RwLock;
use tracing::debug;

/// Append-only, concurrently writable book store with an id allocator.
///
/// The allocator is a single atomic counter seeded above the reference
/// dataset's id range, so allocated ids never collide with reference ids or
/// with each other, even across concurrent callers. Ids are consumed by
/// `next_id` itself and never handed back, so an abandoned registration
/// cannot cause reuse.
///
/// The collection favors the append-mostly access pattern: writers take the
/// lock briefly to push, readers take a shared lock and clone a snapshot, so
/// iteration never observes a half-applied append.
pub struct RuntimeRegistry {
    books: RwLock<Vec<Book>>,
    id_allocator: AtomicU32,
}

impl RuntimeRegistry {
    /// Create an empty registry with the default allocator seed.
    pub fn new() -> Self {
        Self::with_seed(CatalogConfig::ID_ALLOCATOR_SEED)
    }

    /// Create an empty registry whose first allocated id is `seed + 1`.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            id_allocator: AtomicU32::new(seed),
        }
    }

    /// Allocate the next id. Strictly increasing; two concurrent calls never
    /// return the same value.
    pub fn next_id(&self) -> u32 {
        self.id_allocator.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Append a book. Visible to every `list`/`find_by_id` call that starts
    /// after this returns.
    pub fn append(&self, book: Book) {
        debug!("Registered runtime book {} ({})", book.id, book.title);
        self.books
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(book);
    }

    /// Snapshot of the current contents, in insertion order.
    pub fn list(&self) -> Vec<Book> {
        self.books
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Find a book by id in the current contents.
    pub fn find_by_id(&self, id: u32) -> Option<Book> {
        self.books
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.books
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RuntimeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
