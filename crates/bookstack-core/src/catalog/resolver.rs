//! Merged read view over the reference catalog and the runtime registry.

use crate::catalog::{ReferenceCatalog, RuntimeRegistry};
use crate::error::{CatalogError, Result};
use crate::models::Book;
use std::sync::Arc;

/// Single lookup surface across both stores.
///
/// Precedence is a deliberate policy: the runtime registry is consulted
/// first, so a runtime book registered under an id the reference catalog
/// already uses shadows the reference entry.
pub struct CatalogResolver {
    reference: Arc<ReferenceCatalog>,
    runtime: Arc<RuntimeRegistry>,
}

impl CatalogResolver {
    pub fn new(reference: Arc<ReferenceCatalog>, runtime: Arc<RuntimeRegistry>) -> Self {
        Self { reference, runtime }
    }

    /// Resolve an id: runtime first, then reference, else `BookNotFound`.
    pub fn resolve(&self, id: u32) -> Result<Book> {
        self.runtime
            .find_by_id(id)
            .or_else(|| self.reference.get(id).cloned())
            .ok_or(CatalogError::BookNotFound { id })
    }

    /// Total size of both stores, recomputed on every call.
    ///
    /// An id present in both stores is counted twice: this reports the two
    /// independent stores, not a deduplicated merged view.
    pub fn count(&self) -> usize {
        self.reference.len() + self.runtime.len()
    }

    /// Browse listing: reference titles only. Runtime books surface through
    /// `add`'s result and the runtime snapshot, never through this listing.
    pub fn titles(&self) -> Vec<String> {
        self.reference.titles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_resolver() -> (CatalogResolver, Arc<RuntimeRegistry>) {
        let reference = Arc::new(ReferenceCatalog::builtin());
        let runtime = Arc::new(RuntimeRegistry::new());
        (
            CatalogResolver::new(reference, runtime.clone()),
            runtime,
        )
    }

    #[test]
    fn test_resolve_reference_only_id() {
        let (resolver, _runtime) = test_resolver();

        let book = resolver.resolve(1).unwrap();
        assert_eq!(book.title, "Clean Code");
    }

    #[test]
    fn test_resolve_runtime_only_id() {
        let (resolver, runtime) = test_resolver();
        let id = runtime.next_id();
        runtime.append(Book::new(id, "Laptop", "", 1200.0));

        let book = resolver.resolve(id).unwrap();
        assert_eq!(book.title, "Laptop");
    }

    #[test]
    fn test_runtime_shadows_reference() {
        let (resolver, runtime) = test_resolver();
        runtime.append(Book::new(2, "Shadow", "", 0.0));

        let book = resolver.resolve(2).unwrap();
        assert_eq!(book.title, "Shadow");
    }

    #[test]
    fn test_resolve_missing_id_fails() {
        let (resolver, _runtime) = test_resolver();

        let err = resolver.resolve(999).unwrap_err();
        assert_eq!(err, CatalogError::BookNotFound { id: 999 });
    }

    #[test]
    fn test_count_sums_both_stores() {
        let (resolver, runtime) = test_resolver();
        assert_eq!(resolver.count(), 3);

        let id = runtime.next_id();
        runtime.append(Book::new(id, "Laptop", "", 1200.0));
        assert_eq!(resolver.count(), 4);
    }

    #[test]
    fn test_count_double_counts_shadowed_id() {
        let (resolver, runtime) = test_resolver();
        runtime.append(Book::new(2, "Shadow", "", 0.0));

        // Two independent stores, both holding id 2.
        assert_eq!(resolver.count(), 4);
    }

    #[test]
    fn test_titles_excludes_runtime_books() {
        let (resolver, runtime) = test_resolver();
        let id = runtime.next_id();
        runtime.append(Book::new(id, "Laptop", "", 1200.0));

        let titles = resolver.titles();
        assert_eq!(titles.len(), 3);
        assert!(!titles.iter().any(|t| t == "Laptop"));
    }
}
