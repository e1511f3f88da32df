//! Error types for the book catalog.

use thiserror::Error;

/// Main error type for catalog operations.
///
/// Lookups are deterministic in-memory scans, so a miss is never retried;
/// the transport layer is responsible for translating it into a
/// protocol-level "not found" response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Book with id {id} not found")]
    BookNotFound { id: u32 },
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
