//! Bookstack Core - Headless in-memory book catalog.
//!
//! This crate provides the catalog logic without any HTTP/RPC layer: a fixed
//! reference dataset loaded at startup, a concurrently-appendable runtime
//! registry for books added while the service runs, and a resolver that
//! merges the two with runtime-wins precedence.
//!
//! For the HTTP transport, see the `bookstack-rpc` crate.
//!
//! # Example
//!
//! ```rust
//! use bookstack_core::{BookDraft, LibraryService};
//!
//! let service = LibraryService::new();
//!
//! let stored = service.add_book(BookDraft {
//!     id: None,
//!     title: "Laptop".to_string(),
//!     author: String::new(),
//!     price: 1200.0,
//! });
//!
//! let found = service.get_book(stored.id).unwrap();
//! assert_eq!(found.title, "Laptop");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use catalog::{CatalogResolver, ReferenceCatalog, RuntimeRegistry};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use models::{Book, BookDraft};
pub use service::LibraryService;
