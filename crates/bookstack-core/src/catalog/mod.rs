//! The two catalog stores and the resolver that merges them.

mod reference;
mod registry;
mod resolver;

pub use reference::ReferenceCatalog;
pub use registry::RuntimeRegistry;
pub use resolver::CatalogResolver;
