//! Centralized configuration constants for Bookstack.

/// Catalog-level configuration.
pub struct CatalogConfig;

impl CatalogConfig {
    /// Seed for the runtime id allocator. The first allocated id is
    /// `ID_ALLOCATOR_SEED + 1`, keeping runtime ids clear of the
    /// reference dataset's range.
    pub const ID_ALLOCATOR_SEED: u32 = 100;
}

/// Server defaults used by the RPC binary.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
}
