//! Application state for the HTTP server.

use crate::services::CatalogCache;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache of parsed catalogs keyed by content checksum
    pub catalog_cache: Arc<CatalogCache>,
}

impl AppState {
    /// Create a new application state with the given catalog cache.
    pub fn new(catalog_cache: Arc<CatalogCache>) -> Self {
        Self { catalog_cache }
    }
}
