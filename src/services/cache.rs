//! Content-addressed catalog cache.
//!
//! Catalog uploads are keyed by the SHA-256 of their raw text, so re-running
//! a report against the same file skips the parse entirely. Parse failures
//! are never cached; a corrected upload with the same name parses fresh.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::api::StarCatalog;
use crate::catalog::load_catalog;
use crate::error::Result;

/// Calculate SHA-256 checksum of catalog text.
///
/// # Arguments
/// * `content` - raw catalog file content
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Shared cache of parsed catalogs, keyed by content checksum.
#[derive(Default)]
pub struct CatalogCache {
    entries: RwLock<HashMap<String, Arc<StarCatalog>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse catalog text, reusing the cached result when the same bytes
    /// have been seen before.
    pub fn load(&self, content: &str) -> Result<Arc<StarCatalog>> {
        let checksum = calculate_checksum(content);

        if let Some(catalog) = self.entries.read().get(&checksum) {
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(load_catalog(content.as_bytes())?);
        self.entries
            .write()
            .insert(checksum, Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Number of distinct catalogs currently cached.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "star_name,ra,dec,mag_v\nVega,279.234,38.784,0.03\n";

    #[test]
    fn test_checksum_consistency() {
        let checksum1 = calculate_checksum(CATALOG);
        let checksum2 = calculate_checksum(CATALOG);
        assert_eq!(checksum1, checksum2);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let checksum1 = calculate_checksum("star_name,ra,dec\na,1,2\n");
        let checksum2 = calculate_checksum("star_name,ra,dec\nb,1,2\n");
        assert_ne!(checksum1, checksum2);
    }

    #[test]
    fn test_repeat_load_reuses_parsed_catalog() {
        let cache = CatalogCache::new();
        let first = cache.load(CATALOG).unwrap();
        let second = cache.load(CATALOG).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_content_cached_separately() {
        let cache = CatalogCache::new();
        cache.load(CATALOG).unwrap();
        cache
            .load("star_name,ra,dec\nSirius,101.287,-16.716\n")
            .unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_parse_errors_are_not_cached() {
        let cache = CatalogCache::new();
        let broken = "nothing,useful\n1,2\n";

        assert!(cache.load(broken).is_err());
        assert!(cache.is_empty());
    }
}
