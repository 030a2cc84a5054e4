//! In-memory caching using moka
//!
//! Holds the live menu catalog between fetches. Only catalogs that were
//! actually fetched are cached; the static fallback never is, so the next
//! request after an outage retries the endpoint.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::pricing::models::MenuCatalog;
use crate::pricing::services::CatalogService;

/// Key of the single catalog entry
pub const CATALOG_KEY: &str = "menu_catalog";

/// Application cache holding the fetched menu catalog
#[derive(Clone)]
pub struct AppCache {
    /// Live menu catalog (singleton)
    pub catalog: Cache<String, Arc<MenuCatalog>>,
}

impl AppCache {
    /// Create a new cache instance with the given catalog TTL
    pub fn new(catalog_ttl: Duration) -> Self {
        Self {
            catalog: Cache::builder()
                .max_capacity(1)
                .time_to_live(catalog_ttl)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            catalog_cached: self.catalog.entry_count() > 0,
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.catalog.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub catalog_cached: bool,
}

/// Start background cache warmer
///
/// Loads the catalog on startup and refreshes it every `every`.
pub async fn start_cache_warmer(service: Arc<CatalogService>, every: Duration) {
    let mut interval = interval(every);
    loop {
        // First tick completes immediately
        interval.tick().await;
        info!("Starting catalog warm-up...");
        service.refresh().await;
        info!("Catalog warm-up complete. Stats: {:?}", service.cache().stats());
    }
}
