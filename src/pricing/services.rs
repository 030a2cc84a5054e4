//! Pricing services backed by the live menu catalog.
//!
//! These wrap the pure calculators with catalog loading: cache first, then
//! the configured source, then the static fallback table. Nothing here
//! returns an error to the caller.

use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::{AppCache, CATALOG_KEY};

use super::calculators;
use super::catalog::{CatalogError, CatalogSource};
use super::models::{Category, MenuCatalog, MenuItem, PricingBreakdown};
use super::rules::FALLBACK_MENU_ITEMS;
use super::selections::MenuSelections;
use super::validation::{self, ValidationReport};

/// Loads and caches the menu catalog and prices against it
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    cache: AppCache,
    fetch_timeout: Duration,
    fallback: Arc<MenuCatalog>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>, cache: AppCache, fetch_timeout: Duration) -> Self {
        Self {
            source,
            cache,
            fetch_timeout,
            fallback: Arc::new(FALLBACK_MENU_ITEMS.clone()),
        }
    }

    pub fn cache(&self) -> &AppCache {
        &self.cache
    }

    /// Current catalog: cached, freshly fetched, or the static fallback
    pub async fn current_catalog(&self) -> Arc<MenuCatalog> {
        if let Some(cached) = self.cache.catalog.get(CATALOG_KEY).await {
            debug!("Cache HIT for menu catalog");
            return cached;
        }

        debug!("Cache MISS for menu catalog");
        // Concurrent misses share one fetch; errors are not cached.
        let fetched = self
            .cache
            .catalog
            .try_get_with(CATALOG_KEY.to_string(), async {
                self.fetch().await.map(Arc::new)
            })
            .await;

        match fetched {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "Menu catalog unavailable, using fallback"
                );
                self.fallback.clone()
            }
        }
    }

    /// Fetch a fresh catalog into the cache, keeping the old one on failure
    pub async fn refresh(&self) {
        match self.fetch().await {
            Ok(catalog) => {
                let catalog = self.store(catalog).await;
                debug!(items = catalog.len(), "Menu catalog refreshed");
            }
            Err(e) => warn!(
                source = %self.source.describe(),
                error = %e,
                "Failed to refresh menu catalog"
            ),
        }
    }

    async fn fetch(&self) -> Result<MenuCatalog, CatalogError> {
        tokio::time::timeout(self.fetch_timeout, self.source.fetch_catalog())
            .await
            .map_err(|_| CatalogError::Timeout(self.fetch_timeout))?
    }

    async fn store(&self, catalog: MenuCatalog) -> Arc<MenuCatalog> {
        let catalog = Arc::new(catalog);
        self.cache
            .catalog
            .insert(CATALOG_KEY.to_string(), catalog.clone())
            .await;
        catalog
    }

    /// Per-guest price for an item, category given as free text
    pub async fn resolve_item_price(&self, item_name: &str, category: &str) -> Decimal {
        let catalog = self.current_catalog().await;
        calculators::resolve_item_price(&catalog, item_name, category)
    }

    /// Full package breakdown against the current catalog
    pub async fn calculate_package_pricing(
        &self,
        guest_count: i32,
        selections: &MenuSelections,
        event_type: &str,
    ) -> PricingBreakdown {
        if guest_count <= 0 {
            return calculators::calculate_package_pricing(
                guest_count,
                selections,
                event_type,
                &self.fallback,
            );
        }

        let catalog = self.current_catalog().await;
        calculators::calculate_package_pricing(guest_count, selections, event_type, &catalog)
    }

    /// Catalog items within a per-guest budget
    pub async fn recommended_items(
        &self,
        budget_per_guest: Decimal,
        category: Option<Category>,
    ) -> Vec<MenuItem> {
        let catalog = self.current_catalog().await;
        validation::recommended_items(&catalog, budget_per_guest, category)
    }

    /// Advisory checks on a selection
    pub async fn validate_selections(&self, selections: &MenuSelections) -> ValidationReport {
        let catalog = self.current_catalog().await;
        validation::validate_selections(&selections.normalize(), &catalog)
    }
}
