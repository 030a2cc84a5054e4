//! Menu catalog sources.
//!
//! The live catalog comes from the booking app's menu endpoint, which
//! answers `{ "success": bool, "menuItems": { "<category>": [MenuItem] } }`.
//! Every failure is reported as a [`CatalogError`]; callers decide whether to
//! fall back to the static table.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::models::{Category, MenuCatalog, MenuItem};
use super::rules::FALLBACK_MENU_ITEMS;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog endpoint returned status {0}")]
    Status(u16),

    #[error("Catalog endpoint reported failure")]
    Unsuccessful,

    #[error("Catalog response contained no menu items")]
    Empty,

    #[error("Invalid catalog response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Catalog fetch timed out after {0:?}")]
    Timeout(Duration),
}

/// Anything that can produce the current menu catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<MenuCatalog, CatalogError>;

    /// Short label for logs
    fn describe(&self) -> String;
}

/// Serves the built-in fallback table
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource;

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_catalog(&self) -> Result<MenuCatalog, CatalogError> {
        Ok(FALLBACK_MENU_ITEMS.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Fetches the catalog over HTTP with a bounded timeout
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<MenuCatalog, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_catalog_response(&body)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogResponse {
    success: bool,
    #[serde(default)]
    menu_items: BTreeMap<String, Vec<CatalogEntry>>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: i64,
    name: String,
    price: Decimal,
    #[serde(default)]
    description: Option<String>,
}

/// Parse a catalog endpoint body.
///
/// Items take the category of the key they are listed under. Keys that are
/// not menu categories are skipped.
pub fn parse_catalog_response(body: &[u8]) -> Result<MenuCatalog, CatalogError> {
    let response: CatalogResponse = serde_json::from_slice(body)?;
    if !response.success {
        return Err(CatalogError::Unsuccessful);
    }

    let mut items: BTreeMap<Category, Vec<MenuItem>> = BTreeMap::new();
    for (key, entries) in response.menu_items {
        let Ok(category) = key.parse::<Category>() else {
            tracing::debug!(key = %key, "Skipping unknown catalog category");
            continue;
        };
        items.entry(category).or_default().extend(entries.into_iter().map(|e| MenuItem {
            id: e.id,
            name: e.name,
            category,
            price: e.price,
            description: e.description,
        }));
    }

    let catalog = MenuCatalog::new(items);
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(catalog)
}
