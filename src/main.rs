use std::sync::Arc;

use catering_pricing::cache::{start_cache_warmer, AppCache};
use catering_pricing::config::Config;
use catering_pricing::pricing::{
    CatalogService, CatalogSource, HttpCatalogSource, StaticCatalogSource,
};
use catering_pricing::{app, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catering_pricing=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    let source: Arc<dyn CatalogSource> = match &config.menu_catalog_url {
        Some(url) => Arc::new(HttpCatalogSource::new(url.clone(), config.catalog_timeout)?),
        None => {
            info!("MENU_CATALOG_URL not set, serving the static catalog");
            Arc::new(StaticCatalogSource)
        }
    };
    info!(source = %source.describe(), "Menu catalog source configured");

    let cache = AppCache::new(config.catalog_cache_ttl);
    let catalog = Arc::new(CatalogService::new(source, cache.clone(), config.catalog_timeout));

    tokio::spawn(start_cache_warmer(catalog.clone(), config.catalog_refresh));

    let router = app(AppState { catalog, cache });

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());
    axum::serve(listener, router).await?;

    Ok(())
}
