//! Catering package pricing service.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::cache::AppCache;
use crate::error::AppError;
use crate::pricing::CatalogService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub cache: AppCache,
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/pricing", pricing::router())
        .route("/api/cache/invalidate", post(invalidate_cache))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "cache": state.cache.stats(),
    }))
}

async fn invalidate_cache(State(state): State<AppState>) -> Json<serde_json::Value> {
    state.cache.invalidate_all();
    Json(json!({ "invalidated": true }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}
