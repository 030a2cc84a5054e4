//! Pricing API route handlers.
//!
//! All bodies are JSON. Calculation endpoints always answer 200 with a
//! breakdown; only unreadable requests produce errors.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::{MenuCatalog, PricingBreakdown};
use super::requests::{
    CalculatePricingRequest, ItemPriceRequest, RecommendationsRequest, ValidateSelectionsRequest,
};
use super::responses::{
    ItemPriceResponse, PricingRulesResponse, RecommendationsResponse, SummaryResponse,
    ValidationResponse,
};
use super::summary::render_summary;

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rules", get(rules))
        .route("/catalog", get(catalog))
        .route("/calculate", post(calculate))
        .route("/item-price", post(item_price))
        .route("/recommendations", post(recommendations))
        .route("/validate", post(validate))
        .route("/summary", post(summary))
}

async fn rules() -> Json<PricingRulesResponse> {
    Json(PricingRulesResponse::current())
}

async fn catalog(State(state): State<AppState>) -> Json<MenuCatalog> {
    let catalog = state.catalog.current_catalog().await;
    Json((*catalog).clone())
}

async fn calculate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculatePricingRequest>, JsonRejection>,
) -> Result<Json<PricingBreakdown>> {
    let Json(req) = payload?;
    let breakdown = price(&state, &req).await;
    Ok(Json(breakdown))
}

async fn summary(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculatePricingRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>> {
    let Json(req) = payload?;
    let breakdown = price(&state, &req).await;
    let summary = render_summary(&breakdown);
    Ok(Json(SummaryResponse { breakdown, summary }))
}

async fn price(state: &AppState, req: &CalculatePricingRequest) -> PricingBreakdown {
    tracing::debug!(
        guest_count = ?req.guest_count,
        event_type = %req.event_type,
        "Pricing request"
    );
    state
        .catalog
        .calculate_package_pricing(req.guest_count(), &req.menu_selections, &req.event_type)
        .await
}

async fn item_price(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ItemPriceRequest>, JsonRejection>,
) -> Result<Json<ItemPriceResponse>> {
    let Json(req) = payload?;
    let price = state
        .catalog
        .resolve_item_price(&req.item_name, &req.category)
        .await;

    Ok(Json(ItemPriceResponse {
        item_name: req.item_name,
        category: req.category,
        price,
    }))
}

async fn recommendations(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RecommendationsRequest>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>> {
    let Json(req) = payload?;
    if req.budget_per_guest < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "budgetPerGuest must not be negative".to_string(),
        ));
    }

    let items = state
        .catalog
        .recommended_items(req.budget_per_guest, req.category)
        .await;

    Ok(Json(RecommendationsResponse {
        budget_per_guest: req.budget_per_guest,
        items,
    }))
}

async fn validate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ValidateSelectionsRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>> {
    let Json(req) = payload?;
    let item_count = req.menu_selections.normalize().item_count();
    let report = state.catalog.validate_selections(&req.menu_selections).await;
    Ok(Json(ValidationResponse { report, item_count }))
}
