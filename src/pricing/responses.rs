//! Response DTOs for pricing API endpoints.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{Category, MenuItem, PricingBreakdown};
use super::rules::{
    CATEGORY_PRICING, DEFAULT_CATEGORY_PRICE, DEFAULT_SERVICE_FEE, SERVICE_FEES, WEDDING_PACKAGES,
};
use super::validation::ValidationReport;

/// Response for item price resolution
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceResponse {
    pub item_name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

/// Response for the text summary endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub breakdown: PricingBreakdown,
    pub summary: String,
}

/// Response for budget recommendations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub budget_per_guest: Decimal,
    pub items: Vec<MenuItem>,
}

/// Response for selection validation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    #[serde(flatten)]
    pub report: ValidationReport,
    pub item_count: usize,
}

/// The static pricing tables, keyed by guest count as strings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRulesResponse {
    pub service_fees: BTreeMap<String, Decimal>,
    pub wedding_packages: BTreeMap<String, Decimal>,
    pub category_pricing: BTreeMap<Category, Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub default_service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub default_category_price: Decimal,
}

impl PricingRulesResponse {
    pub fn current() -> Self {
        Self {
            service_fees: by_guest_count(&SERVICE_FEES),
            wedding_packages: by_guest_count(&WEDDING_PACKAGES),
            category_pricing: CATEGORY_PRICING.into_iter().collect(),
            default_service_fee: DEFAULT_SERVICE_FEE,
            default_category_price: DEFAULT_CATEGORY_PRICE,
        }
    }
}

fn by_guest_count(table: &[(i32, Decimal)]) -> BTreeMap<String, Decimal> {
    table
        .iter()
        .map(|(guests, amount)| (guests.to_string(), *amount))
        .collect()
}

/// Generic error response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}
