//! Pricing engine module for catering packages.
//!
//! Computes menu costs, service fees and wedding package pricing from guest
//! count and menu selections. The booking front end calls this over
//! HTTP/JSON; the calculators are also usable directly as a library.

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod rules;
pub mod selections;
pub mod services;
pub mod summary;
pub mod validation;

// Re-export commonly used items
pub use calculators::{
    calculate_package_pricing, infer_category, resolve_item_price, round_money, PricingError,
};
pub use catalog::{CatalogError, CatalogSource, HttpCatalogSource, StaticCatalogSource};
pub use models::{Category, LineItem, MenuCatalog, MenuItem, PricingBreakdown};
pub use routes::router;
pub use rules::FALLBACK_MENU_ITEMS;
pub use selections::{MenuField, MenuSelections};
pub use services::CatalogService;
pub use summary::{format_peso, render_summary, PricingSummary};
pub use validation::{recommended_items, validate_selections, ValidationReport};
