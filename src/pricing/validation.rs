//! Advisory helpers: budget recommendations and selection checks.
//!
//! Nothing here blocks a booking. Callers decide whether to surface the
//! warnings.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::main_course_category;
use super::models::{Category, MenuCatalog, MenuItem};
use super::selections::NormalizedSelections;

/// Catalog items priced at or under a per-guest budget, dearest first.
///
/// Items with the same price keep catalog order.
pub fn recommended_items(
    catalog: &MenuCatalog,
    budget_per_guest: Decimal,
    category: Option<Category>,
) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = catalog
        .all_items()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .filter(|item| item.price <= budget_per_guest)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.price.cmp(&a.price));
    items
}

/// Outcome of [`validate_selections`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Check a selection for obvious gaps.
///
/// Selecting nothing is an error. Missing main courses, or several items all
/// from one category, only warn.
pub fn validate_selections(
    selections: &NormalizedSelections,
    catalog: &MenuCatalog,
) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let item_count = selections.item_count();
    if item_count == 0 {
        errors.push("Please select at least one menu item".to_string());
    } else {
        if selections.main_courses.is_empty() {
            warnings.push("No main course selected".to_string());
        }

        let categories: BTreeSet<Category> = selections
            .main_courses
            .iter()
            .map(|name| main_course_category(catalog, name))
            .chain(selections.pasta.iter().map(|_| Category::Pasta))
            .chain(selections.dessert.iter().map(|_| Category::Dessert))
            .chain(selections.beverage.iter().map(|_| Category::Beverage))
            .collect();

        if item_count > 1 && categories.len() == 1 {
            if let Some(only) = categories.first() {
                warnings.push(format!(
                    "All selected items are {only}; consider adding variety"
                ));
            }
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
