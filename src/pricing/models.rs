//! Menu catalog models and the pricing breakdown.
//!
//! These are plain values: the catalog is read-only once loaded and a
//! breakdown is computed, returned and discarded.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category. Main courses are beef through vegetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beef,
    Pork,
    Chicken,
    Seafood,
    Vegetables,
    Pasta,
    Dessert,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Beef,
        Category::Pork,
        Category::Chicken,
        Category::Seafood,
        Category::Vegetables,
        Category::Pasta,
        Category::Dessert,
        Category::Beverage,
    ];

    pub const MAIN_COURSES: [Category; 5] = [
        Category::Beef,
        Category::Pork,
        Category::Chicken,
        Category::Seafood,
        Category::Vegetables,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beef => "beef",
            Category::Pork => "pork",
            Category::Chicken => "chicken",
            Category::Seafood => "seafood",
            Category::Vegetables => "vegetables",
            Category::Pasta => "pasta",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }

    pub fn is_main_course(&self) -> bool {
        Self::MAIN_COURSES.contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for category names outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or(UnknownCategory(s.to_string()))
    }
}

/// A catalog entry, priced per guest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Menu catalog grouped by category, items kept in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    items: BTreeMap<Category, Vec<MenuItem>>,
}

impl MenuCatalog {
    pub fn new(items: BTreeMap<Category, Vec<MenuItem>>) -> Self {
        Self { items }
    }

    /// Items in one category (empty if the catalog has none)
    pub fn items_in(&self, category: Category) -> &[MenuItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All items, grouped by category order
    pub fn all_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.values().flatten()
    }

    /// All main-course items (beef, pork, chicken, seafood, vegetables)
    pub fn main_courses(&self) -> impl Iterator<Item = &MenuItem> {
        Category::MAIN_COURSES
            .into_iter()
            .flat_map(move |c| self.items_in(c).iter())
    }

    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One priced row of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub category: Category,
    pub price_per_guest: Decimal,
    pub guest_count: i32,
    pub total: Decimal,
}

/// Result of a package pricing calculation.
///
/// `total` and `total_amount` always hold the same value; both are kept
/// because front-end callers read either name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub main_courses_total: Decimal,
    pub pasta_total: Decimal,
    pub dessert_total: Decimal,
    pub beverage_total: Decimal,
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
    pub total_amount: Decimal,
    pub price_per_guest: Decimal,
    pub down_payment: Decimal,
    pub guest_count: i32,
    pub menu_items: Vec<LineItem>,
    pub is_wedding_package: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wedding_package_price: Option<Decimal>,
}

impl PricingBreakdown {
    /// Degenerate breakdown returned for invalid input
    pub fn zero() -> Self {
        Self {
            main_courses_total: Decimal::ZERO,
            pasta_total: Decimal::ZERO,
            dessert_total: Decimal::ZERO,
            beverage_total: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            total: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            price_per_guest: Decimal::ZERO,
            down_payment: Decimal::ZERO,
            guest_count: 0,
            menu_items: vec![],
            is_wedding_package: false,
            wedding_package_price: None,
        }
    }
}
