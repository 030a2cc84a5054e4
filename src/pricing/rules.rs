//! Static pricing tables.
//!
//! Service fees and wedding packages are flat amounts keyed by guest-count
//! bracket. Category prices are the per-guest defaults used when an item
//! name cannot be matched against the catalog.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{Category, MenuCatalog, MenuItem};

/// Flat service fee for non-wedding events, by guest count
pub const SERVICE_FEES: [(i32, Decimal); 5] = [
    (50, dec!(11500)),
    (80, dec!(10400)),
    (100, dec!(11000)),
    (150, dec!(16500)),
    (200, dec!(22000)),
];

/// Flat wedding package price, by guest count
pub const WEDDING_PACKAGES: [(i32, Decimal); 6] = [
    (50, dec!(56500)),
    (80, dec!(60400)),
    (100, dec!(63000)),
    (150, dec!(74500)),
    (200, dec!(86000)),
    (300, dec!(109000)),
];

/// Service fee charged when the guest count has no bracket
pub const DEFAULT_SERVICE_FEE: Decimal = dec!(11500);

/// Per-guest price for a category nobody recognizes
pub const DEFAULT_CATEGORY_PRICE: Decimal = dec!(50);

/// Share of the total due up front
pub const DOWN_PAYMENT_RATE: Decimal = dec!(0.5);

/// Default per-guest price for each category
pub const CATEGORY_PRICING: [(Category, Decimal); 8] = [
    (Category::Beef, dec!(70)),
    (Category::Pork, dec!(60)),
    (Category::Chicken, dec!(60)),
    (Category::Seafood, dec!(65)),
    (Category::Vegetables, dec!(50)),
    (Category::Pasta, dec!(40)),
    (Category::Dessert, dec!(25)),
    (Category::Beverage, dec!(25)),
];

/// Flat service fee for a guest-count bracket, if tabulated
pub fn service_fee(guest_count: i32) -> Option<Decimal> {
    lookup(&SERVICE_FEES, guest_count)
}

/// Wedding package price for a guest-count bracket, if tabulated
pub fn wedding_package(guest_count: i32) -> Option<Decimal> {
    lookup(&WEDDING_PACKAGES, guest_count)
}

/// Service fee for an event, applying the bracket defaults.
///
/// Weddings without a bracket get no fee; everything else falls back to
/// [`DEFAULT_SERVICE_FEE`].
pub fn resolve_service_fee(guest_count: i32, is_wedding: bool) -> Decimal {
    if is_wedding {
        wedding_package(guest_count).unwrap_or(Decimal::ZERO)
    } else {
        service_fee(guest_count).unwrap_or(DEFAULT_SERVICE_FEE)
    }
}

/// Default per-guest price for a category
pub fn category_price(category: Category) -> Decimal {
    CATEGORY_PRICING
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_CATEGORY_PRICE)
}

fn lookup(table: &[(i32, Decimal)], guest_count: i32) -> Option<Decimal> {
    table
        .iter()
        .find(|(bracket, _)| *bracket == guest_count)
        .map(|(_, amount)| *amount)
}

const FALLBACK_ROWS: [(i64, &str, Category, Decimal); 32] = [
    (1, "Beef Broccoli", Category::Beef, dec!(70)),
    (2, "Beef Caldereta", Category::Beef, dec!(70)),
    (3, "Beef Mechado", Category::Beef, dec!(70)),
    (4, "Kare-kare Oxtail", Category::Beef, dec!(70)),
    (5, "Roast Beef with Mushroom Gravy", Category::Beef, dec!(75)),
    (6, "Lechon Kawali", Category::Pork, dec!(60)),
    (7, "Pork Menudo", Category::Pork, dec!(60)),
    (8, "Sweet and Sour Pork", Category::Pork, dec!(60)),
    (9, "Pork Hamonado", Category::Pork, dec!(65)),
    (10, "Fried Chicken", Category::Chicken, dec!(60)),
    (11, "Chicken Cordon Bleu", Category::Chicken, dec!(65)),
    (12, "Chicken Teriyaki", Category::Chicken, dec!(60)),
    (13, "Buttered Chicken", Category::Chicken, dec!(60)),
    (14, "Sweet and Sour Fish Fillet", Category::Seafood, dec!(65)),
    (15, "Camaron Rebosado", Category::Seafood, dec!(70)),
    (16, "Fish Fillet in Tartar Sauce", Category::Seafood, dec!(65)),
    (17, "Buttered Shrimp", Category::Seafood, dec!(75)),
    (18, "Chopsuey", Category::Vegetables, dec!(50)),
    (19, "Lumpiang Sariwa", Category::Vegetables, dec!(50)),
    (20, "Buttered Mixed Vegetables", Category::Vegetables, dec!(50)),
    (21, "Spaghetti", Category::Pasta, dec!(40)),
    (22, "Carbonara", Category::Pasta, dec!(45)),
    (23, "Pancit Canton", Category::Pasta, dec!(40)),
    (24, "Baked Macaroni", Category::Pasta, dec!(45)),
    (25, "Buko Salad", Category::Dessert, dec!(25)),
    (26, "Leche Flan", Category::Dessert, dec!(30)),
    (27, "Fruit Salad", Category::Dessert, dec!(25)),
    (28, "Buko Pandan", Category::Dessert, dec!(25)),
    (29, "Soda", Category::Beverage, dec!(25)),
    (30, "Iced Tea", Category::Beverage, dec!(25)),
    (31, "Red Iced Tea", Category::Beverage, dec!(25)),
    (32, "Four Seasons Juice", Category::Beverage, dec!(30)),
];

/// Catalog used whenever the live menu catalog is unavailable
pub static FALLBACK_MENU_ITEMS: LazyLock<MenuCatalog> = LazyLock::new(|| {
    let mut items: BTreeMap<Category, Vec<MenuItem>> = BTreeMap::new();
    for (id, name, category, price) in FALLBACK_ROWS {
        items.entry(category).or_default().push(MenuItem {
            id,
            name: name.to_string(),
            category,
            price,
            description: None,
        });
    }
    MenuCatalog::new(items)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_fee_brackets() {
        assert_eq!(service_fee(50), Some(dec!(11500)));
        assert_eq!(service_fee(80), Some(dec!(10400)));
        assert_eq!(service_fee(100), Some(dec!(11000)));
        assert_eq!(service_fee(150), Some(dec!(16500)));
        assert_eq!(service_fee(200), Some(dec!(22000)));
        assert_eq!(service_fee(300), None);
    }

    #[test]
    fn test_resolve_service_fee_defaults() {
        for (guests, fee) in SERVICE_FEES {
            assert_eq!(resolve_service_fee(guests, false), fee);
        }
        for (guests, price) in WEDDING_PACKAGES {
            assert_eq!(resolve_service_fee(guests, true), price);
        }

        assert_eq!(resolve_service_fee(999, false), dec!(11500));
        assert_eq!(resolve_service_fee(999, true), dec!(0));
        assert_eq!(resolve_service_fee(75, true), dec!(0));
    }

    #[test]
    fn test_category_price_table() {
        assert_eq!(category_price(Category::Beef), dec!(70));
        assert_eq!(category_price(Category::Chicken), dec!(60));
        assert_eq!(category_price(Category::Pasta), dec!(40));
        assert_eq!(category_price(Category::Beverage), dec!(25));
    }

    #[test]
    fn test_fallback_catalog_covers_every_category() {
        for category in Category::ALL {
            let items = FALLBACK_MENU_ITEMS.items_in(category);
            assert!(!items.is_empty(), "no fallback items for {category}");
            assert!(items.iter().all(|i| i.category == category));
        }
        assert_eq!(FALLBACK_MENU_ITEMS.len(), FALLBACK_ROWS.len());
    }
}
