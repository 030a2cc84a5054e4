//! Core pricing calculation functions.
//!
//! Pure functions for package pricing - no network access. The live-catalog
//! variants in `services` load a catalog and then call into these, so both
//! call sites share the same matching rules and arithmetic.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::models::{Category, LineItem, MenuCatalog, MenuItem, PricingBreakdown};
use super::rules::{self, DEFAULT_CATEGORY_PRICE, DOWN_PAYMENT_RATE};
use super::selections::{MenuSelections, NormalizedSelections};

/// Event type that switches the service fee to the wedding package table
pub const WEDDING_EVENT: &str = "wedding";

/// Round to the given decimal places, halves away from zero.
///
/// Quotes shown to customers round .5 up, so this is not banker's rounding.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use catering_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(9500.5), 0), dec!(9501));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic failure inside a calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    Overflow { context: String },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::Overflow { context } => {
                write!(f, "Arithmetic overflow while computing {}", context)
            }
        }
    }
}

impl std::error::Error for PricingError {}

const CHICKEN_KEYWORDS: &[&str] = &["chicken", "manok"];
const PORK_KEYWORDS: &[&str] = &["pork", "lechon", "liempo", "baboy", "menudo", "hamonado"];
const SEAFOOD_KEYWORDS: &[&str] = &[
    "fish", "camaron", "shrimp", "prawn", "seafood", "squid", "calamares", "fillet",
];
const VEGETABLE_KEYWORDS: &[&str] = &[
    "vegetable", "veggie", "chopsuey", "lumpia", "gulay", "pinakbet",
];

/// Guess a main-course category from a dish name.
///
/// Keyword groups are checked in a fixed order: chicken, pork, seafood,
/// vegetables. Anything unmatched is beef. A name carrying keywords from two
/// groups lands in whichever group comes first, so "Chicken and Beef Stew"
/// is chicken.
pub fn infer_category(dish_name: &str) -> Category {
    let name = dish_name.to_lowercase();
    let groups = [
        (Category::Chicken, CHICKEN_KEYWORDS),
        (Category::Pork, PORK_KEYWORDS),
        (Category::Seafood, SEAFOOD_KEYWORDS),
        (Category::Vegetables, VEGETABLE_KEYWORDS),
    ];

    groups
        .into_iter()
        .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k)))
        .map(|(category, _)| category)
        .unwrap_or(Category::Beef)
}

/// Category for a selected main course.
///
/// A dish found by name among the catalog's main courses takes the category
/// the catalog gives it; only unknown names go through [`infer_category`].
pub fn main_course_category(catalog: &MenuCatalog, dish_name: &str) -> Category {
    let wanted = dish_name.trim().to_lowercase();
    catalog
        .main_courses()
        .find(|item| item.name.to_lowercase() == wanted)
        .map(|item| item.category)
        .unwrap_or_else(|| infer_category(dish_name))
}

/// Find the catalog entry an item name refers to within one category.
///
/// Exact case-insensitive match wins; otherwise the first entry whose name
/// contains, or is contained in, the requested name.
pub fn match_menu_item<'a>(
    catalog: &'a MenuCatalog,
    item_name: &str,
    category: Category,
) -> Option<&'a MenuItem> {
    let wanted = item_name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    let items = catalog.items_in(category);

    items
        .iter()
        .find(|item| item.name.to_lowercase() == wanted)
        .or_else(|| {
            items.iter().find(|item| {
                let name = item.name.to_lowercase();
                name.contains(&wanted) || wanted.contains(&name)
            })
        })
}

/// Per-guest price for an item in a known category
pub fn resolve_price(catalog: &MenuCatalog, item_name: &str, category: Category) -> Decimal {
    match match_menu_item(catalog, item_name, category) {
        Some(item) => item.price,
        None => {
            debug!(
                item = %item_name,
                category = %category,
                "No catalog match, using category price"
            );
            rules::category_price(category)
        }
    }
}

/// Per-guest price for an item, with the category given as free text.
///
/// An unrecognized category prices at the flat default.
pub fn resolve_item_price(catalog: &MenuCatalog, item_name: &str, category: &str) -> Decimal {
    match category.parse::<Category>() {
        Ok(category) => resolve_price(catalog, item_name, category),
        Err(_) => DEFAULT_CATEGORY_PRICE,
    }
}

/// Whether an event type is priced from the wedding package table
pub fn is_wedding(event_type: &str) -> bool {
    event_type == WEDDING_EVENT
}

/// Calculate a full package breakdown against an already-loaded catalog.
///
/// Never fails: a non-positive guest count yields [`PricingBreakdown::zero`],
/// and an arithmetic failure yields [`fallback_breakdown`]. Backdrop and
/// add-on charges are not included; callers add them afterwards.
pub fn calculate_package_pricing(
    guest_count: i32,
    selections: &MenuSelections,
    event_type: &str,
    catalog: &MenuCatalog,
) -> PricingBreakdown {
    if guest_count <= 0 {
        warn!(guest_count, "Invalid guest count, returning zero breakdown");
        return PricingBreakdown::zero();
    }

    let normalized = selections.normalize();
    match try_calculate(guest_count, &normalized, event_type, catalog) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            warn!(guest_count, event_type, error = %e, "Pricing failed, using fee-only breakdown");
            fallback_breakdown(guest_count, event_type)
        }
    }
}

/// Breakdown carrying only the guest-count based fee, no menu charges
pub fn fallback_breakdown(guest_count: i32, event_type: &str) -> PricingBreakdown {
    if guest_count <= 0 {
        return PricingBreakdown::zero();
    }

    let wedding = is_wedding(event_type);
    let fee = rules::resolve_service_fee(guest_count, wedding);

    PricingBreakdown {
        service_fee: fee,
        total: fee,
        total_amount: fee,
        price_per_guest: fee / Decimal::from(guest_count),
        down_payment: round_money(fee * DOWN_PAYMENT_RATE, 0),
        guest_count,
        is_wedding_package: wedding,
        wedding_package_price: if wedding { Some(fee) } else { None },
        ..PricingBreakdown::zero()
    }
}

/// Price every name in one field and return (field total, rows)
fn price_field<F>(
    names: &[String],
    guest_count: i32,
    catalog: &MenuCatalog,
    category_of: F,
) -> Result<(Decimal, Vec<LineItem>), PricingError>
where
    F: Fn(&str) -> Category,
{
    let mut total = Decimal::ZERO;
    let mut rows = Vec::with_capacity(names.len());

    for name in names {
        let category = category_of(name.as_str());
        let price = resolve_price(catalog, name, category);
        let row_total = line_total(price, guest_count, name)?;
        total = total.checked_add(row_total).ok_or_else(|| overflow(category.as_str()))?;
        rows.push(LineItem {
            name: name.clone(),
            category,
            price_per_guest: price,
            guest_count,
            total: row_total,
        });
    }

    Ok((total, rows))
}

fn try_calculate(
    guest_count: i32,
    selections: &NormalizedSelections,
    event_type: &str,
    catalog: &MenuCatalog,
) -> Result<PricingBreakdown, PricingError> {
    let (main_courses_total, mut menu_items) =
        price_field(&selections.main_courses, guest_count, catalog, |name| {
            main_course_category(catalog, name)
        })?;
    let (pasta_total, pasta_rows) =
        price_field(&selections.pasta, guest_count, catalog, |_| Category::Pasta)?;
    let (dessert_total, dessert_rows) =
        price_field(&selections.dessert, guest_count, catalog, |_| Category::Dessert)?;
    let (beverage_total, beverage_rows) =
        price_field(&selections.beverage, guest_count, catalog, |_| Category::Beverage)?;

    menu_items.extend(pasta_rows);
    menu_items.extend(dessert_rows);
    menu_items.extend(beverage_rows);

    let subtotal = [pasta_total, dessert_total, beverage_total]
        .into_iter()
        .try_fold(main_courses_total, |acc, x| acc.checked_add(x))
        .ok_or_else(|| overflow("menu subtotal"))?;

    let wedding = is_wedding(event_type);
    let service_fee = rules::resolve_service_fee(guest_count, wedding);

    // Weddings list the whole main-course catalog, not the selection.
    if wedding {
        menu_items = catalog
            .main_courses()
            .map(|item| -> Result<LineItem, PricingError> {
                Ok(LineItem {
                    name: item.name.clone(),
                    category: item.category,
                    price_per_guest: item.price,
                    guest_count,
                    total: line_total(item.price, guest_count, &item.name)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
    }

    let total_amount = subtotal
        .checked_add(service_fee)
        .ok_or_else(|| overflow("total amount"))?;
    let price_per_guest = total_amount
        .checked_div(Decimal::from(guest_count))
        .ok_or_else(|| overflow("price per guest"))?;
    let down_payment = round_money(
        total_amount
            .checked_mul(DOWN_PAYMENT_RATE)
            .ok_or_else(|| overflow("down payment"))?,
        0,
    );

    debug!(
        guest_count,
        event_type,
        %subtotal,
        %service_fee,
        %total_amount,
        "Package priced"
    );

    Ok(PricingBreakdown {
        main_courses_total,
        pasta_total,
        dessert_total,
        beverage_total,
        subtotal,
        service_fee,
        total: total_amount,
        total_amount,
        price_per_guest,
        down_payment,
        guest_count,
        menu_items,
        is_wedding_package: wedding,
        wedding_package_price: if wedding { Some(service_fee) } else { None },
    })
}

fn line_total(price: Decimal, guest_count: i32, name: &str) -> Result<Decimal, PricingError> {
    price
        .checked_mul(Decimal::from(guest_count))
        .ok_or_else(|| overflow(name))
}

fn overflow(context: &str) -> PricingError {
    PricingError::Overflow {
        context: context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::rules::FALLBACK_MENU_ITEMS;
    use crate::pricing::selections::MenuField;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn selections(main: Vec<&str>, pasta: &str, dessert: &str, beverage: &str) -> MenuSelections {
        MenuSelections {
            main_courses: MenuField::from(main),
            pasta: MenuField::from(pasta),
            dessert: MenuField::from(dessert),
            beverage: MenuField::from(beverage),
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_halves_away_from_zero() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(3));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
        assert_eq!(round_money(dec!(2.45), 1), dec!(2.5));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(0), 2), dec!(0));
    }

    // ==================== category inference tests ====================

    #[test]
    fn test_infer_category_keyword_groups() {
        assert_eq!(infer_category("Garlic Chicken"), Category::Chicken);
        assert_eq!(infer_category("Lechon Kawali"), Category::Pork);
        assert_eq!(infer_category("Camaron Rebosado"), Category::Seafood);
        assert_eq!(infer_category("Grilled Fish"), Category::Seafood);
        assert_eq!(infer_category("Pinakbet"), Category::Vegetables);
        assert_eq!(infer_category("Kare-kare Oxtail"), Category::Beef);
        assert_eq!(infer_category("Mystery Dish"), Category::Beef);
    }

    #[test]
    fn test_infer_category_first_group_wins() {
        assert_eq!(infer_category("Chicken and Beef Stew"), Category::Chicken);
        assert_eq!(infer_category("Pork and Shrimp Siomai"), Category::Pork);
        assert_eq!(infer_category("Fish with Vegetables"), Category::Seafood);
    }

    #[test]
    fn test_main_course_category_prefers_catalog() {
        let mut items = BTreeMap::new();
        items.insert(
            Category::Vegetables,
            vec![MenuItem {
                id: 1,
                name: "Chicken-less Adobo".to_string(),
                category: Category::Vegetables,
                price: dec!(45),
                description: None,
            }],
        );
        let catalog = MenuCatalog::new(items);

        assert_eq!(main_course_category(&catalog, "chicken-less adobo"), Category::Vegetables);
        assert_eq!(main_course_category(&catalog, "Chicken Adobo"), Category::Chicken);
    }

    // ==================== price resolution tests ====================

    #[test]
    fn test_resolve_price_exact_match() {
        let catalog = &*FALLBACK_MENU_ITEMS;
        assert_eq!(resolve_price(catalog, "fried chicken", Category::Chicken), dec!(60));
        assert_eq!(resolve_price(catalog, "LECHE FLAN", Category::Dessert), dec!(30));
    }

    #[test]
    fn test_resolve_price_substring_match() {
        let catalog = &*FALLBACK_MENU_ITEMS;
        // Longer request containing a catalog name
        assert_eq!(resolve_price(catalog, "Beef Kare-Kare Oxtail", Category::Beef), dec!(70));
        // Shorter request contained in a catalog name
        assert_eq!(resolve_price(catalog, "Cordon Bleu", Category::Chicken), dec!(65));
    }

    #[test]
    fn test_exact_match_beats_earlier_substring_match() {
        let catalog = &*FALLBACK_MENU_ITEMS;
        let item = match_menu_item(catalog, "Red Iced Tea", Category::Beverage).unwrap();
        assert_eq!(item.name, "Red Iced Tea");
    }

    #[test]
    fn test_resolve_price_falls_back_to_category() {
        let catalog = &*FALLBACK_MENU_ITEMS;
        assert_eq!(resolve_price(catalog, "Wagyu Tartare", Category::Beef), dec!(70));
        assert_eq!(resolve_price(catalog, "Halo-halo", Category::Dessert), dec!(25));
        assert_eq!(resolve_price(catalog, "", Category::Pasta), dec!(40));
    }

    #[test]
    fn test_resolve_item_price_unknown_category() {
        let catalog = &*FALLBACK_MENU_ITEMS;
        assert_eq!(resolve_item_price(catalog, "Soda", "beverage"), dec!(25));
        assert_eq!(resolve_item_price(catalog, "Soda", "appetizer"), dec!(50));
    }

    // ==================== package pricing tests ====================

    #[test]
    fn test_corporate_package() {
        let breakdown = calculate_package_pricing(
            50,
            &selections(vec!["Fried Chicken"], "Spaghetti", "Buko Salad", "Soda"),
            "corporate",
            &FALLBACK_MENU_ITEMS,
        );

        assert_eq!(breakdown.main_courses_total, dec!(3000));
        assert_eq!(breakdown.pasta_total, dec!(2000));
        assert_eq!(breakdown.dessert_total, dec!(1250));
        assert_eq!(breakdown.beverage_total, dec!(1250));
        assert_eq!(breakdown.subtotal, dec!(7500));
        assert_eq!(breakdown.service_fee, dec!(11500));
        assert_eq!(breakdown.total_amount, dec!(19000));
        assert_eq!(breakdown.total, dec!(19000));
        assert_eq!(breakdown.price_per_guest, dec!(380));
        assert_eq!(breakdown.down_payment, dec!(9500));
        assert_eq!(breakdown.menu_items.len(), 4);
        assert!(!breakdown.is_wedding_package);
        assert_eq!(breakdown.wedding_package_price, None);
    }

    #[test]
    fn test_line_items_follow_field_order() {
        let breakdown = calculate_package_pricing(
            80,
            &selections(vec!["Pork Menudo", "Chopsuey"], "Carbonara", "Leche Flan", "Iced Tea"),
            "birthday",
            &FALLBACK_MENU_ITEMS,
        );

        let names: Vec<_> = breakdown.menu_items.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Pork Menudo", "Chopsuey", "Carbonara", "Leche Flan", "Iced Tea"]);
        assert_eq!(breakdown.menu_items[1].category, Category::Vegetables);
        assert_eq!(breakdown.menu_items[2].total, dec!(3600));
        assert_eq!(breakdown.service_fee, dec!(10400));
    }

    #[test]
    fn test_wedding_package_lists_full_main_course_catalog() {
        let breakdown = calculate_package_pricing(
            100,
            &selections(vec!["Fried Chicken"], "Spaghetti", "", ""),
            "wedding",
            &FALLBACK_MENU_ITEMS,
        );

        assert_eq!(breakdown.service_fee, dec!(63000));
        assert_eq!(breakdown.wedding_package_price, Some(dec!(63000)));
        assert!(breakdown.is_wedding_package);
        assert_eq!(breakdown.subtotal, dec!(10000));
        assert_eq!(breakdown.total_amount, dec!(73000));
        assert_eq!(breakdown.menu_items.len(), FALLBACK_MENU_ITEMS.main_courses().count());
        assert!(breakdown.menu_items.iter().all(|l| l.category.is_main_course()));
    }

    #[test]
    fn test_wedding_without_bracket_has_no_fee() {
        let breakdown = calculate_package_pricing(
            120,
            &selections(vec![], "Spaghetti", "", ""),
            "wedding",
            &FALLBACK_MENU_ITEMS,
        );
        assert_eq!(breakdown.service_fee, dec!(0));
        assert_eq!(breakdown.total_amount, dec!(4800));
    }

    #[test]
    fn test_unknown_bracket_uses_default_fee() {
        let breakdown = calculate_package_pricing(
            999,
            &MenuSelections::default(),
            "corporate",
            &FALLBACK_MENU_ITEMS,
        );
        assert_eq!(breakdown.service_fee, dec!(11500));
        assert_eq!(breakdown.subtotal, dec!(0));
        assert_eq!(breakdown.total_amount, dec!(11500));
        assert_eq!(breakdown.down_payment, dec!(5750));
    }

    #[test]
    fn test_event_type_match_is_exact() {
        let breakdown = calculate_package_pricing(
            100,
            &MenuSelections::default(),
            "Wedding",
            &FALLBACK_MENU_ITEMS,
        );
        assert!(!breakdown.is_wedding_package);
        assert_eq!(breakdown.service_fee, dec!(11000));
    }

    #[test]
    fn test_invalid_guest_count_returns_zero_breakdown() {
        let sel = selections(vec!["Fried Chicken"], "Spaghetti", "", "");
        assert_eq!(
            calculate_package_pricing(0, &sel, "corporate", &FALLBACK_MENU_ITEMS),
            PricingBreakdown::zero()
        );
        assert_eq!(
            calculate_package_pricing(-5, &sel, "wedding", &FALLBACK_MENU_ITEMS),
            PricingBreakdown::zero()
        );
    }

    #[test]
    fn test_down_payment_rounds_half_up() {
        // 51 guests * 25 = 1275, + 11500 = 12775, half = 6387.5
        let breakdown = calculate_package_pricing(
            51,
            &selections(vec![], "", "", "Soda"),
            "corporate",
            &FALLBACK_MENU_ITEMS,
        );
        assert_eq!(breakdown.total_amount, dec!(12775));
        assert_eq!(breakdown.down_payment, dec!(6388));
    }

    #[test]
    fn test_overflow_degrades_to_fee_only_breakdown() {
        let mut items = BTreeMap::new();
        items.insert(
            Category::Pasta,
            vec![MenuItem {
                id: 1,
                name: "Gold Leaf Lasagna".to_string(),
                category: Category::Pasta,
                price: Decimal::MAX,
                description: None,
            }],
        );
        let catalog = MenuCatalog::new(items);

        let breakdown = calculate_package_pricing(
            50,
            &selections(vec![], "Gold Leaf Lasagna", "", ""),
            "corporate",
            &catalog,
        );

        assert_eq!(breakdown, fallback_breakdown(50, "corporate"));
        assert_eq!(breakdown.subtotal, dec!(0));
        assert_eq!(breakdown.total_amount, dec!(11500));
        assert_eq!(breakdown.price_per_guest, dec!(230));
    }

    #[test]
    fn test_fallback_breakdown_wedding() {
        let breakdown = fallback_breakdown(200, "wedding");
        assert_eq!(breakdown.service_fee, dec!(86000));
        assert_eq!(breakdown.down_payment, dec!(43000));
        assert!(breakdown.is_wedding_package);
        assert_eq!(fallback_breakdown(0, "wedding"), PricingBreakdown::zero());
    }
}
