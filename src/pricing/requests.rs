//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::models::Category;
use super::selections::{null_as_default, MenuSelections};

/// Request to price a package (also used for the text summary)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePricingRequest {
    #[serde(default, deserialize_with = "lenient_count")]
    pub guest_count: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub menu_selections: MenuSelections,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,
}

/// Accept a count as a JSON integer, an integral float, or a numeric
/// string. Anything else reads as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(count)
}

impl CalculatePricingRequest {
    /// Guest count for the calculators; missing or out-of-range is 0
    pub fn guest_count(&self) -> i32 {
        self.guest_count
            .and_then(|n| i32::try_from(n).ok())
            .unwrap_or(0)
    }
}

/// Request to resolve one item's per-guest price
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPriceRequest {
    pub item_name: String,
    pub category: String,
}

/// Request for items within a per-guest budget
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    pub budget_per_guest: Decimal,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Request to check a menu selection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSelectionsRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub menu_selections: MenuSelections,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_guest_count_defaults() {
        let req: CalculatePricingRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.guest_count(), 0);
        assert_eq!(req.event_type, "");

        let req: CalculatePricingRequest =
            serde_json::from_value(json!({"guestCount": 10_000_000_000i64})).unwrap();
        assert_eq!(req.guest_count(), 0);

        let req: CalculatePricingRequest =
            serde_json::from_value(json!({"guestCount": 150, "eventType": "debut"})).unwrap();
        assert_eq!(req.guest_count(), 150);
        assert_eq!(req.event_type, "debut");
    }

    #[test]
    fn test_guest_count_lenient_shapes() {
        let count = |v: Value| {
            serde_json::from_value::<CalculatePricingRequest>(json!({ "guestCount": v }))
                .unwrap()
                .guest_count()
        };

        assert_eq!(count(json!("50")), 50);
        assert_eq!(count(json!(" 80 ")), 80);
        assert_eq!(count(json!(100.0)), 100);
        assert_eq!(count(json!(50.5)), 0);
        assert_eq!(count(json!("fifty")), 0);
        assert_eq!(count(json!(null)), 0);
        assert_eq!(count(json!([50])), 0);
        assert_eq!(count(json!(-20)), -20);
    }

    #[test]
    fn test_null_selections_and_event_type() {
        let req: CalculatePricingRequest = serde_json::from_value(json!({
            "guestCount": 50,
            "menuSelections": null,
            "eventType": null
        }))
        .unwrap();
        assert_eq!(req.menu_selections, MenuSelections::default());
        assert_eq!(req.event_type, "");
    }
}
