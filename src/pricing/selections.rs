//! Menu selection input shapes and their normalization.
//!
//! Booking forms submit each menu field in whatever shape they happen to
//! hold: a single name, a JSON-encoded array, a comma-separated list, or an
//! array of names or item objects. [`MenuField`] captures all of them and
//! [`MenuField::names`] turns any variant into an ordered list of names.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One menu field as submitted by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuField {
    Text(String),
    List(Vec<Value>),
}

impl Default for MenuField {
    fn default() -> Self {
        MenuField::List(vec![])
    }
}

impl From<&str> for MenuField {
    fn from(value: &str) -> Self {
        MenuField::Text(value.to_string())
    }
}

impl From<Vec<&str>> for MenuField {
    fn from(values: Vec<&str>) -> Self {
        MenuField::List(values.into_iter().map(Value::from).collect())
    }
}

impl MenuField {
    /// Flatten into item names, trimmed, empty entries dropped
    pub fn names(&self) -> Vec<String> {
        match self {
            MenuField::Text(text) => names_from_text(text),
            MenuField::List(values) => values.iter().filter_map(name_from_value).collect(),
        }
    }
}

fn names_from_text(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        if let Ok(Value::Array(values)) = serde_json::from_str::<Value>(trimmed) {
            return values.iter().filter_map(name_from_value).collect();
        }
    }

    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Deserialize `null` as the type's default instead of rejecting it
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn name_from_value(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("name").and_then(Value::as_str)?,
        _ => return None,
    };
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Raw menu selections from a booking form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSelections {
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_courses: MenuField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pasta: MenuField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dessert: MenuField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub beverage: MenuField,
}

impl MenuSelections {
    /// Normalize every field once
    pub fn normalize(&self) -> NormalizedSelections {
        NormalizedSelections {
            main_courses: self.main_courses.names(),
            pasta: self.pasta.names(),
            dessert: self.dessert.names(),
            beverage: self.beverage.names(),
        }
    }
}

/// Menu selections reduced to ordered item names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSelections {
    pub main_courses: Vec<String>,
    pub pasta: Vec<String>,
    pub dessert: Vec<String>,
    pub beverage: Vec<String>,
}

impl NormalizedSelections {
    pub fn item_count(&self) -> usize {
        self.main_courses.len() + self.pasta.len() + self.dessert.len() + self.beverage.len()
    }
}
