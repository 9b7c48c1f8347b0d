//! Wire DTOs for the `/api/v1` surface.
//!
//! DESIGN
//! ======
//! Every endpoint answers with the same envelope `{ status, message?, data? }`;
//! entity payloads sit under `data`. Field names are snake_case on the wire
//! and mapped through serde so the Rust side stays idiomatic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Envelope status discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Response envelope shared by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Per-field error messages from a failed submit, if the server sent a
    /// `{ field: message }` object under `data`.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        let Some(map) = self.data.as_ref().and_then(serde_json::Value::as_object) else {
            return Vec::new();
        };
        map.iter()
            .filter_map(|(k, v)| v.as_str().map(|msg| (k.clone(), msg.to_owned())))
            .collect()
    }
}

/// An authenticated user with role flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_owner: bool,
}

/// A household owning plans, recipes, and a weekly budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Home {
    pub id: String,
    pub name: String,
    pub weekly_budget: f64,
    pub resident_count: u32,
}

/// A measurement unit with a conversion factor against its base unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub title: String,
    pub abbreviation: String,
    pub factor: f64,
}

/// A purchasable product with price and nutrition data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub gross_price: Option<f64>,
    pub unit_id: Option<String>,
    pub supplier: Option<String>,
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub protein: Option<f64>,
}

/// A named reference to a product, usable inside recipe ingredient groups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub title: String,
    pub product_id: Option<String>,
}

///// One ingredient line inside a group: which ingredient, how much, what unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientItem {
    pub id: String,
    pub ingredient_id: String,
    pub title: String,
    pub amount: f64,
    pub unit_id: Option<String>,
}

/// An ordered cluster of ingredient items ("For the sauce").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<IngredientItem>,
}

/// One instruction unit of a recipe, optionally tagged with the ingredient
/// items it consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub item_ids: Vec<String>,
}

/// A recipe with its nested groups and steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub portions: Option<u32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub groups: Vec<IngredientGroup>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

///// One planned meal: a recipe scheduled on a date for a home.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub home_id: String,
    pub recipe_id: String,
    pub recipe_title: String,
    /// ISO calendar date, e.g. `2026-03-14`.
    pub date: String,
}
