//! Food Item Model

use serde::{Deserialize, Serialize};

/// Food item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodItem {
    pub id: i64,
    /// Category reference (not enforced by the store)
    pub category_id: i64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    /// Image URL, rendered by the client as-is
    pub image: Option<String>,
}

/// Food item joined with its category name (menu listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub category_id: i64,
    pub category_name: String,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
}

/// Create food item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemCreate {
    pub category_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Update food item payload
///
/// Absent fields keep their stored value. An empty `image` clears the URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodItemUpdate {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}
