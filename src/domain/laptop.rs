//! Laptop catalog entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::DEFAULT_LAPTOP_RATING;

/// Laptop catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    /// Selling price
    pub price: i64,
    /// Price before the second-hand markdown
    pub original_price: i64,
    pub image: String,
    pub description: Option<String>,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub display: String,
    pub os: String,
    pub in_stock: bool,
    pub is_new: bool,
    pub rating: f64,
    pub reviews: i32,
    /// Percentage markdown, derived from the two prices
    pub discount: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to list a laptop.
#[derive(Debug, Clone)]
pub struct NewLaptop {
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub original_price: i64,
    pub image: String,
    pub description: Option<String>,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub display: String,
    pub os: String,
    pub in_stock: bool,
    pub is_new: bool,
    pub rating: f64,
    pub reviews: i32,
    pub discount: i32,
}

impl NewLaptop {
    pub fn default_rating() -> f64 {
        DEFAULT_LAPTOP_RATING
    }
}

/// Partial update to an existing laptop. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct LaptopUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<i64>,
    pub original_price: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub display: Option<String>,
    pub os: Option<String>,
    pub in_stock: Option<bool>,
    pub is_new: Option<bool>,
    pub rating: Option<f64>,
    pub reviews: Option<i32>,
    pub discount: Option<i32>,
}

/// Percentage markdown from `original_price` to `price`, rounded to the
/// nearest whole percent. A non-positive original price yields zero.
pub fn discount_percent(original_price: i64, price: i64) -> i32 {
    if original_price <= 0 {
        return 0;
    }
    (((original_price - price) as f64 / original_price as f64) * 100.0).round() as i32
}
