//! Order aggregate: header, line items, and the composed read view.
//!
//! Line items carry a denormalized snapshot of the laptop (name, image,
//! price at purchase time) so later catalog edits never rewrite history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Order lifecycle states. Transitions are admin-only and unconditional:
/// whatever value an admin writes replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "Processing" => OrderStatus::Processing,
            "Shipped" => OrderStatus::Shipped,
            "Delivered" => OrderStatus::Delivered,
            "Cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cod,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Online => "online",
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(s: &str) -> Self {
        match s {
            "online" => PaymentMethod::Online,
            _ => PaymentMethod::Cod,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order header. The id is caller-supplied (an opaque string such as
/// `ORD-1722945600000`); a collision fails the insert for that attempt.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub phone_number: String,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub estimated_delivery: NaiveDate,
    pub order_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of an order: a purchased-laptop snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: String,
    pub laptop_id: Uuid,
    pub laptop_name: String,
    pub laptop_image: String,
    pub quantity: i32,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// Order line joined with the current catalog entry, when it still exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(flatten)]
    pub item: OrderItem,
    pub laptop: Option<super::Laptop>,
}

/// Composed read view: header plus all of its lines.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderLine>,
}

/// Header fields of an order about to be placed.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub id: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub phone_number: String,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub additional_notes: Option<String>,
    pub total_amount: i64,
    pub status: OrderStatus,
    pub estimated_delivery: NaiveDate,
    pub order_date: NaiveDate,
}

/// One cart line of an order about to be placed.
#[derive(Debug, Clone)]
pub struct OrderLineDraft {
    pub laptop_id: Uuid,
    pub laptop_name: String,
    pub laptop_image: String,
    pub quantity: i32,
    pub price: i64,
}

/// Sum of `price × quantity` across all lines.
pub fn compute_total(lines: &[OrderLineDraft]) -> i64 {
    lines
        .iter()
        .map(|line| line.price * i64::from(line.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i32, price: i64) -> OrderLineDraft {
        OrderLineDraft {
            laptop_id: Uuid::new_v4(),
            laptop_name: "Test Laptop".to_string(),
            laptop_image: "https://example.com/laptop.jpg".to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let lines = vec![line(2, 45_000), line(1, 58_000)];
        assert_eq!(compute_total(&lines), 148_000);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(compute_total(&[]), 0);
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_pending() {
        assert_eq!(OrderStatus::from("Refunded"), OrderStatus::Pending);
    }

    #[test]
    fn payment_method_parses_lowercase_wire_values() {
        assert_eq!(PaymentMethod::from("cod"), PaymentMethod::Cod);
        assert_eq!(PaymentMethod::from("online"), PaymentMethod::Online);

        let json = serde_json::to_string(&PaymentMethod::Online).unwrap();
        assert_eq!(json, "\"online\"");
    }

    #[test]
    fn status_serializes_capitalized() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, "\"Shipped\"");
    }
}
