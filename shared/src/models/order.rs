//! Order Model
//!
//! Orders are immutable snapshots of a submitted cart. Line items are copied
//! at submission time and never reference the live catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Customer name stored when the submission omits one
pub const DEFAULT_CUSTOMER_NAME: &str = "Guest";

/// Line item snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Client-side catalog id at submission time (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub quantity: u32,
    /// Unit price in currency unit
    pub price: f64,
    /// Line total in currency unit, as submitted
    pub total: f64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,
}

/// Place order payload
///
/// Every amount is supplied by the client and stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub customer_name: Option<String>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderCreate {
    /// Customer name to persist, falling back to [`DEFAULT_CUSTOMER_NAME`]
    pub fn customer_name_or_default(&self) -> &str {
        self.customer_name
            .as_deref()
            .unwrap_or(DEFAULT_CUSTOMER_NAME)
    }

    /// Whether `total == subtotal + tax` within half a paisa
    pub fn totals_consistent(&self) -> bool {
        (self.subtotal + self.tax - self.total).abs() < 0.005
    }
}

/// Place order response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub order_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea_order(customer_name: Option<&str>) -> OrderCreate {
        OrderCreate {
            customer_name: customer_name.map(str::to_string),
            items: vec![LineItem {
                id: None,
                name: "Tea".into(),
                quantity: 2,
                price: 10.0,
                total: 20.0,
            }],
            subtotal: 20.0,
            tax: 1.0,
            total: 21.0,
        }
    }

    #[test]
    fn test_customer_name_defaults_to_guest() {
        assert_eq!(tea_order(None).customer_name_or_default(), "Guest");
        assert_eq!(tea_order(Some("Ravi")).customer_name_or_default(), "Ravi");
    }

    #[test]
    fn test_totals_consistency() {
        let mut order = tea_order(None);
        assert!(order.totals_consistent());

        order.total = 25.0;
        assert!(!order.totals_consistent());
    }

    #[test]
    fn test_deserialize_client_payload() {
        let json = r#"{
            "items": [{"id": 5, "name": "Tea", "price": 10, "quantity": 2, "total": 20}],
            "subtotal": 20, "tax": 1, "total": 21
        }"#;
        let order: OrderCreate = serde_json::from_str(json).unwrap();
        assert!(order.customer_name.is_none());
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].id, Some(serde_json::json!(5)));
        assert_eq!(order.total, 21.0);
    }

    #[test]
    fn test_line_item_skips_missing_id() {
        let item = LineItem {
            id: None,
            name: "Samosa".into(),
            quantity: 1,
            price: 20.0,
            total: 20.0,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
