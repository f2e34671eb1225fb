use serde::{Deserialize, Serialize};
use shared::models::{LineItem, Order};

use super::split_tax;

/// On-screen bill for one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillView {
    pub id: i64,
    pub customer_name: String,
    pub order_items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total: f64,
    pub datetime: String,
}

impl From<Order> for BillView {
    fn from(order: Order) -> Self {
        let (cgst, sgst) = split_tax(order.tax);
        Self {
            id: order.id,
            customer_name: order.customer_name,
            order_items: order.items,
            subtotal: order.subtotal,
            tax: order.tax,
            cgst,
            sgst,
            total: order.total,
            datetime: order.datetime,
        }
    }
}
