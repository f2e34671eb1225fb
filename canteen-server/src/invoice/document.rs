//! Invoice document model

use shared::models::Order;
use shared::util::format_money;

use super::split_tax;

pub const TITLE: &str = "Canteen Order Invoice";
pub const COLUMN_HEADERS: [&str; 4] = ["Item", "Qty", "Price (₹)", "Total (₹)"];
pub const FOOTER: [&str; 2] = ["Thank you for your order!", "Visit us again!"];

/// One row below the itemized lines
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub amount: String,
    /// Highlighted grand total
    pub emphasized: bool,
}

impl SummaryRow {
    fn new(label: &str, amount: f64) -> Self {
        Self {
            label: label.to_string(),
            amount: format_money(amount),
            emphasized: false,
        }
    }
}

/// Everything printed on an invoice, as display strings
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub order_id: i64,
    /// (label, value) pairs under the title
    pub info: Vec<(String, String)>,
    /// Item, quantity, unit price, line total
    pub lines: Vec<[String; 4]>,
    /// Subtotal, CGST, SGST, Grand Total
    pub summary: Vec<SummaryRow>,
}

impl InvoiceDocument {
    pub fn from_order(order: &Order) -> Self {
        let info = vec![
            ("Order ID:".to_string(), format!("#{}", order.id)),
            ("Customer Name:".to_string(), order.customer_name.clone()),
            ("Date & Time:".to_string(), order.datetime.clone()),
        ];

        let lines = order
            .items
            .iter()
            .map(|item| {
                [
                    item.name.clone(),
                    item.quantity.to_string(),
                    format_money(item.price),
                    format_money(item.total),
                ]
            })
            .collect();

        let (cgst, sgst) = split_tax(order.tax);
        let summary = vec![
            SummaryRow::new("Subtotal:", order.subtotal),
            SummaryRow::new("CGST (2.5%):", cgst),
            SummaryRow::new("SGST (2.5%):", sgst),
            SummaryRow {
                emphasized: true,
                ..SummaryRow::new("Grand Total:", order.total)
            },
        ];

        Self {
            order_id: order.id,
            info,
            lines,
            summary,
        }
    }

    /// Download name, `invoice_<id>.pdf`
    pub fn file_name(&self) -> String {
        format!("invoice_{}.pdf", self.order_id)
    }
}
