//! Cart pricing rules
//!
//! The menu client prices a cart with two equal GST halves on the subtotal.
//! Order intake never calls into this module; stored totals are whatever the
//! client submitted.

use serde::{Deserialize, Serialize};
use shared::util::CURRENCY_SYMBOL;

/// Central GST rate
pub const CGST_RATE: f64 = 0.025;
/// State GST rate
pub const SGST_RATE: f64 = 0.025;

/// Pricing rules published to the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartRules {
    pub currency: String,
    pub cgst_rate: f64,
    pub sgst_rate: f64,
}

impl Default for CartRules {
    fn default() -> Self {
        Self {
            currency: CURRENCY_SYMBOL.to_string(),
            cgst_rate: CGST_RATE,
            sgst_rate: SGST_RATE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<QuoteItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartQuote {
    pub items: Vec<QuoteLine>,
    pub subtotal: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub tax: f64,
    pub total: f64,
}

/// Price a cart with the given rules
pub fn quote(rules: &CartRules, items: &[QuoteItem]) -> CartQuote {
    let lines: Vec<QuoteLine> = items
        .iter()
        .map(|item| QuoteLine {
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
            total: item.price * f64::from(item.quantity),
        })
        .collect();

    let subtotal: f64 = lines.iter().map(|l| l.total).sum();
    let cgst = subtotal * rules.cgst_rate;
    let sgst = subtotal * rules.sgst_rate;
    let tax = cgst + sgst;

    CartQuote {
        items: lines,
        subtotal,
        cgst,
        sgst,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, price: f64) -> QuoteItem {
        QuoteItem {
            name: name.into(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_two_teas() {
        let q = quote(&CartRules::default(), &[item("Tea", 2, 10.0)]);
        assert_eq!(q.items[0].total, 20.0);
        assert_eq!(q.subtotal, 20.0);
        assert!((q.cgst - 0.5).abs() < 1e-9);
        assert!((q.sgst - 0.5).abs() < 1e-9);
        assert!((q.tax - 1.0).abs() < 1e-9);
        assert!((q.total - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_cart() {
        let q = quote(
            &CartRules::default(),
            &[item("Samosa", 3, 20.0), item("Biryani", 1, 120.0)],
        );
        assert_eq!(q.subtotal, 180.0);
        assert!((q.tax - 9.0).abs() < 1e-9);
        assert!((q.total - 189.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_cart() {
        let q = quote(&CartRules::default(), &[]);
        assert!(q.items.is_empty());
        assert_eq!(q.total, 0.0);
    }

    #[test]
    fn test_rules_default() {
        let rules = CartRules::default();
        assert_eq!(rules.currency, "₹");
        assert_eq!(rules.cgst_rate + rules.sgst_rate, 0.05);
    }
}
