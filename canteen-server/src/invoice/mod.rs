//! Invoice rendering
//!
//! An [`Order`](shared::models::Order) is presented two ways:
//! - [`BillView`]: on-screen bill with the tax split into CGST/SGST
//! - [`InvoiceDocument`] → [`InvoiceRenderer`]: fixed-layout A4 PDF
//!
//! The document model holds display strings (with `₹`); the renderer only
//! decides where they go on the page.

mod document;
mod renderer;
mod view;

pub use document::{InvoiceDocument, SummaryRow};
pub use renderer::InvoiceRenderer;
pub use view::BillView;

/// Split stored tax into its two equal display halves (CGST, SGST)
pub fn split_tax(tax: f64) -> (f64, f64) {
    let half = tax / 2.0;
    (half, half)
}
