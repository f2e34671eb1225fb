//! # canteen-pdf
//!
//! Minimal PDF document builder - low-level drawing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to draw:
//! - PDF object/xref serialization (PDF 1.4, uncompressed content streams)
//! - Standard Type1 fonts (Helvetica, Helvetica-Bold) with glyph metrics
//! - WinAnsi text encoding and string escaping
//! - Styled tables with automatic pagination
//!
//! Business logic (WHAT to draw) stays in application code:
//! - Invoice layout → canteen-server
//!
//! ## Example
//!
//! ```
//! use canteen_pdf::{Color, Font, PageSize, PdfBuilder};
//!
//! let mut b = PdfBuilder::new(PageSize::A4);
//! b.title("Demo");
//! b.fill_color(Color::from_hex(0x1a535c));
//! b.text_centered(297.64, 780.0, Font::HelveticaBold, 24.0, "Hello");
//! let bytes = b.build();
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! ```

mod color;
mod document;
mod encoding;
mod error;
mod font;
mod table;

// Re-exports
pub use color::Color;
pub use document::{PageSize, PdfBuilder};
pub use encoding::{RUPEE_FALLBACK, escape_literal, to_win_ansi};
pub use error::{PdfError, PdfResult};
pub use font::Font;
pub use table::{Align, Margins, RowStyle, Table, TableRow};
