//! Error types for the PDF library

use thiserror::Error;

/// PDF building error types
#[derive(Debug, Error)]
pub enum PdfError {
    /// Table definition does not match its rows
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Content cannot be placed on the page
    #[error("Layout error: {0}")]
    Layout(String),
}

/// Result type for PDF operations
pub type PdfResult<T> = Result<T, PdfError>;
