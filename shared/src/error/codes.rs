//! Numeric error codes returned in the `code` field of error bodies
//!
//! | Range | Area |
//! |-------|------|
//! | 0xxx | general |
//! | 1xxx | admin login |
//! | 4xxx | orders and bills |
//! | 6xxx | catalog |
//! | 9xxx | storage and rendering |

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    /// Route or row that does not exist
    NotFound = 3,
    /// Unique constraint hit outside the category name check
    AlreadyExists = 4,

    /// Unknown admin or wrong password
    InvalidCredentials = 1002,

    OrderNotFound = 4001,
    /// Submitted cart has no line items
    OrderEmpty = 4002,
    /// Stored item snapshot is not valid JSON
    OrderCorrupted = 4003,

    FoodItemNotFound = 6001,
    CategoryNameExists = 6102,

    InternalError = 9001,
    DatabaseError = 9002,
    /// PDF invoice could not be laid out
    DocumentRenderFailed = 9201,
}

impl ErrorCode {
    const ALL: [ErrorCode; 12] = [
        ErrorCode::Success,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidCredentials,
        ErrorCode::OrderNotFound,
        ErrorCode::OrderEmpty,
        ErrorCode::OrderCorrupted,
        ErrorCode::FoodItemNotFound,
        ErrorCode::CategoryNameExists,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
        ErrorCode::DocumentRenderFailed,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message, used when an error carries no custom one
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidCredentials => "Invalid credentials",
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::OrderCorrupted => "Stored order items could not be read",
            ErrorCode::FoodItemNotFound => "Food item not found",
            ErrorCode::CategoryNameExists => "Category already exists",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::DocumentRenderFailed => "Invoice document could not be rendered",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
