//! Error type shared by the HTTP layer and the store
//!
//! Every failure is an [`AppError`] carrying an [`ErrorCode`]. The code fixes
//! the HTTP status and the [`ErrorCategory`]; the body is an [`ErrorResponse`].
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorResponse};
//!
//! let err = AppError::new(ErrorCode::CategoryNameExists).with_detail("name", "Snacks");
//! assert_eq!(err.http_status(), http::StatusCode::CONFLICT);
//!
//! let body = ErrorResponse::from(err);
//! assert_eq!(body.code.code(), 6102);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse};
