use std::collections::HashMap;

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

/// Error returned by handlers and the storage layer
///
/// Renders as `{code, message, details?}` with the status of its [`ErrorCode`].
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> http::StatusCode {
        self.code.http_status()
    }

    /// `"<what> not found"`, with `what` kept as the `resource` detail
    pub fn not_found(what: impl Into<String>) -> Self {
        let what = what.into();
        Self::with_message(ErrorCode::NotFound, format!("{what} not found"))
            .with_detail("resource", what)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    pub fn order_not_found(order_id: i64) -> Self {
        Self::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id)
    }
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code,
            message: err.message,
            details: err.details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "Request failed");
        }

        let status = self.http_status();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
