//! Repository Module
//!
//! CRUD operations over the SQLite store, as free functions taking the pool.

pub mod admin;
pub mod category;
pub mod food_item;
pub mod order;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    /// A stored value could not be decoded
    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error()
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Corrupted(msg) => AppError::with_message(ErrorCode::OrderCorrupted, msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_to_app_error() {
        let err: AppError = RepoError::NotFound("Food item 9".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: AppError = RepoError::Duplicate("category.name".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);

        let err: AppError = RepoError::Corrupted("bad json".into()).into();
        assert_eq!(err.code, ErrorCode::OrderCorrupted);
    }
}
