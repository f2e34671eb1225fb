use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::NotFound | Self::OrderNotFound | Self::FoodItemNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::AlreadyExists | Self::CategoryNameExists => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::OrderEmpty => StatusCode::BAD_REQUEST,
            Self::InternalError
            | Self::DatabaseError
            | Self::OrderCorrupted
            | Self::DocumentRenderFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
