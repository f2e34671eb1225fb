//! Cart API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /cart | GET | Pricing rules (currency, CGST, SGST) |
//! | /cart/quote | POST | Price a cart |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/cart", get(handler::rules))
        .route("/cart/quote", post(handler::quote))
}
