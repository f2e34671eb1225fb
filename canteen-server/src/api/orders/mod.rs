//! Order intake API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/place_order", post(handler::place_order))
}
