//! Bill API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /bill/{id} | GET | Bill view (JSON) |
//! | /download_bill/{id} | GET | Invoice PDF attachment |
//!
//! Unknown orders answer `404` with the plain-text body `Order not found`.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/bill/{id}", get(handler::bill))
        .route("/download_bill/{id}", get(handler::download_bill))
}
