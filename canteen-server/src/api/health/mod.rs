//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |
//!
//! ```json
//! { "status": "ok", "service": "canteen-server", "version": "0.1.0", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// ok | error
    database: &'static str,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check database probe failed");
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        service: "canteen-server",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
