//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`menu`] - public menu listing
//! - [`cart`] - cart pricing rules and quotes
//! - [`orders`] - order intake
//! - [`bill`] - bill view and PDF download
//! - [`admin`] - session login and catalog management

pub mod admin;
pub mod bill;
pub mod cart;
pub mod health;
pub mod menu;
pub mod orders;

use axum::{Router, http::Uri};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use shared::error::AppError;

/// Assemble every route with request tracing
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(bill::router())
        .merge(admin::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
