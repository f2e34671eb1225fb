//! Shared types for the canteen service
//!
//! Domain models for the catalog and order store, plus the unified error
//! system used by the HTTP layer and repositories.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
