//! Data models
//!
//! Shared between the server and its HTTP clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod category;
pub mod dashboard;
pub mod food_item;
pub mod order;

// Re-exports
pub use category::*;
pub use dashboard::*;
pub use food_item::*;
pub use order::*;
