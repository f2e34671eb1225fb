//! Canteen Server - menu, ordering and invoicing service
//!
//! # Overview
//!
//! - **Catalog** (`db::repository::{category, food_item}`): categories and food items
//! - **Order intake** (`api::orders`): records cart submissions as immutable snapshots
//! - **Invoices** (`invoice`): bill view and A4 PDF rendering
//! - **Admin** (`auth`, `api::admin`): session-cookie login and catalog CRUD
//!
//! # Module structure
//!
//! ```text
//! canteen-server/src/
//! ├── core/          # Config, state, server, errors
//! ├── auth/          # Password hashing, session tokens, AdminUser extractor
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, migrations, repositories, seeding
//! ├── invoice/       # Bill view and PDF layout
//! ├── pricing.rs     # Cart tax rules
//! └── utils/         # Logger
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod invoice;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use auth::{AdminUser, SessionService};
pub use core::{Config, Server, ServerState};
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse};

// Re-export logger functions
pub use utils::logger::init_logger;

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read [`Config`] and start logging from its level and directory
pub fn setup_environment() -> crate::core::Result<Config> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(&config.log_level, config.log_dir.as_deref());

    if config.uses_dev_secret() {
        tracing::warn!("SESSION_SECRET not set, using development fallback");
    }
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ____            _
  / ___|__ _ _ __ | |_ ___  ___ _ __
 | |   / _` | '_ \| __/ _ \/ _ \ '_ \
 | |__| (_| | | | | ||  __/  __/ | | |
  \____\__,_|_| |_|\__\___|\___|_| |_|
    "#
    );
}
