//! Database Module
//!
//! Handles the SQLite connection pool, migrations and seeding

pub mod repository;
pub mod seed;

use shared::error::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Database service: owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database at `url` in WAL mode and apply migrations
    ///
    /// `sqlite::memory:` is routed to [`DbService::in_memory`].
    pub async fn new(url: &str) -> Result<Self, AppError> {
        if url.contains(":memory:") {
            return Self::in_memory().await;
        }

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(url = %url, "Database connection established (SQLite WAL, busy_timeout=5000ms)");

        Self::migrate(pool).await
    }

    /// Private in-memory database
    ///
    /// A single connection that never expires, since every new connection to
    /// `:memory:` would see an empty database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, AppError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::debug!("Database migrations applied");

        Ok(Self { pool })
    }
}
