//! Shared handler state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::SessionService;
use crate::core::{Config, Result};
use crate::db::{DbService, seed};

/// State shared by every handler
///
/// Cheap to clone: the pool and session service are reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub sessions: Arc<SessionService>,
}

impl ServerState {
    /// Open the store, apply migrations and seed the admin and demo catalog
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url).await?;
        Self::with_db(config, db).await
    }

    /// Build state around an already opened store
    pub async fn with_db(config: &Config, db: DbService) -> Result<Self> {
        seed::seed_admin(&db.pool, &config.admin_username, &config.admin_password).await?;

        if config.seed_demo_catalog {
            seed::seed_demo_catalog(&db.pool).await?;
        }

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            sessions: Arc::new(SessionService::new(config.session.clone())),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
