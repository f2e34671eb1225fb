//! Admin Repository

use super::RepoResult;
use sqlx::SqlitePool;

/// Stored admin credential
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminRow {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminRow>> {
    let admin = sqlx::query_as::<_, AdminRow>(
        "SELECT id, username, password_hash FROM admin WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(admin)
}

pub async fn create(pool: &SqlitePool, username: &str, password_hash: &str) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO admin (username, password_hash) VALUES (?, ?) RETURNING id",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
