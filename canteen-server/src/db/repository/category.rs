//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate};
use sqlx::SqlitePool;

/// All categories, alphabetical by name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM category ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(category)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT id, name FROM category WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
    Ok(category)
}

/// Insert a category
///
/// A name that already exists fails with [`RepoError::Duplicate`] and leaves
/// the store unchanged.
pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    let id = sqlx::query_scalar::<_, i64>("INSERT INTO category (name) VALUES (?) RETURNING id")
        .bind(&data.name)
        .fetch_one(pool)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => {
                RepoError::Duplicate(format!("Category '{}' already exists", data.name))
            }
            other => other,
        })?;
    Ok(Category { id, name: data.name })
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM category")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
