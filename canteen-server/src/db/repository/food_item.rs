//! Food Item Repository
//!
//! Category references are stored as given and never checked.

use super::{RepoError, RepoResult};
use shared::models::{FoodItem, FoodItemCreate, FoodItemUpdate, MenuItem};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, category_id, name, price, image";

/// Empty image strings are stored as NULL
fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|s| !s.trim().is_empty())
}

/// Items joined with their category, ordered by category name then item name
///
/// Items whose category no longer exists are not listed.
pub async fn find_all_with_category(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT f.id, f.category_id, c.name AS category_name, f.name, f.price, f.image \
         FROM food_item f \
         JOIN category c ON f.category_id = c.id \
         ORDER BY c.name, f.name",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// All items, newest first
pub async fn find_all_recent(pool: &SqlitePool) -> RepoResult<Vec<FoodItem>> {
    let items =
        sqlx::query_as::<_, FoodItem>(&format!("SELECT {COLUMNS} FROM food_item ORDER BY id DESC"))
            .fetch_all(pool)
            .await?;
    Ok(items)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FoodItem>> {
    let item = sqlx::query_as::<_, FoodItem>(&format!("SELECT {COLUMNS} FROM food_item WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(pool: &SqlitePool, data: FoodItemCreate) -> RepoResult<FoodItem> {
    let image = normalize_image(data.image);
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO food_item (category_id, name, price, image) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(data.category_id)
    .bind(&data.name)
    .bind(data.price)
    .bind(&image)
    .fetch_one(pool)
    .await?;

    Ok(FoodItem {
        id,
        category_id: data.category_id,
        name: data.name,
        price: data.price,
        image,
    })
}

/// Update the given fields of an item
///
/// Absent fields keep their value; `image: Some("")` clears the image.
pub async fn update(pool: &SqlitePool, id: i64, data: FoodItemUpdate) -> RepoResult<FoodItem> {
    let clear_image = matches!(&data.image, Some(s) if s.trim().is_empty());
    let image = normalize_image(data.image);

    let rows = sqlx::query(
        "UPDATE food_item SET \
            category_id = COALESCE(?1, category_id), \
            name = COALESCE(?2, name), \
            price = COALESCE(?3, price), \
            image = CASE WHEN ?5 THEN NULL ELSE COALESCE(?4, image) END \
         WHERE id = ?6",
    )
    .bind(data.category_id)
    .bind(data.name)
    .bind(data.price)
    .bind(image)
    .bind(clear_image)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Food item {id} not found")))
}

/// Delete an item. Stored order snapshots are unaffected.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM food_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Food item {id} not found")));
    }
    Ok(())
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM food_item")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
