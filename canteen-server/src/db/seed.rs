//! First-run seeding: the admin credential and the demo catalog

use shared::error::{AppError, AppResult};
use sqlx::SqlitePool;

use super::repository::admin;
use crate::auth::password;

/// Demo menu: category name → (item name, price)
pub const DEMO_CATALOG: &[(&str, &[(&str, f64)])] = &[
    (
        "Snacks",
        &[
            ("Samosa", 20.0),
            ("Pakora", 30.0),
            ("Spring Roll", 40.0),
            ("Sandwich", 50.0),
        ],
    ),
    (
        "Drinks",
        &[
            ("Tea", 10.0),
            ("Coffee", 15.0),
            ("Cold Drink", 20.0),
            ("Fresh Juice", 40.0),
        ],
    ),
    (
        "Meals",
        &[
            ("Thali", 100.0),
            ("Biryani", 120.0),
            ("Fried Rice", 80.0),
            ("Noodles", 70.0),
        ],
    ),
    (
        "Desserts",
        &[("Ice Cream", 30.0), ("Gulab Jamun", 25.0), ("Cake Slice", 50.0)],
    ),
];

/// Placeholder image URL for a demo item
pub fn placeholder_image(name: &str) -> String {
    format!(
        "https://via.placeholder.com/300x200?text={}",
        name.replace(' ', "+")
    )
}

/// Create the admin credential unless that username already exists
///
/// Returns whether a record was created.
pub async fn seed_admin(pool: &SqlitePool, username: &str, password: &str) -> AppResult<bool> {
    if admin::find_by_username(pool, username).await?.is_some() {
        return Ok(false);
    }

    let hash = password::hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;
    admin::create(pool, username, &hash).await?;

    tracing::info!(username = %username, "Admin credential seeded");
    Ok(true)
}

/// Seed [`DEMO_CATALOG`] when the store has no categories
///
/// Runs in one transaction, so a failure leaves the catalog empty. Returns
/// whether anything was written.
pub async fn seed_demo_catalog(pool: &SqlitePool) -> AppResult<bool> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM category")
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if existing > 0 {
        tracing::debug!(categories = existing, "Catalog present, skipping demo seed");
        return Ok(false);
    }

    let mut item_count = 0;
    for (category, items) in DEMO_CATALOG {
        let category_id: i64 =
            sqlx::query_scalar("INSERT INTO category (name) VALUES (?) RETURNING id")
                .bind(*category)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;

        for (name, price) in *items {
            sqlx::query(
                "INSERT INTO food_item (category_id, name, price, image) VALUES (?, ?, ?, ?)",
            )
            .bind(category_id)
            .bind(*name)
            .bind(*price)
            .bind(placeholder_image(name))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
            item_count += 1;
        }
    }

    tx.commit()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(
        categories = DEMO_CATALOG.len(),
        items = item_count,
        "Demo catalog seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{category, food_item, test_support};

    #[test]
    fn test_placeholder_image() {
        assert_eq!(
            placeholder_image("Spring Roll"),
            "https://via.placeholder.com/300x200?text=Spring+Roll"
        );
    }

    #[tokio::test]
    async fn test_seed_catalog_once() {
        let pool = test_support::pool().await;

        assert!(seed_demo_catalog(&pool).await.unwrap());
        assert_eq!(category::count(&pool).await.unwrap(), 4);
        assert_eq!(food_item::count(&pool).await.unwrap(), 15);

        // Second run is a no-op
        assert!(!seed_demo_catalog(&pool).await.unwrap());
        assert_eq!(category::count(&pool).await.unwrap(), 4);
        assert_eq!(food_item::count(&pool).await.unwrap(), 15);
    }

    #[tokio::test]
    async fn test_seeded_items_reference_their_category() {
        let pool = test_support::pool().await;
        seed_demo_catalog(&pool).await.unwrap();

        let menu = food_item::find_all_with_category(&pool).await.unwrap();
        assert_eq!(menu.len(), 15);
        let tea = menu.iter().find(|m| m.name == "Tea").unwrap();
        assert_eq!(tea.category_name, "Drinks");
        assert_eq!(tea.price, 10.0);
        assert_eq!(
            tea.image.as_deref(),
            Some("https://via.placeholder.com/300x200?text=Tea")
        );
    }

    #[tokio::test]
    async fn test_existing_category_blocks_seed() {
        let pool = test_support::pool().await;
        category::create(&pool, shared::models::CategoryCreate { name: "Specials".into() })
            .await
            .unwrap();

        assert!(!seed_demo_catalog(&pool).await.unwrap());
        assert_eq!(category::count(&pool).await.unwrap(), 1);
        assert_eq!(food_item::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_admin_hashes_and_is_idempotent() {
        let pool = test_support::pool().await;

        assert!(seed_admin(&pool, "admin", "admin123").await.unwrap());
        assert!(!seed_admin(&pool, "admin", "other").await.unwrap());

        let stored = admin::find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "admin123");
        assert!(password::verify_password("admin123", &stored.password_hash));
    }
}
