//! Order Repository
//!
//! Orders are append-only. Line items are stored as a JSON snapshot in the
//! `items` column so an order renders the same after catalog edits.

use super::{RepoError, RepoResult};
use shared::models::{LineItem, Order, OrderCreate};
use sqlx::SqlitePool;

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    items: String,
    subtotal: f64,
    tax: f64,
    total: f64,
    datetime: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepoError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<LineItem> = serde_json::from_str(&row.items).map_err(|e| {
            RepoError::Corrupted(format!("Order {} items are not valid JSON: {e}", row.id))
        })?;
        Ok(Order {
            id: row.id,
            customer_name: row.customer_name,
            items,
            subtotal: row.subtotal,
            tax: row.tax,
            total: row.total,
            datetime: row.datetime,
        })
    }
}

/// Persist an order exactly as submitted, returning its id
///
/// Ids are strictly increasing and never reused.
pub async fn create(pool: &SqlitePool, data: &OrderCreate, datetime: &str) -> RepoResult<i64> {
    let items = serde_json::to_string(&data.items)
        .map_err(|e| RepoError::Database(format!("Failed to encode order items: {e}")))?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (customer_name, items, subtotal, tax, total, datetime) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(data.customer_name_or_default())
    .bind(items)
    .bind(data.subtotal)
    .bind(data.tax)
    .bind(data.total)
    .bind(datetime)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(
        "SELECT id, customer_name, items, subtotal, tax, total, datetime FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(Order::try_from).transpose()
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support;

    const NOW: &str = "2024-05-01 12:30:00";

    fn order(customer_name: Option<&str>, subtotal: f64, tax: f64, total: f64) -> OrderCreate {
        OrderCreate {
            customer_name: customer_name.map(str::to_string),
            items: vec![LineItem {
                id: Some(serde_json::json!(5)),
                name: "Tea".into(),
                quantity: 2,
                price: 10.0,
                total: 20.0,
            }],
            subtotal,
            tax,
            total,
        }
    }

    #[tokio::test]
    async fn test_create_and_read_back() {
        let pool = test_support::pool().await;
        let id = create(&pool, &order(Some("Ravi"), 20.0, 1.0, 21.0), NOW)
            .await
            .unwrap();

        let stored = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored.customer_name, "Ravi");
        assert_eq!(stored.items.len(), 1);
        assert_eq!(stored.items[0].name, "Tea");
        assert_eq!(stored.items[0].id, Some(serde_json::json!(5)));
        assert_eq!(stored.datetime, NOW);
        assert_eq!((stored.subtotal, stored.tax, stored.total), (20.0, 1.0, 21.0));
    }

    #[tokio::test]
    async fn test_missing_customer_defaults_to_guest() {
        let pool = test_support::pool().await;
        let id = create(&pool, &order(None, 20.0, 1.0, 21.0), NOW).await.unwrap();
        let stored = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored.customer_name, "Guest");
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let pool = test_support::pool().await;
        let mut last = 0;
        for _ in 0..5 {
            let id = create(&pool, &order(None, 20.0, 1.0, 21.0), NOW).await.unwrap();
            assert!(id > last);
            last = id;
        }
        assert_eq!(count(&pool).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_inconsistent_totals_persisted_verbatim() {
        let pool = test_support::pool().await;
        let id = create(&pool, &order(None, 20.0, 1.0, 99.0), NOW).await.unwrap();
        let stored = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored.total, 99.0);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let pool = test_support::pool().await;
        assert!(find_by_id(&pool, 123).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupted_items_reported() {
        let pool = test_support::pool().await;
        sqlx::query(
            "INSERT INTO orders (customer_name, items, subtotal, tax, total, datetime) \
             VALUES ('Guest', 'not json', 0, 0, 0, ?)",
        )
        .bind(NOW)
        .execute(&pool)
        .await
        .unwrap();

        assert!(matches!(
            find_by_id(&pool, 1).await,
            Err(RepoError::Corrupted(_))
        ));
    }
}
