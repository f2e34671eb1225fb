//! Food item management

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, FoodItem, FoodItemCreate, FoodItemUpdate};

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, category, food_item};

/// Item plus the category choices for the edit screen
#[derive(Debug, Serialize)]
pub struct ItemEditView {
    pub item: FoodItem,
    pub categories: Vec<Category>,
}

fn item_error(id: i64, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => {
            AppError::new(ErrorCode::FoodItemNotFound).with_detail("item_id", id)
        }
        other => other.into(),
    }
}

/// POST /admin/items
pub async fn create(
    State(state): State<ServerState>,
    admin: AdminUser,
    Json(payload): Json<FoodItemCreate>,
) -> AppResult<Json<FoodItem>> {
    let item = food_item::create(state.pool(), payload).await?;
    tracing::info!(item_id = item.id, name = %item.name, admin = %admin.username, "Food item created");
    Ok(Json(item))
}

/// GET /admin/items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ItemEditView>> {
    let item = food_item::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::FoodItemNotFound).with_detail("item_id", id))?;
    let categories = category::find_all(state.pool()).await?;
    Ok(Json(ItemEditView { item, categories }))
}

/// PUT /admin/items/{id}
pub async fn update(
    State(state): State<ServerState>,
    admin: AdminUser,
    Path(id): Path<i64>,
    Json(payload): Json<FoodItemUpdate>,
) -> AppResult<Json<FoodItem>> {
    let item = food_item::update(state.pool(), id, payload)
        .await
        .map_err(|e| item_error(id, e))?;
    tracing::info!(item_id = id, admin = %admin.username, "Food item updated");
    Ok(Json(item))
}

/// DELETE /admin/items/{id}
pub async fn delete(
    State(state): State<ServerState>,
    admin: AdminUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    food_item::delete(state.pool(), id)
        .await
        .map_err(|e| item_error(id, e))?;
    tracing::info!(item_id = id, admin = %admin.username, "Food item deleted");
    Ok(Json(true))
}
