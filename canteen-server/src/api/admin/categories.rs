//! Category management

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, CategoryCreate};

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, category};

/// GET /admin/categories
pub async fn list(
    State(state): State<ServerState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(category::find_all(state.pool()).await?))
}

/// POST /admin/categories
pub async fn create(
    State(state): State<ServerState>,
    admin: AdminUser,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let name = payload.name.clone();
    let created = category::create(state.pool(), payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => {
                tracing::info!(name = %name, "Category already exists");
                AppError::new(ErrorCode::CategoryNameExists).with_detail("name", name.clone())
            }
            other => other.into(),
        })?;

    tracing::info!(
        category_id = created.id,
        name = %created.name,
        admin = %admin.username,
        "Category created"
    );
    Ok(Json(created))
}
