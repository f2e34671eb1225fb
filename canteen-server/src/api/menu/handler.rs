//! Menu API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::error::AppResult;
use shared::models::{Category, MenuItem};

use crate::core::ServerState;
use crate::db::repository::{category, food_item};

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

/// GET /menu - categories and items with their category name
pub async fn menu(State(state): State<ServerState>) -> AppResult<Json<MenuResponse>> {
    let categories = category::find_all(state.pool()).await?;
    let items = food_item::find_all_with_category(state.pool()).await?;
    Ok(Json(MenuResponse { categories, items }))
}
