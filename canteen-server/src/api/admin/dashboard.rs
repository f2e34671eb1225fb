use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::models::DashboardSummary;

use crate::auth::AdminUser;
use crate::core::ServerState;
use crate::db::repository::{category, food_item, order};

/// GET /admin/dashboard
pub async fn dashboard(
    State(state): State<ServerState>,
    _admin: AdminUser,
) -> AppResult<Json<DashboardSummary>> {
    let pool = state.pool();
    Ok(Json(DashboardSummary {
        total_categories: category::count(pool).await?,
        total_items: food_item::count(pool).await?,
        total_orders: order::count(pool).await?,
        recent_items: food_item::find_all_recent(pool).await?,
    }))
}
