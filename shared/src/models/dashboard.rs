//! Admin dashboard aggregates

use serde::{Deserialize, Serialize};

use super::FoodItem;

/// Counts and item listing shown on the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_categories: i64,
    pub total_items: i64,
    pub total_orders: i64,
    /// All items, newest first
    pub recent_items: Vec<FoodItem>,
}
