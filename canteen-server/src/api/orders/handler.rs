//! Order intake handler

use axum::{Json, extract::State};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OrderCreate, PlaceOrderResponse};
use shared::util::now_datetime;

use crate::core::ServerState;
use crate::db::repository::order;

/// POST /place_order - record a cart submission
///
/// Totals are stored as submitted. Inconsistent totals are logged, not corrected.
pub async fn place_order(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<PlaceOrderResponse>> {
    if payload.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    if !payload.totals_consistent() {
        tracing::warn!(
            subtotal = payload.subtotal,
            tax = payload.tax,
            total = payload.total,
            "Order totals are inconsistent, storing as submitted"
        );
    }

    let order_id = order::create(state.pool(), &payload, &now_datetime()).await?;

    tracing::info!(
        order_id,
        customer = %payload.customer_name_or_default(),
        items = payload.items.len(),
        total = payload.total,
        "Order placed"
    );

    Ok(Json(PlaceOrderResponse {
        success: true,
        order_id,
    }))
}
