//! Bill API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use shared::error::{AppError, ErrorCode};
use shared::models::Order;

use crate::core::ServerState;
use crate::db::repository::order;
use crate::invoice::{BillView, InvoiceDocument, InvoiceRenderer};

/// Error for bill routes: a missing order is plain text, everything else
/// uses the JSON error envelope
#[derive(Debug)]
pub struct BillError(AppError);

impl From<AppError> for BillError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for BillError {
    fn into_response(self) -> Response {
        if self.0.code == ErrorCode::OrderNotFound {
            return (StatusCode::NOT_FOUND, ErrorCode::OrderNotFound.message()).into_response();
        }
        self.0.into_response()
    }
}

async fn load_order(state: &ServerState, id: i64) -> Result<Order, BillError> {
    order::find_by_id(state.pool(), id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::order_not_found(id).into())
}

/// GET /bill/{id}
pub async fn bill(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<BillView>, BillError> {
    let order = load_order(&state, id).await?;
    Ok(Json(BillView::from(order)))
}

/// GET /download_bill/{id}
pub async fn download_bill(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Response, BillError> {
    let order = load_order(&state, id).await?;
    let doc = InvoiceDocument::from_order(&order);

    let bytes = InvoiceRenderer::default().render(&doc).map_err(|e| {
        AppError::with_message(ErrorCode::DocumentRenderFailed, e.to_string())
            .with_detail("order_id", id)
    })?;

    tracing::info!(order_id = id, bytes = bytes.len(), "Invoice rendered");

    let disposition = format!("attachment; filename=\"{}\"", doc.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
