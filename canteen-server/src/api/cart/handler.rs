//! Cart API Handlers

use axum::Json;

use crate::pricing::{self, CartQuote, CartRules, QuoteRequest};

/// GET /cart
pub async fn rules() -> Json<CartRules> {
    Json(CartRules::default())
}

/// POST /cart/quote
pub async fn quote(Json(req): Json<QuoteRequest>) -> Json<CartQuote> {
    Json(pricing::quote(&CartRules::default(), &req.items))
}
