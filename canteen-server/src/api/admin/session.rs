//! Admin login / logout

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use crate::auth::{SessionService, password};
use crate::core::ServerState;
use crate::db::repository::admin;
use crate::security_log;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
    /// Session lifetime in seconds
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// GET /admin/login - whether the caller holds a valid session
pub async fn status(State(state): State<ServerState>, headers: HeaderMap) -> Json<SessionStatus> {
    let username = SessionService::token_from_headers(&headers)
        .and_then(|token| state.sessions.validate(token).ok())
        .map(|claims| claims.username);

    Json(SessionStatus {
        authenticated: username.is_some(),
        username,
    })
}

/// POST /admin/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Response> {
    let record = admin::find_by_username(state.pool(), &req.username).await?;

    let Some(record) = record.filter(|r| password::verify_password(&req.password, &r.password_hash))
    else {
        security_log!("WARN", "login_failed", username = req.username.clone());
        return Err(AppError::invalid_credentials());
    };

    let token = state
        .sessions
        .issue(record.id, &record.username)
        .map_err(|e| AppError::internal(e.to_string()))?;

    security_log!("INFO", "login_success", username = record.username.clone());

    let body = Json(LoginResponse {
        username: record.username,
        expires_in: state.config.session.ttl_minutes * 60,
    });
    Ok((
        [(header::SET_COOKIE, state.sessions.session_cookie(&token))],
        body,
    )
        .into_response())
}

/// GET /admin/logout - clear the session and return to the login screen
pub async fn logout(State(state): State<ServerState>) -> Response {
    (
        [(header::SET_COOKIE, state.sessions.clear_cookie())],
        Redirect::to("/admin/login"),
    )
        .into_response()
}
