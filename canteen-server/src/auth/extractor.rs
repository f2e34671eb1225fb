//! Admin session extractor
//!
//! Protected handlers take an [`AdminUser`] argument. Requests without a
//! valid session cookie are redirected to the login screen.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::{SessionError, SessionService};
use crate::core::ServerState;
use crate::security_log;

/// Path unauthenticated admin requests are sent to
pub const LOGIN_PATH: &str = "/admin/login";

/// Authenticated admin principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
}

/// Rejection for protected routes: `303 See Other` to the login screen
#[derive(Debug)]
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to(LOGIN_PATH).into_response()
    }
}

impl FromRequestParts<ServerState> for AdminUser {
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AdminUser>() {
            return Ok(user.clone());
        }

        let Some(token) = SessionService::token_from_headers(&parts.headers) else {
            security_log!("WARN", "session_missing", uri = format!("{}", parts.uri));
            return Err(LoginRedirect);
        };

        let claims = match state.sessions.validate(token) {
            Ok(claims) => claims,
            Err(e) => {
                let reason = match &e {
                    SessionError::Expired => "expired",
                    _ => "invalid",
                };
                security_log!(
                    "WARN",
                    "session_rejected",
                    reason = reason,
                    error = format!("{}", e),
                    uri = format!("{}", parts.uri)
                );
                return Err(LoginRedirect);
            }
        };

        let id = claims.sub.parse::<i64>().map_err(|_| {
            security_log!("WARN", "session_malformed", sub = claims.sub.clone());
            LoginRedirect
        })?;

        let user = AdminUser {
            id,
            username: claims.username,
        };
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
