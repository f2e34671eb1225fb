//! Admin session tokens
//!
//! A session is an HS256 JWT stored in the `canteen_session` cookie. The
//! cookie is HttpOnly and scoped to the whole site.

use chrono::{Duration, Utc};
use http::HeaderMap;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "canteen_session";

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC secret
    pub secret: String,
    /// Session lifetime (minutes)
    pub ttl_minutes: i64,
    pub issuer: String,
    pub audience: String,
    /// Add the `Secure` attribute to the cookie
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "dev-SESSION_SECRET-not-for-production".into(),
            ttl_minutes: 480,
            issuer: "canteen-server".into(),
            audience: "canteen-admin".into(),
            secure_cookie: false,
        }
    }
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin id
    pub sub: String,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session has expired")]
    Expired,

    #[error("Invalid session: {0}")]
    Invalid(String),

    #[error("Failed to issue session: {0}")]
    Generation(String),
}

/// Issues and validates session tokens
pub struct SessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl_minutes", &self.config.ttl_minutes)
            .field("issuer", &self.config.issuer)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a token for an authenticated admin
    pub fn issue(&self, admin_id: i64, username: &str) -> Result<String, SessionError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.ttl_minutes);

        let claims = SessionClaims {
            sub: admin_id.to_string(),
            username: username.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::Generation(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid(e.to_string()),
            })
    }

    /// `Set-Cookie` value carrying a fresh session token
    pub fn session_cookie(&self, token: &str) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE}={token}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
            self.config.ttl_minutes * 60
        );
        if self.config.secure_cookie {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// `Set-Cookie` value that removes the session cookie
    pub fn clear_cookie(&self) -> String {
        format!("{SESSION_COOKIE}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0")
    }

    /// Session token from the request's `Cookie` headers, if any
    pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
        headers
            .get_all(http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .map(|(_, token)| token)
            .filter(|token| !token.is_empty())
    }
}
