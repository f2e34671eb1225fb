//! Admin authentication
//!
//! - [`password`]: argon2 hashing of the stored admin credential
//! - [`SessionService`]: signed session tokens carried in an HttpOnly cookie
//! - [`AdminUser`]: request-scoped principal extracted on protected routes

mod extractor;
pub mod password;
pub mod session;

pub use extractor::{AdminUser, LoginRedirect};
pub use session::{SESSION_COOKIE, SessionClaims, SessionConfig, SessionError, SessionService};
