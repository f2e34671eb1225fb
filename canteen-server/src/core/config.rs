use crate::auth::SessionConfig;
use crate::core::{Result, ServerError};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:canteen.db | SQLite database, created if missing |
/// | BIND_ADDR | 0.0.0.0 | Listen address |
/// | HTTP_PORT | 5000 | Listen port |
/// | ENVIRONMENT | development | development / production |
/// | SESSION_SECRET | dev fallback | HMAC secret for admin session tokens |
/// | SESSION_TTL_MINUTES | 480 | Admin session lifetime |
/// | ADMIN_USERNAME | admin | Seeded admin username |
/// | ADMIN_PASSWORD | admin123 | Seeded admin password (stored hashed) |
/// | SEED_DEMO_CATALOG | true | Seed the demo catalog into an empty store |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SESSION_SECRET=... cargo run -p canteen-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub http_port: u16,
    /// development | production
    pub environment: String,
    pub session: SessionConfig,
    pub admin_username: String,
    pub admin_password: String,
    pub seed_demo_catalog: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:canteen.db".into(),
            bind_addr: "0.0.0.0".into(),
            http_port: 5000,
            environment: "development".into(),
            session: SessionConfig::default(),
            admin_username: "admin".into(),
            admin_password: "admin123".into(),
            seed_demo_catalog: true,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl Config {
    fn dev_fallback(name: &str) -> String {
        format!("dev-{name}-not-for-production")
    }

    /// Require a secret env var: must be set and non-empty outside development
    fn require_secret(name: &str, environment: &str) -> Result<String> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(ServerError::Config(format!(
                        "{name} must be set in {environment} environment"
                    )));
                }
                Self::dev_fallback(name)
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(ServerError::Config(format!(
                "{name} must not be empty in {environment} environment"
            )));
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let environment = std::env::var("ENVIRONMENT").unwrap_or(defaults.environment);

        let session = SessionConfig {
            secret: Self::require_secret("SESSION_SECRET", &environment)?,
            ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session.ttl_minutes),
            secure_cookie: environment == "production",
            ..defaults.session
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            session,
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            seed_demo_catalog: std::env::var("SEED_DEMO_CATALOG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed_demo_catalog),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment,
        })
    }

    /// Whether sessions are signed with the development fallback secret
    pub fn uses_dev_secret(&self) -> bool {
        self.session.secret == Self::dev_fallback("SESSION_SECRET")
    }

    /// Socket address string for the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}
