//! Logging Infrastructure
//!
//! Structured logging for development and production. The level comes from
//! `RUST_LOG` when set, else from the configured level.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from the configured level and log directory
///
/// File output (daily rolling) is only enabled when `log_dir` exists.
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},tower_http=info,sqlx=warn")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match existing_dir(log_dir) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "canteen-server");
            // A second init (tests) is not an error worth surfacing
            let _ = subscriber.with_writer(file_appender).try_init();
        }
        None => {
            let _ = subscriber.try_init();
        }
    }
}

fn existing_dir(log_dir: Option<&str>) -> Option<&Path> {
    log_dir
        .filter(|d| !d.is_empty())
        .map(Path::new)
        .filter(|p| p.is_dir())
}
