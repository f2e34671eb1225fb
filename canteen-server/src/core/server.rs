//! Server Implementation
//!
//! Binds the listener and serves the router until Ctrl-C.

use crate::api;
use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(self) -> Result<()> {
        let app = api::build_router(self.state);

        let addr = self.config.listen_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Canteen server listening on http://{}", addr);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
