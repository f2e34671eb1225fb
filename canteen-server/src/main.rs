use canteen_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env, configuration, logging)
    let config = setup_environment()?;

    print_banner();
    tracing::info!(environment = %config.environment, "Canteen server starting...");

    // 2. State: database, migrations, seeding
    let state = ServerState::initialize(&config).await?;

    // 3. HTTP server
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
