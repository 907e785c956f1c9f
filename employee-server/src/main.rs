use employee_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load .env, then configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Work directory and logging
    setup_environment(&config)?;

    print_banner();

    tracing::info!(environment = %config.environment, "Employee server starting...");

    // 3. Open the database (ensures the unique index on employee_id)
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until shutdown, then close the database
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
