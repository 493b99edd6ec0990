//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{SeedGoalStore, SeedTransactionStore},
    config::Config,
    error::ApiError,
    web::{app_router, AppState},
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters ---
    let goal_store = Arc::new(SeedGoalStore::new()?);
    let transaction_store = Arc::new(SeedTransactionStore::new()?);

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState::new(
        config.clone(),
        goal_store,
        transaction_store,
    )?);
    let reply_tasks = app_state.reply_tasks.clone();

    // --- 4. Create the Web Router ---
    let app = app_router(app_state);

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // --- 6. Let Scheduled Replies Land ---
    reply_tasks.close();
    info!("Waiting for {} pending chat reply(ies).", reply_tasks.len());
    reply_tasks.wait().await;
    info!("Server stopped.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for the shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}
