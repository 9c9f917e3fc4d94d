// src/main.rs

use content_guard::config::Config;
use content_guard::routes;
use content_guard::state::AppState;
use content_guard::telemetry::{self, LogConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (.env included)
    let config = Config::from_env()?;

    // Initialize Tracing (Logging); the guard must outlive the server
    let _guard = telemetry::init(&LogConfig::from(&config))?;

    tracing::info!(environment = ?config.app_env, "Configuration loaded");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // Create AppState
    let state = AppState {
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
