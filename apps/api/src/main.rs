//! # RideHub API server
//!
//! ```text
//! .env / environment ──► ApiConfig ──► Database (migrations) ──► axum::serve
//!                                                                    │
//!                                            Ctrl+C / SIGTERM ──► graceful shutdown
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ridehub_api::{build_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An absent .env file is fine
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,ridehub_api=debug,ridehub_db=info")),
        )
        .with_target(true)
        .init();

    info!("Starting RideHub API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        addr = %config.bind_address(),
        database_url = %config.database_url,
        token_minutes = config.access_token_expire_minutes,
        "Configuration loaded"
    );
    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set; tokens are signed with the development default");
    }

    // Connect to database and run migrations
    let state = Arc::new(AppState::connect(config.clone()).await?);
    info!("Database ready");

    let app = build_router(state.clone());

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(addr = %config.bind_address(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
