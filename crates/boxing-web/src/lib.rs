//! Boxing Web Demo
//!
//! A minimal HTTP service with greeting, echo, health, and hang routes.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::WebConfig;
use handlers::create_router;
use tokio::net::TcpListener;
use tracing::info;

/// Web demo error
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the web demo server
///
/// Binds the configured address and serves until the process exits.
pub async fn start_server(config: WebConfig) -> Result<(), WebError> {
    info!("Starting boxing web demo");
    info!("Bind address: {}", config.bind_addr());

    let app = create_router();

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Web demo listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| WebError::Server(e.to_string()))?;

    Ok(())
}
