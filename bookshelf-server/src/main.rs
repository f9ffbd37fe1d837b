//! Bookshelf Server - web catalog for a remote book library

use anyhow::{Context, Result};
use bookshelf_core::{ApiClient, Config};
use bookshelf_server::{routes, state};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_server=debug,bookshelf_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let client = ApiClient::from_config(&config).context("Failed to create API client")?;
    tracing::info!("Using library API at {}", client.base_url());

    // Create application state
    let state = state::AppState::new(Arc::new(client), config.page_size);

    // Build router
    let app = routes::create_router(state);

    // Start server
    tracing::info!("Starting server on {}", config.bind);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
