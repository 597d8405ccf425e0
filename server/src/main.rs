mod api;
mod color;
mod config;
mod palette;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::palette::Palette;

/// Shared application state
pub struct AppState {
    pub palette: Palette,
    pub config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photocolor_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    // Load the reference palette; a bad palette file is fatal at startup
    let palette = match &config.palette_path {
        Some(path) => Palette::from_file(path)?,
        None => Palette::builtin(),
    };
    tracing::info!("loaded palette with {} entries", palette.len());

    // Create shared state
    let state = Arc::new(AppState {
        palette,
        config: config.clone(),
    });

    // Build router
    let app = api::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Photocolor server listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
