//! Campusdesk fixture server
//!
//! Serves the static mock collections used while the real backend
//! endpoints are missing.

use std::net::SocketAddr;

use campusdesk::{api, config::AppConfig, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _log_guard = logging::init(&config.logging);

    tracing::info!("Starting Campusdesk fixture server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Remote API configured at {}", config.api.base_url);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, api::router()).await?;

    Ok(())
}
