//! Terraplan server binary.
//!
//! Startup sequence:
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Build the live environment fetcher
//! 4. Serve until terminated

use std::sync::Arc;

use terraplan_adapters::EnvironmentFetcher;
use terraplan_server::{start_server, AppState, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("terraplan-server starting");

    let config = ServerConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "Configuration loaded"
    );

    let fetcher = EnvironmentFetcher::live(config.upstream_timeout);
    let state = Arc::new(AppState::new(fetcher));

    start_server(&config, state).await?;

    Ok(())
}
