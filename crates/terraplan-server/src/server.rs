//! HTTP server lifecycle and environment configuration.
//!
//! [`start_server`] binds a TCP listener and runs the Axum server until
//! the process is terminated. Configuration comes from environment
//! variables with sensible defaults for local development.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Default per-request timeout for upstream data sources, seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the blueprint API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Per-request timeout for upstream adapter calls.
    pub upstream_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `TERRAPLAN_HOST`, `TERRAPLAN_PORT`,
    /// `TERRAPLAN_TIMEOUT_SECS`. Unset variables fall back to defaults;
    /// unparseable values are an error rather than a silent default.
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();

        let host = std::env::var("TERRAPLAN_HOST").unwrap_or(defaults.host);

        let port = match std::env::var("TERRAPLAN_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("TERRAPLAN_PORT '{raw}': {e}")))?,
            Err(_) => defaults.port,
        };

        let upstream_timeout = match std::env::var("TERRAPLAN_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    ServerError::Config(format!("TERRAPLAN_TIMEOUT_SECS '{raw}': {e}"))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => defaults.upstream_timeout,
        };

        Ok(Self {
            host,
            port,
            upstream_timeout,
        })
    }
}

/// Start the blueprint API server.
///
/// Binds to the configured address, builds the router, and serves
/// requests until the process is terminated.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind or the server
/// encounters a fatal I/O error.
pub async fn start_server(config: &ServerConfig, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let router = build_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "terraplan server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Errors that can occur when configuring or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unparseable value.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal error while serving.
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_all_interfaces() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_timeout, Duration::from_secs(15));
    }
}
