//! Shared application state for the blueprint API server.

use terraplan_adapters::EnvironmentFetcher;

/// Shared state injected via Axum's `State` extractor.
///
/// Holds only the environment fetcher. The service is stateless per
/// request: no coordinates or blueprints are retained after the response
/// is written.
#[derive(Clone)]
pub struct AppState {
    /// Source of environmental snapshots (live HTTP or canned for tests).
    pub fetcher: EnvironmentFetcher,
}

impl AppState {
    /// Create state around the given fetcher.
    pub const fn new(fetcher: EnvironmentFetcher) -> Self {
        Self { fetcher }
    }
}
