//! Axum router construction for the blueprint API.
//!
//! Assembles the routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// - `GET /` -- minimal HTML status page
/// - `GET /api/health` -- liveness probe
/// - `POST /api/blueprint` -- generate a blueprint
///
/// CORS allows any origin so browser frontends can call the API from
/// any host. The API is read-only from the client's perspective and
/// holds no per-user state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route("/api/blueprint", post(handlers::generate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
