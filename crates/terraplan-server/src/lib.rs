//! Terraplan HTTP API server.
//!
//! Exposes blueprint generation over a small Axum surface: a status
//! page, a health probe, and the `POST /api/blueprint` endpoint. The
//! server is stateless per request; the only long-lived piece is the
//! environment fetcher in [`state::AppState`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
