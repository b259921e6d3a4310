//! Adapter error types.

use thiserror::Error;

/// Errors produced while talking to an external data source.
///
/// These never escape the fetch layer as hard failures. Each one is
/// folded into a failed or fallback [`DataSourceRecord`]
/// (`terraplan_types::DataSourceRecord`) so blueprint generation can
/// degrade instead of abort.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Response body, truncated by the caller if oversized.
        body: String,
    },

    /// The response decoded but did not contain usable data.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl AdapterError {
    /// Wrap a `reqwest` transport error.
    pub fn request(err: &reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}
