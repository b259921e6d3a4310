//! Endpoint handlers for the blueprint API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/health` | Liveness probe |
//! | `POST` | `/api/blueprint` | Generate a blueprint for a coordinate |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use terraplan_engine::{evaluate_guardrail, generate_blueprint};
use terraplan_types::{ConfidenceLevel, CoordinateInput};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index() -> impl IntoResponse {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Terraplan</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #3fb950; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        code {{ background: #161b22; padding: 0.2rem 0.4rem; border-radius: 4px; }}
        .status {{ color: #3fb950; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Terraplan</h1>
    <p class="subtitle">Regenerative development blueprints from open environmental data -- v{version}</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/health">GET /api/health</a> -- Liveness probe</li>
        <li><code>POST /api/blueprint</code> -- Generate a blueprint
            (body: <code>{{"latitude": -1.286, "longitude": 36.817}}</code>)</li>
    </ul>

    <p>Decision support only. Verify all recommendations with local experts.</p>
</body>
</html>"#,
        version = env!("CARGO_PKG_VERSION"),
    ))
}

// ---------------------------------------------------------------------------
// GET /api/health -- liveness probe
// ---------------------------------------------------------------------------

/// Return a lightweight liveness response for deployment probes.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

// ---------------------------------------------------------------------------
// POST /api/blueprint -- generate a blueprint
// ---------------------------------------------------------------------------

/// Reject out-of-range or non-numeric coordinates at the boundary.
fn validate_input(input: CoordinateInput) -> Result<CoordinateInput, ApiError> {
    if !input.latitude.is_finite() || !(-90.0..=90.0).contains(&input.latitude) {
        return Err(ApiError::Validation(String::from(
            "latitude must be a number between -90 and 90",
        )));
    }
    if !input.longitude.is_finite() || !(-180.0..=180.0).contains(&input.longitude) {
        return Err(ApiError::Validation(String::from(
            "longitude must be a number between -180 and 180",
        )));
    }
    Ok(input)
}

const fn confidence_header(level: ConfidenceLevel) -> HeaderValue {
    match level {
        ConfidenceLevel::Low => HeaderValue::from_static("low"),
        ConfidenceLevel::Medium => HeaderValue::from_static("medium"),
        ConfidenceLevel::High => HeaderValue::from_static("high"),
    }
}

/// Generate a regenerative development blueprint for one coordinate.
///
/// Request flow: parse and validate the body, run the ethical guardrail,
/// fetch environmental data with graceful degradation, generate the
/// blueprint, then inject the guardrail results into the reasoning trace
/// before the response freezes.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CoordinateInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(input) = payload.map_err(|_| {
        ApiError::Validation(String::from(
            "Invalid request body - expected JSON with latitude and longitude.",
        ))
    })?;
    let input = validate_input(input)?;
    let coords = input.coordinates();

    let guardrail = evaluate_guardrail(coords);
    if !guardrail.allowed {
        let reason = guardrail
            .rejection_reason
            .unwrap_or_else(|| String::from("Request rejected."));
        tracing::warn!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            reason,
            "guardrail rejection"
        );
        return Err(ApiError::GuardrailRejected(reason));
    }

    let outcome = state.fetcher.fetch(coords).await;
    if outcome.all_failed {
        return Err(ApiError::UpstreamUnavailable {
            failed_sources: outcome.warnings,
        });
    }

    let mut blueprint = generate_blueprint(&outcome.data, &outcome.warnings)
        .map_err(|e| ApiError::Engine(e.to_string()))?;

    // Single allowed mutation point: fold guardrail results into the
    // trace before the response is written.
    blueprint
        .reasoning_trace
        .ethical_checks_passed
        .extend(guardrail.checks_passed);
    blueprint
        .reasoning_trace
        .limitations
        .extend(guardrail.warnings);

    let confidence = blueprint.reasoning_trace.confidence_level;

    tracing::info!(
        location = blueprint.metadata.location_name,
        confidence = %confidence,
        "blueprint generated"
    );

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-data-sources",
        HeaderValue::from_static("open-meteo,open-elevation,nominatim"),
    );
    headers.insert("x-confidence-level", confidence_header(confidence));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

    Ok((headers, Json(blueprint)).into_response())
}
