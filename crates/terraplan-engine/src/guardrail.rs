//! Pre-flight ethical guardrail over raw coordinates.
//!
//! Every request passes through [`evaluate_guardrail`] before any data
//! fetch or strategy computation. The checks run in a fixed order; the
//! first failing check short-circuits with `allowed = false` and only the
//! checks passed up to that point. The passed-check names end up in the
//! blueprint's reasoning trace as an audit trail.

use terraplan_types::{Coordinates, GuardrailResult};

/// Latitude below which the Antarctic-interior warning fires.
const ANTARCTIC_LATITUDE: f64 = -60.0;

/// Half-width of the Null Island rejection box in degrees.
const NULL_ISLAND_EPSILON: f64 = 0.01;

/// Evaluate the ethical guardrail for a coordinate pair.
///
/// Checks, in order:
///
/// 1. Coordinate range: latitude in `[-90, 90]`, longitude in
///    `[-180, 180]`, both finite. Rejects out-of-range input.
/// 2. Null Island: `|lat| < 0.01` and `|lon| < 0.01` is almost always an
///    unset default, and it is open ocean, so analysis is meaningless.
/// 3. Antarctic interior: latitude below -60 adds a warning but does not
///    block, since very limited infrastructure is feasible there.
/// 4. Three always-true declarations recorded for the audit trail:
///    disclaimer injection, no-persistence attestation, and the
///    humanitarian purpose framework.
pub fn evaluate_guardrail(coords: Coordinates) -> GuardrailResult {
    let mut checks_passed = Vec::new();
    let mut warnings = Vec::new();

    // Check 1: coordinate range validity. Non-finite values would pass a
    // naive comparison chain, so they are rejected explicitly.
    if !coords.latitude.is_finite()
        || !coords.longitude.is_finite()
        || coords.latitude < -90.0
        || coords.latitude > 90.0
        || coords.longitude < -180.0
        || coords.longitude > 180.0
    {
        return GuardrailResult {
            allowed: false,
            checks_passed,
            rejection_reason: Some(String::from("Coordinates out of valid range.")),
            warnings,
        };
    }
    checks_passed.push(String::from("Coordinate range validation passed"));

    // Check 2: Null Island rejection.
    if coords.latitude.abs() < NULL_ISLAND_EPSILON && coords.longitude.abs() < NULL_ISLAND_EPSILON {
        return GuardrailResult {
            allowed: false,
            checks_passed,
            rejection_reason: Some(String::from(
                "Coordinates (0, 0) rejected - this is \"Null Island\", likely an unset \
                 default value. Please provide real geographic coordinates.",
            )),
            warnings,
        };
    }
    checks_passed.push(String::from("Null Island check passed"));

    // Check 3: Antarctic interior warning. Analysis still allowed.
    if coords.latitude < ANTARCTIC_LATITUDE {
        warnings.push(format!(
            "Location is in Antarctica (lat {}). Recommendations may be unreliable - very \
             limited infrastructure is feasible at this latitude.",
            coords.latitude
        ));
    }
    checks_passed.push(String::from("Antarctic interior check passed"));

    // Checks 4-6: structural commitments recorded on every allowed request.
    checks_passed.push(String::from(
        "Decision-support disclaimer will be injected into output",
    ));
    checks_passed.push(String::from(
        "No coordinate data will be persisted - stateless request confirmed",
    ));
    checks_passed.push(String::from(
        "Request evaluated under humanitarian purpose framework",
    ));

    GuardrailResult {
        allowed: true,
        checks_passed,
        rejection_reason: None,
        warnings,
    }
}
