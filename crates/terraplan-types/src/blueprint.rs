//! Blueprint assembly types: guardrail verdicts, the aggregated reasoning
//! trace, and the final [`Blueprint`] record.
//!
//! A blueprint is assembled once per request and never persisted. Its JSON
//! shape is the de facto external contract consumed by the dashboard and
//! export collaborators; field names must remain stable for backward
//! compatibility of the `version` tag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ConfidenceLevel;
use crate::environment::{Coordinates, DataSourceRecord};
use crate::strategy::{
    EnergyStrategy, FoodStrategy, RiskAssessment, ShelterStrategy, WaterStrategy,
};

/// Request body for `POST /api/blueprint`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CoordinateInput {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl CoordinateInput {
    /// View the input as engine [`Coordinates`].
    pub const fn coordinates(self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Verdict of the pre-flight ethical guardrail over raw coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GuardrailResult {
    /// Whether the request may proceed to data fetch and strategy
    /// computation.
    pub allowed: bool,
    /// Names of the checks passed before the first failure (all of them
    /// when `allowed` is true).
    pub checks_passed: Vec<String>,
    /// Why the request was rejected. Present exactly when `allowed` is
    /// false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    /// Non-blocking cautions (e.g. Antarctic interior reliability).
    pub warnings: Vec<String>,
}

/// The aggregated reasoning trace attached to a blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ReasoningTrace {
    /// Provenance of every external source consulted for the snapshot.
    pub data_sources_used: Vec<DataSourceRecord>,
    /// Module-tagged rule summaries in application order.
    pub rules_applied: Vec<String>,
    /// Snapshot health summary derived from source statuses.
    pub confidence_level: ConfidenceLevel,
    /// Known caveats: fixed V0.1 limitations plus fetch-layer warnings
    /// plus guardrail warnings.
    pub limitations: Vec<String>,
    /// Names of the ethical checks that passed for this request.
    pub ethical_checks_passed: Vec<String>,
}

/// Blueprint metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BlueprintMetadata {
    /// The coordinate the blueprint was generated for.
    pub coordinates: Coordinates,
    /// Human-readable place name from the location adapter.
    pub location_name: String,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Fixed blueprint format version tag.
    pub version: String,
    /// Fixed decision-support disclaimer, always present.
    pub disclaimer: String,
}

/// A complete regenerative development blueprint for one coordinate.
///
/// Immutable once assembled; request-scoped; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Blueprint {
    /// Coordinates, location name, timestamp, version, disclaimer.
    pub metadata: BlueprintMetadata,
    /// Water access strategy.
    pub water_strategy: WaterStrategy,
    /// Food production strategy.
    pub food_strategy: FoodStrategy,
    /// Shelter construction strategy.
    pub shelter_strategy: ShelterStrategy,
    /// Energy sourcing strategy.
    pub energy_strategy: EnergyStrategy,
    /// Environmental hazard assessment.
    pub risks: RiskAssessment,
    /// The aggregated reasoning trace.
    pub reasoning_trace: ReasoningTrace,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn guardrail_result_omits_absent_rejection_reason() {
        let result = GuardrailResult {
            allowed: true,
            checks_passed: vec![String::from("Coordinate range validation passed")],
            rejection_reason: None,
            warnings: Vec::new(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("rejection_reason").is_none());
        assert_eq!(json["allowed"], true);
    }

    #[test]
    fn coordinate_input_converts_to_coordinates() {
        let input = CoordinateInput {
            latitude: 51.5,
            longitude: -0.12,
        };
        let coords = input.coordinates();
        assert!((coords.latitude - 51.5).abs() < f64::EPSILON);
        assert!((coords.longitude + 0.12).abs() < f64::EPSILON);
    }
}
