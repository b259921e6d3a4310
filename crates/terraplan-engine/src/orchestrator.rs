//! Blueprint orchestrator.
//!
//! Sequences the five strategy modules over one shared immutable snapshot,
//! aggregates the reasoning trace, and assembles the final [`Blueprint`].
//! The guardrail runs before this point (the caller handles rejection);
//! the caller is also the single allowed mutation point for injecting
//! guardrail check results into the built trace before the response
//! freezes.

use chrono::{DateTime, Utc};
use terraplan_types::{Blueprint, BlueprintMetadata, EnvironmentalData};

use crate::energy::energy_strategy;
use crate::error::EngineError;
use crate::food::food_strategy;
use crate::reasoning::TraceBuilder;
use crate::risks::risks_assessment;
use crate::shelter::shelter_strategy;
use crate::water::water_strategy;

/// Blueprint format version tag. The JSON shape must stay stable for a
/// given version.
pub const BLUEPRINT_VERSION: &str = "0.1.0";

/// Decision-support disclaimer attached to every blueprint.
pub const BLUEPRINT_DISCLAIMER: &str =
    "This is decision support only. Not professional engineering advice. Verify all \
     recommendations with local experts before implementation. The Terraplan project \
     accepts no liability for actions taken based on this output.";

/// Reject snapshots whose numeric fields are NaN or infinite.
///
/// Threshold comparisons against non-finite values silently misfire, so a
/// malformed snapshot is an internal fault, not a degraded input.
fn validate_snapshot(env: &EnvironmentalData) -> Result<(), EngineError> {
    let checks: [(&'static str, f64); 7] = [
        ("climate.annual_rainfall_mm", env.climate.annual_rainfall_mm),
        ("climate.avg_temperature_c", env.climate.avg_temperature_c),
        ("climate.min_temperature_c", env.climate.min_temperature_c),
        ("climate.max_temperature_c", env.climate.max_temperature_c),
        ("climate.avg_wind_speed_kmh", env.climate.avg_wind_speed_kmh),
        ("climate.humidity_percent", env.climate.humidity_percent),
        (
            "climate.sunshine_hours_annual",
            env.climate.sunshine_hours_annual,
        ),
    ];
    for (field, value) in checks {
        if !value.is_finite() {
            return Err(EngineError::MalformedSnapshot { field });
        }
    }
    Ok(())
}

/// Generate a blueprint, stamping the current time.
///
/// `warnings` are fetch-layer degradation notes appended to the trace's
/// limitations.
pub fn generate_blueprint(
    env: &EnvironmentalData,
    warnings: &[String],
) -> Result<Blueprint, EngineError> {
    generate_blueprint_at(env, warnings, Utc::now())
}

/// Generate a blueprint with an explicit generation timestamp.
///
/// Deterministic: identical inputs (including `now`) produce
/// field-for-field identical output.
pub fn generate_blueprint_at(
    env: &EnvironmentalData,
    warnings: &[String],
    now: DateTime<Utc>,
) -> Result<Blueprint, EngineError> {
    validate_snapshot(env)?;

    let mut builder = TraceBuilder::new();

    // Run all strategy modules against the same snapshot.
    let water = water_strategy(env);
    let food = food_strategy(env);
    let shelter = shelter_strategy(env);
    let energy = energy_strategy(env);
    let risks = risks_assessment(env);

    // One orchestrator-level summary line per module.
    builder
        .add_step(
            "orchestrator",
            &format!("Water strategy: \"{}\"", water.primary_method),
        )
        .add_step(
            "orchestrator",
            &format!(
                "Food strategy: zone={}, crops={}",
                food.climate_zone,
                food.recommended_crops.len()
            ),
        )
        .add_step(
            "orchestrator",
            &format!(
                "Shelter strategy: materials={}",
                shelter.recommended_materials.len()
            ),
        )
        .add_step(
            "orchestrator",
            &format!("Energy strategy: primary=\"{}\"", energy.primary_source),
        )
        .add_step(
            "orchestrator",
            &format!(
                "Risks identified: {}",
                risks
                    .natural_hazards
                    .len()
                    .saturating_add(risks.climate_risks.len())
                    .saturating_add(risks.terrain_risks.len())
            ),
        );

    // Known V0.1 limitations, flagged on every blueprint.
    builder.add_limitation("V0.1: Seismic data not integrated. Verify locally.");
    builder.add_limitation("V0.1: Coastal detection is approximate. Verify locally.");
    builder.add_limitation(
        "V0.1: Soil classification data not included. Field assessment recommended.",
    );
    builder.add_limitation("V0.1: All strategies are rule-based. AI reasoning deferred to V0.2.");
    builder.add_limitation(
        "V0.1: Humidity uses a global average default (60%) - Open-Meteo free tier.",
    );

    let reasoning_trace = builder.build(&env.data_sources, warnings);

    Ok(Blueprint {
        metadata: BlueprintMetadata {
            coordinates: env.coordinates,
            location_name: env.location.display_name.clone(),
            generated_at: now,
            version: String::from(BLUEPRINT_VERSION),
            disclaimer: String::from(BLUEPRINT_DISCLAIMER),
        },
        water_strategy: water,
        food_strategy: food,
        shelter_strategy: shelter,
        energy_strategy: energy,
        risks,
        reasoning_trace,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use terraplan_types::{ConfidenceLevel, SourceStatus};

    use super::*;
    use crate::test_support::{snapshot, tropical_snapshot};

    #[test]
    fn assembles_all_sections() {
        let bp = generate_blueprint(&tropical_snapshot(), &[]).unwrap();
        assert!(!bp.water_strategy.reasoning_trace.is_empty());
        assert!(!bp.food_strategy.reasoning_trace.is_empty());
        assert!(!bp.shelter_strategy.reasoning_trace.is_empty());
        assert!(!bp.energy_strategy.reasoning_trace.is_empty());
        assert!(!bp.risks.reasoning_trace.is_empty());
        assert_eq!(bp.reasoning_trace.rules_applied.len(), 5);
    }

    #[test]
    fn metadata_carries_version_and_disclaimer() {
        let bp = generate_blueprint(&tropical_snapshot(), &[]).unwrap();
        assert_eq!(bp.metadata.version, "0.1.0");
        assert!(bp.metadata.disclaimer.contains("decision support"));
        assert_eq!(bp.metadata.location_name, "Nairobi, Kenya");
    }

    #[test]
    fn healthy_sources_give_high_confidence() {
        let bp = generate_blueprint(&tropical_snapshot(), &[]).unwrap();
        assert_eq!(bp.reasoning_trace.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn two_failed_sources_give_low_confidence() {
        let mut env = tropical_snapshot();
        for record in env.data_sources.iter_mut().take(2) {
            record.status = SourceStatus::Failed;
            record.error = Some(String::from("HTTP 503"));
        }
        let bp = generate_blueprint(&env, &[]).unwrap();
        assert_eq!(bp.reasoning_trace.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn limitations_include_seismic_and_soil() {
        let bp = generate_blueprint(&tropical_snapshot(), &[]).unwrap();
        let joined = bp.reasoning_trace.limitations.join(" ");
        assert!(joined.contains("Seismic"));
        assert!(joined.contains("Soil"));
        assert!(bp.reasoning_trace.limitations.len() >= 5);
    }

    #[test]
    fn external_warnings_land_in_limitations() {
        let warnings = vec![String::from(
            "Climate data unavailable: timeout. Using global average fallback values.",
        )];
        let bp = generate_blueprint(&snapshot(), &warnings).unwrap();
        assert!(bp
            .reasoning_trace
            .limitations
            .iter()
            .any(|l| l.contains("Climate data unavailable")));
    }

    #[test]
    fn structurally_idempotent_at_fixed_clock() {
        let env = tropical_snapshot();
        let now = Utc::now();
        let a = generate_blueprint_at(&env, &[], now).unwrap();
        let b = generate_blueprint_at(&env, &[], now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_finite_snapshot_fields() {
        let mut env = snapshot();
        env.climate.annual_rainfall_mm = f64::NAN;
        let err = generate_blueprint(&env, &[]).unwrap_err();
        assert!(err.to_string().contains("annual_rainfall_mm"));
    }

    #[test]
    fn orchestrator_steps_are_tagged() {
        let bp = generate_blueprint(&snapshot(), &[]).unwrap();
        assert!(bp
            .reasoning_trace
            .rules_applied
            .iter()
            .all(|s| s.starts_with("[orchestrator]")));
    }

    #[test]
    fn end_to_end_tropical_site() {
        // Nairobi-like snapshot: 1050mm, tropical, 1660m, gentle, inland,
        // all three sources healthy.
        let bp = generate_blueprint(&tropical_snapshot(), &[]).unwrap();
        assert_eq!(bp.reasoning_trace.confidence_level, ConfidenceLevel::High);
        assert_eq!(bp.metadata.version, "0.1.0");
        // 1050mm > 1000: rainwater harvesting; 1660m > 500 and rainfall
        // > 1000: micro-hydro wins the energy cascade.
        assert_eq!(bp.water_strategy.primary_method, "Rainwater harvesting");
        assert!(bp.energy_strategy.primary_source.contains("Micro-hydro"));
    }
}
