//! Risk assessment module.
//!
//! Independent, non-exclusive hazard checks: any number may fire, each
//! appending to one of three category lists (natural, climate, terrain)
//! plus mitigation guidance. Severity pairs (flood, drought, heat, cold,
//! wind) are mutually exclusive with the higher band checked first.
//! Seismic risk is always flagged as not assessed; there is no seismic
//! data source in V0.1. If nothing beyond the seismic flag fired, an
//! explicit all-clear entry keeps the section from reading as empty.

use terraplan_types::{EnvironmentalData, RiskAssessment, SlopeAssessment};

/// Produce the risk assessment for one snapshot.
pub fn risks_assessment(env: &EnvironmentalData) -> RiskAssessment {
    let rainfall = env.climate.annual_rainfall_mm;
    let min_temp = env.climate.min_temperature_c;
    let max_temp = env.climate.max_temperature_c;
    let wind = env.climate.avg_wind_speed_kmh;
    let zone = env.climate.climate_zone;
    let elevation = env.terrain.elevation_m;
    let slope = env.terrain.slope_assessment;
    let is_coastal = env.location.is_coastal;

    let mut natural_hazards = Vec::new();
    let mut climate_risks = Vec::new();
    let mut terrain_risks = Vec::new();
    let mut mitigations = Vec::new();

    let mut trace = vec![format!(
        "Assessing risks for {zone} zone, {elevation}m elevation, {slope} slope."
    )];

    // Flood: high band checked first, bands mutually exclusive.
    if elevation < 50 && rainfall > 1000.0 {
        natural_hazards.push(String::from(
            "High flood risk - low elevation combined with high annual rainfall",
        ));
        mitigations.push(String::from(
            "Build on elevated ground (>2m above surrounding terrain); raised foundations or stilts",
        ));
        mitigations.push(String::from(
            "Install swales and check dams upstream to slow runoff",
        ));
        trace.push(format!(
            "Flood risk: elevation {elevation}m + {rainfall}mm rainfall."
        ));
    } else if elevation < 100 && rainfall > 700.0 {
        natural_hazards.push(String::from(
            "Moderate flood risk - relatively low elevation with significant rainfall",
        ));
        mitigations.push(String::from(
            "Monitor seasonal water levels; maintain clear drainage channels",
        ));
        trace.push(format!(
            "Moderate flood risk: elevation {elevation}m + {rainfall}mm rainfall."
        ));
    }

    // Coastal storm surge: always flagged on the coast.
    if is_coastal {
        natural_hazards.push(String::from(
            "Coastal storm surge and tsunami risk - verify with local historical records",
        ));
        mitigations.push(String::from(
            "Build at least 30m from high-tide line; elevate floor level above storm surge estimate",
        ));
        trace.push(String::from("Coastal location: storm surge risk flagged."));
    }

    // Drought severity bands.
    if rainfall < 300.0 {
        climate_risks.push(String::from(
            "Severe drought risk - annual rainfall critically low for rain-fed agriculture",
        ));
        mitigations.push(String::from(
            "Establish water storage capacity for minimum 6-month supply before occupying site",
        ));
        mitigations.push(String::from(
            "Plant drought-tolerant windbreaks and ground cover to reduce evaporation",
        ));
        trace.push(format!("Drought risk: only {rainfall}mm annual rainfall."));
    } else if rainfall < 500.0 {
        climate_risks.push(String::from(
            "Drought-prone - seasonal water scarcity likely during dry months",
        ));
        mitigations.push(String::from(
            "Maintain 3-month water reserve at all times; implement greywater recycling",
        ));
        trace.push(format!("Drought-prone: {rainfall}mm annual rainfall."));
    }

    // Extreme heat bands.
    if max_temp > 45.0 {
        climate_risks.push(format!(
            "Extreme heat risk - temperatures exceeding 45\u{b0}C (recorded max: {max_temp}\u{b0}C)"
        ));
        mitigations.push(String::from(
            "Shade all outdoor work areas; restrict heavy labor to early morning and evening",
        ));
        mitigations.push(String::from(
            "Ensure access to sufficient water (>3L/person/day during extreme heat)",
        ));
        mitigations.push(String::from(
            "Passive cooling: thermal mass building, underground/semi-buried rooms",
        ));
        trace.push(format!("Extreme heat: max temp {max_temp}\u{b0}C."));
    } else if max_temp > 38.0 {
        climate_risks.push(format!(
            "High heat risk - temperatures above 38\u{b0}C (max: {max_temp}\u{b0}C)"
        ));
        mitigations.push(String::from(
            "Passive cooling and shade structures essential; cross-ventilation in all buildings",
        ));
        trace.push(format!("High heat: max temp {max_temp}\u{b0}C."));
    }

    // Extreme cold bands.
    if min_temp < -25.0 {
        climate_risks.push(format!(
            "Extreme cold risk - temperatures below -25\u{b0}C (min: {min_temp}\u{b0}C)"
        ));
        mitigations.push(String::from(
            "All water pipes must be buried below frost depth or insulated from freezing",
        ));
        mitigations.push(String::from(
            "Emergency thermal shelter capacity for human survival during cold snaps",
        ));
        mitigations.push(String::from(
            "Sufficient fuel or energy storage for multi-week heating without resupply",
        ));
        trace.push(format!("Extreme cold: min temp {min_temp}\u{b0}C."));
    } else if min_temp < -10.0 {
        climate_risks.push(format!(
            "Severe cold risk - regular deep frost (min: {min_temp}\u{b0}C)"
        ));
        mitigations.push(String::from(
            "Insulate all water infrastructure; ensure reliable heating system before winter",
        ));
        trace.push(format!("Severe cold: min temp {min_temp}\u{b0}C."));
    }

    // Wind / storm bands.
    if wind > 40.0 {
        climate_risks.push(format!(
            "High wind and storm risk - average wind speed {wind} km/h indicates frequent storms"
        ));
        mitigations.push(String::from(
            "All structures require engineered wind bracing and secured roof connections",
        ));
        mitigations.push(String::from(
            "Plant dense windbreaks on prevailing wind side before construction",
        ));
        trace.push(format!("High wind risk: avg {wind} km/h."));
    } else if wind > 25.0 {
        climate_risks.push(format!("Elevated wind exposure - average {wind} km/h"));
        mitigations.push(String::from(
            "Use wind-resistant roof design; create windbreaks with fast-growing trees",
        ));
        trace.push(format!("Elevated wind: avg {wind} km/h."));
    }

    // Terrain: erosion.
    let sloped = matches!(slope, SlopeAssessment::Steep | SlopeAssessment::Moderate);
    if sloped && rainfall > 800.0 {
        terrain_risks.push(String::from(
            "Soil erosion risk - steep or moderate slope with high rainfall is a severe erosion combination",
        ));
        mitigations.push(String::from(
            "Implement contour swales immediately to slow runoff velocity",
        ));
        mitigations.push(String::from(
            "Plant perennial ground cover and pioneer species on bare slopes before first rains",
        ));
        mitigations.push(String::from(
            "No bare soil: mulch all disturbed areas within 48 hours",
        ));
        trace.push(format!(
            "Erosion risk: {slope} slope + {rainfall}mm rainfall."
        ));
    }

    // Terrain: landslide. Independent of erosion and may co-occur with it.
    if slope == SlopeAssessment::Steep && rainfall > 1200.0 {
        terrain_risks.push(String::from(
            "Landslide risk - steep terrain with very high rainfall; do not build on or directly below steep slopes",
        ));
        mitigations.push(String::from(
            "Conduct thorough site assessment; build only on geologically stable ground",
        ));
        mitigations.push(String::from(
            "Maintain >50m buffer below all steep unstable slopes",
        ));
        trace.push(String::from(
            "Landslide risk: steep slope + very high rainfall.",
        ));
    }

    // Seismic: declared data-coverage limitation, never computed.
    natural_hazards.push(String::from(
        "Seismic risk: not assessed - no seismic data source integrated in V0.1",
    ));
    mitigations.push(String::from(
        "Verify seismic zone with local geological survey before construction",
    ));
    trace.push(String::from(
        "Seismic: V0.1 limitation - flagged for V0.2 integration with USGS seismic data.",
    ));

    // Minimum output: never return a misleadingly empty section.
    if natural_hazards.len() == 1 && climate_risks.is_empty() && terrain_risks.is_empty() {
        climate_risks.push(String::from(
            "No major climate or terrain risks identified for this location",
        ));
        trace.push(String::from(
            "No significant hazards detected. Conditions appear relatively stable.",
        ));
    }

    RiskAssessment {
        natural_hazards,
        climate_risks,
        terrain_risks,
        mitigation_strategies: mitigations,
        reasoning_trace: trace,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::snapshot;

    #[test]
    fn low_elevation_high_rainfall_flags_high_flood() {
        let mut env = snapshot();
        env.terrain.elevation_m = 20;
        env.climate.annual_rainfall_mm = 1500.0;
        let result = risks_assessment(&env);
        assert!(result
            .natural_hazards
            .iter()
            .any(|h| h.contains("High flood risk")));
        assert!(result
            .mitigation_strategies
            .iter()
            .any(|m| m.contains("raised foundations")));
    }

    #[test]
    fn upland_high_rainfall_has_no_high_flood_entry() {
        let mut env = snapshot();
        env.terrain.elevation_m = 800;
        env.climate.annual_rainfall_mm = 1500.0;
        let result = risks_assessment(&env);
        assert!(!result
            .natural_hazards
            .iter()
            .any(|h| h.contains("High flood risk")));
    }

    #[test]
    fn flood_bands_are_mutually_exclusive() {
        let mut env = snapshot();
        env.terrain.elevation_m = 20;
        env.climate.annual_rainfall_mm = 1500.0;
        let result = risks_assessment(&env);
        let flood_entries = result
            .natural_hazards
            .iter()
            .filter(|h| h.contains("flood"))
            .count();
        assert_eq!(flood_entries, 1);
    }

    #[test]
    fn moderate_flood_band_fires_between_thresholds() {
        let mut env = snapshot();
        env.terrain.elevation_m = 80;
        env.climate.annual_rainfall_mm = 900.0;
        let result = risks_assessment(&env);
        assert!(result
            .natural_hazards
            .iter()
            .any(|h| h.contains("Moderate flood risk")));
    }

    #[test]
    fn coastal_site_always_flags_storm_surge() {
        let mut env = snapshot();
        env.location.is_coastal = true;
        let result = risks_assessment(&env);
        assert!(result
            .natural_hazards
            .iter()
            .any(|h| h.contains("storm surge")));
    }

    #[test]
    fn severe_drought_below_300mm() {
        let mut env = snapshot();
        env.climate.annual_rainfall_mm = 200.0;
        let result = risks_assessment(&env);
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("Severe drought")));
        assert!(!result
            .climate_risks
            .iter()
            .any(|r| r.contains("Drought-prone")));
    }

    #[test]
    fn drought_prone_between_300_and_500mm() {
        let mut env = snapshot();
        env.climate.annual_rainfall_mm = 400.0;
        let result = risks_assessment(&env);
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("Drought-prone")));
    }

    #[test]
    fn heat_and_cold_bands_fire_on_extremes() {
        let mut env = snapshot();
        env.climate.max_temperature_c = 47.0;
        env.climate.min_temperature_c = -30.0;
        let result = risks_assessment(&env);
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("Extreme heat risk")));
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("Extreme cold risk")));
    }

    #[test]
    fn milder_extremes_use_lower_bands() {
        let mut env = snapshot();
        env.climate.max_temperature_c = 40.0;
        env.climate.min_temperature_c = -15.0;
        let result = risks_assessment(&env);
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("High heat risk")));
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("Severe cold risk")));
    }

    #[test]
    fn wind_bands_fire_in_order() {
        let mut env = snapshot();
        env.climate.avg_wind_speed_kmh = 45.0;
        let high = risks_assessment(&env);
        assert!(high
            .climate_risks
            .iter()
            .any(|r| r.contains("High wind and storm risk")));

        env.climate.avg_wind_speed_kmh = 30.0;
        let elevated = risks_assessment(&env);
        assert!(elevated
            .climate_risks
            .iter()
            .any(|r| r.contains("Elevated wind exposure")));
    }

    #[test]
    fn erosion_and_landslide_can_co_occur() {
        let mut env = snapshot();
        env.terrain.slope_assessment = SlopeAssessment::Steep;
        env.climate.annual_rainfall_mm = 1400.0;
        let result = risks_assessment(&env);
        assert!(result
            .terrain_risks
            .iter()
            .any(|r| r.contains("erosion")));
        assert!(result
            .terrain_risks
            .iter()
            .any(|r| r.contains("Landslide")));
    }

    #[test]
    fn moderate_slope_gets_erosion_but_not_landslide() {
        let mut env = snapshot();
        env.terrain.slope_assessment = SlopeAssessment::Moderate;
        env.climate.annual_rainfall_mm = 1400.0;
        let result = risks_assessment(&env);
        assert!(result
            .terrain_risks
            .iter()
            .any(|r| r.contains("erosion")));
        assert!(!result
            .terrain_risks
            .iter()
            .any(|r| r.contains("Landslide")));
    }

    #[test]
    fn seismic_is_always_flagged() {
        let result = risks_assessment(&snapshot());
        assert!(result
            .natural_hazards
            .iter()
            .any(|h| h.contains("Seismic risk: not assessed")));
        assert!(result
            .mitigation_strategies
            .iter()
            .any(|m| m.contains("geological survey")));
    }

    #[test]
    fn benign_site_gets_explicit_all_clear() {
        // Defaults: 700mm, flat, 200m, inland, mild temperatures.
        let result = risks_assessment(&snapshot());
        assert_eq!(result.natural_hazards.len(), 1);
        assert!(result
            .climate_risks
            .iter()
            .any(|r| r.contains("No major climate or terrain risks")));
    }
}
