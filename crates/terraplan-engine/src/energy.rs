//! Energy strategy module.
//!
//! Primary-source selection is a priority cascade evaluated in order with
//! the first matching condition winning: micro-hydro, then solar, then
//! wind, then biomass as the universal fallback (always feasible, no
//! manufactured equipment required). The order is a design decision, not
//! an unordered rule set; the bands overlap in their natural-language
//! description but are mutually exclusive via early return.

use terraplan_types::{EnergyStrategy, EnvironmentalData};

/// Rainfall floor for micro-hydro viability, mm/year.
const HYDRO_RAINFALL_MM: f64 = 1000.0;

/// Elevation floor for micro-hydro head pressure, metres.
const HYDRO_ELEVATION_M: i32 = 500;

/// Daily sunshine hours above which solar PV is the primary source.
const SOLAR_HOURS_DAILY: f64 = 5.0;

/// Wind speed at which micro-wind becomes a worthwhile secondary, km/h.
const WIND_SECONDARY_KMH: f64 = 15.0;

/// Wind speed at which micro-wind can carry primary load, km/h.
const WIND_PRIMARY_KMH: f64 = 20.0;

/// Produce the energy sourcing strategy for one snapshot.
pub fn energy_strategy(env: &EnvironmentalData) -> EnergyStrategy {
    let rainfall = env.climate.annual_rainfall_mm;
    let wind = env.climate.avg_wind_speed_kmh;
    let elevation = env.terrain.elevation_m;

    let sunshine_daily = (env.climate.sunshine_hours_annual / 365.0 * 10.0).round() / 10.0;

    let mut trace = vec![format!(
        "Sunshine: {sunshine_daily}h/day ({}h/yr). Wind: {wind} km/h avg. Rainfall: {rainfall}mm.",
        env.climate.sunshine_hours_annual
    )];

    let (primary_source, secondary_sources, mut techniques) =
        if rainfall >= HYDRO_RAINFALL_MM && elevation >= HYDRO_ELEVATION_M {
            // Micro-hydro is highest priority where rainfall and head
            // pressure both exist.
            trace.push(format!(
                "High rainfall ({rainfall}mm) + elevation ({elevation}m): micro-hydro is viable primary source."
            ));
            let secondaries = vec![
                String::from("Solar photovoltaic"),
                String::from("Biomass gasification"),
                String::from("Solar thermal water heating"),
            ];
            let techniques = vec![
                String::from("Run-of-river micro-hydro (1-100kW): no large dam required"),
                String::from("Pelton wheel or Turgo turbine for high-head, low-flow sites"),
                String::from("Crossflow turbine for low-head, high-flow sites"),
                String::from("Battery bank or gravity water storage for load shifting"),
                String::from("Solar PV as backup during low-flow dry season"),
                String::from("Biomass cookstove with back-boiler for water heating"),
            ];
            trace.push(String::from(
                "Selected micro-hydro primary with solar + biomass backup.",
            ));
            (
                String::from("Micro-hydroelectric (run-of-river)"),
                secondaries,
                techniques,
            )
        } else if sunshine_daily >= SOLAR_HOURS_DAILY {
            trace.push(format!(
                "Strong sunshine ({sunshine_daily}h/day): solar PV is viable primary source."
            ));
            let mut secondaries = vec![
                String::from("Solar thermal water and space heating"),
                String::from("Biomass cookstove and biogas"),
            ];
            if wind >= WIND_SECONDARY_KMH {
                secondaries.insert(0, String::from("Micro-wind turbine"));
                trace.push(format!(
                    "Wind speed {wind} km/h: added micro-wind as secondary source."
                ));
            }
            let techniques = vec![
                String::from("Off-grid solar PV array (start with 500W-2kW per household)"),
                String::from("MPPT charge controller for battery bank"),
                String::from("Deep-cycle battery storage (lead-acid or lithium if available)"),
                String::from("Solar water heater (thermosiphon flat-plate collector)"),
                String::from("Passive solar design to reduce heating energy demand"),
                String::from("LED lighting only to minimize electrical load"),
                String::from("Biomass rocket stove for cooking (90% efficient vs. open fire)"),
            ];
            trace.push(String::from(
                "Selected solar PV primary with solar thermal + biomass backup.",
            ));
            (String::from("Solar photovoltaic"), secondaries, techniques)
        } else if wind >= WIND_PRIMARY_KMH {
            trace.push(format!(
                "High wind ({wind} km/h avg): micro-wind is viable primary source."
            ));
            let secondaries = vec![
                String::from("Solar photovoltaic"),
                String::from("Biomass cookstove"),
                String::from("Solar thermal"),
            ];
            let techniques = vec![
                String::from("Small wind turbine (500W-5kW) on tower 10-15m above obstacles"),
                String::from("Battery storage to smooth intermittent wind generation"),
                String::from("Hybrid controller combining wind and solar inputs"),
                String::from("Solar PV array sized to cover calm-wind periods"),
                String::from("Biomass as cooking and heating fallback"),
            ];
            trace.push(String::from(
                "Selected micro-wind primary with solar + biomass backup.",
            ));
            (String::from("Micro-wind turbine"), secondaries, techniques)
        } else {
            trace.push(String::from(
                "Limited solar and wind resources: biomass as primary energy source.",
            ));
            let secondaries = vec![
                String::from("Solar photovoltaic (even low-sun panels generate useful power)"),
                String::from("Solar thermal water heating"),
            ];
            let techniques = vec![
                String::from(
                    "High-efficiency rocket mass heater for space heating (10x less fuel than open fire)",
                ),
                String::from("Rocket stove for cooking (uses 75-90% less wood than open fire)"),
                String::from("Biogas digester fed by animal manure and organic waste"),
                String::from("Biogas for lighting (gas mantle lamp) and cooking"),
                String::from("Even 1-2h/day sun generates useful solar PV output for LED lighting"),
                String::from("Community-scale wood lot management for sustainable fuel supply"),
            ];
            trace.push(String::from(
                "Selected biomass primary system with solar supplement and biogas digester.",
            ));
            (
                String::from("Biomass (wood gasification and biogas)"),
                secondaries,
                techniques,
            )
        };

    // Universal efficiency measures, appended to every branch.
    techniques.push(String::from(
        "Energy audit first: reduce demand before sizing supply systems",
    ));
    techniques.push(String::from(
        "Natural ventilation/passive design reduces air conditioning to zero",
    ));

    EnergyStrategy {
        primary_source,
        secondary_sources,
        estimated_solar_hours_daily: sunshine_daily,
        techniques,
        reasoning_trace: trace,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::snapshot;

    #[test]
    fn high_rainfall_upland_selects_micro_hydro() {
        let mut env = snapshot();
        env.climate.annual_rainfall_mm = 1500.0;
        env.terrain.elevation_m = 800;
        // Even with strong sunshine the cascade stops at hydro.
        env.climate.sunshine_hours_annual = 3000.0;
        let result = energy_strategy(&env);
        assert!(result.primary_source.contains("Micro-hydro"));
    }

    #[test]
    fn high_rainfall_lowland_does_not_select_hydro() {
        let mut env = snapshot();
        env.climate.annual_rainfall_mm = 1500.0;
        env.terrain.elevation_m = 100;
        env.climate.sunshine_hours_annual = 1000.0;
        env.climate.avg_wind_speed_kmh = 5.0;
        let result = energy_strategy(&env);
        assert!(!result.primary_source.contains("hydro"));
    }

    #[test]
    fn strong_sunshine_selects_solar() {
        let mut env = snapshot();
        env.climate.sunshine_hours_annual = 2500.0; // ~6.8h/day
        env.climate.avg_wind_speed_kmh = 5.0;
        let result = energy_strategy(&env);
        assert_eq!(result.primary_source, "Solar photovoltaic");
    }

    #[test]
    fn solar_with_usable_wind_adds_micro_wind_secondary() {
        let mut env = snapshot();
        env.climate.sunshine_hours_annual = 2500.0;
        env.climate.avg_wind_speed_kmh = 18.0;
        let result = energy_strategy(&env);
        assert_eq!(
            result.secondary_sources.first().map(String::as_str),
            Some("Micro-wind turbine")
        );
    }

    #[test]
    fn low_sun_high_wind_selects_micro_wind() {
        let mut env = snapshot();
        env.climate.sunshine_hours_annual = 1000.0; // ~2.7h/day
        env.climate.avg_wind_speed_kmh = 25.0;
        let result = energy_strategy(&env);
        assert_eq!(result.primary_source, "Micro-wind turbine");
    }

    #[test]
    fn low_everything_falls_back_to_biomass() {
        let mut env = snapshot();
        env.climate.sunshine_hours_annual = 800.0;
        env.climate.avg_wind_speed_kmh = 8.0;
        env.climate.annual_rainfall_mm = 400.0;
        let result = energy_strategy(&env);
        assert!(result.primary_source.contains("Biomass"));
    }

    #[test]
    fn universal_measures_appended_to_every_branch() {
        for (sunshine, wind, rainfall, elevation) in [
            (3000.0, 10.0, 1500.0, 800), // hydro
            (2500.0, 10.0, 700.0, 200),  // solar
            (1000.0, 25.0, 700.0, 200),  // wind
            (800.0, 5.0, 400.0, 200),    // biomass
        ] {
            let mut env = snapshot();
            env.climate.sunshine_hours_annual = sunshine;
            env.climate.avg_wind_speed_kmh = wind;
            env.climate.annual_rainfall_mm = rainfall;
            env.terrain.elevation_m = elevation;
            let result = energy_strategy(&env);
            let tail: Vec<_> = result
                .techniques
                .iter()
                .rev()
                .take(2)
                .map(String::as_str)
                .collect();
            assert!(tail.contains(&"Energy audit first: reduce demand before sizing supply systems"));
            assert!(tail
                .contains(&"Natural ventilation/passive design reduces air conditioning to zero"));
        }
    }

    #[test]
    fn daily_sunshine_is_rounded_to_one_decimal() {
        let mut env = snapshot();
        env.climate.sunshine_hours_annual = 2000.0; // 5.479... -> 5.5
        let result = energy_strategy(&env);
        assert!((result.estimated_solar_hours_daily - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn trace_is_never_empty() {
        let result = energy_strategy(&snapshot());
        assert!(result.reasoning_trace.len() >= 3);
    }
}
