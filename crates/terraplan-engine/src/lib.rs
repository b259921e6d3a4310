//! Terraplan rule engine.
//!
//! Pure, deterministic strategy derivation over an immutable environmental
//! snapshot. No I/O, no clock reads except where a timestamp is passed in,
//! no shared state. Every module takes `&EnvironmentalData` and returns an
//! owned strategy value with a human-readable reasoning trace.
//!
//! ## Layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`guardrail`] | Pre-generation ethical checks on raw coordinates |
//! | [`water`] | Rainfall-band water sourcing strategy |
//! | [`food`] | Climate-zone crop selection and growing season |
//! | [`shelter`] | Materials and construction techniques |
//! | [`energy`] | Priority-cascade energy source selection |
//! | [`risks`] | Independent hazard checks and mitigations |
//! | [`reasoning`] | Trace aggregation and confidence derivation |
//! | [`orchestrator`] | Sequences the modules into a [`Blueprint`](terraplan_types::Blueprint) |

pub mod energy;
pub mod error;
pub mod food;
pub mod guardrail;
pub mod orchestrator;
pub mod reasoning;
pub mod risks;
pub mod shelter;
pub mod water;

pub use energy::energy_strategy;
pub use error::EngineError;
pub use food::food_strategy;
pub use guardrail::evaluate_guardrail;
pub use orchestrator::{
    generate_blueprint, generate_blueprint_at, BLUEPRINT_DISCLAIMER, BLUEPRINT_VERSION,
};
pub use reasoning::{derive_confidence, TraceBuilder};
pub use risks::risks_assessment;
pub use shelter::shelter_strategy;
pub use water::water_strategy;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    //! Shared snapshot fixtures for module tests.

    use chrono::Utc;
    use terraplan_types::{
        ClimateData, ClimateZone, Coordinates, DataSourceRecord, EnvironmentalData, LocationData,
        SeasonalVariation, SlopeAssessment, SourceStatus, TerrainData,
    };

    /// Neutral temperate inland snapshot. Tests mutate the fields they
    /// care about.
    pub fn snapshot() -> EnvironmentalData {
        EnvironmentalData {
            coordinates: Coordinates {
                latitude: 10.0,
                longitude: 10.0,
            },
            climate: ClimateData {
                annual_rainfall_mm: 700.0,
                avg_temperature_c: 20.0,
                min_temperature_c: 10.0,
                max_temperature_c: 30.0,
                dominant_wind_direction: String::from("N"),
                avg_wind_speed_kmh: 10.0,
                humidity_percent: 60.0,
                sunshine_hours_annual: 2000.0,
                climate_zone: ClimateZone::Temperate,
                seasonal_variation: SeasonalVariation::Moderate,
            },
            terrain: TerrainData {
                elevation_m: 200,
                slope_assessment: SlopeAssessment::Flat,
            },
            location: LocationData {
                display_name: String::from("Test location"),
                country: String::from("Test"),
                country_code: String::from("xx"),
                region: String::from("Test"),
                is_coastal: false,
            },
            data_sources: Vec::new(),
        }
    }

    /// Nairobi-like tropical upland snapshot with three healthy sources.
    pub fn tropical_snapshot() -> EnvironmentalData {
        let mut env = snapshot();
        env.coordinates = Coordinates {
            latitude: -1.286,
            longitude: 36.817,
        };
        env.climate.annual_rainfall_mm = 1050.0;
        env.climate.avg_temperature_c = 19.0;
        env.climate.min_temperature_c = 12.0;
        env.climate.max_temperature_c = 26.0;
        env.climate.sunshine_hours_annual = 2500.0;
        env.climate.climate_zone = ClimateZone::Tropical;
        env.climate.seasonal_variation = SeasonalVariation::Low;
        env.terrain.elevation_m = 1660;
        env.terrain.slope_assessment = SlopeAssessment::Gentle;
        env.location.display_name = String::from("Nairobi, Kenya");
        env.location.country = String::from("Kenya");
        env.location.country_code = String::from("ke");
        env.location.region = String::from("Nairobi County");
        env.data_sources = ["open-meteo", "open-elevation", "nominatim"]
            .into_iter()
            .map(|name| DataSourceRecord {
                source: String::from(name),
                endpoint: format!("https://{name}.example/v1"),
                fetched_at: Utc::now(),
                status: SourceStatus::Success,
                error: None,
            })
            .collect();
        env
    }
}
