//! Environmental snapshot types consumed by the rule engine.
//!
//! An [`EnvironmentalData`] value is assembled by the adapter layer from
//! three independent sources (climate, terrain, reverse geocoding) and is
//! immutable from the engine's point of view. Every strategy module
//! receives the same snapshot; degraded sources are recorded in
//! [`DataSourceRecord`] entries rather than surfaced as errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ClimateZone, SeasonalVariation, SlopeAssessment, SourceStatus};

/// A geographic point in decimal degrees.
///
/// Latitude is constrained to `[-90, 90]` and longitude to `[-180, 180]`;
/// the ethical guardrail enforces the constraint before any processing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Latitude in decimal degrees, south negative.
    pub latitude: f64,
    /// Longitude in decimal degrees, west negative.
    pub longitude: f64,
}

/// Annualized climate aggregates for one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClimateData {
    /// Total precipitation over the trailing year, millimetres.
    pub annual_rainfall_mm: f64,
    /// Mean daily temperature across the year, °C.
    pub avg_temperature_c: f64,
    /// Coldest daily minimum observed across the year, °C.
    pub min_temperature_c: f64,
    /// Hottest daily maximum observed across the year, °C.
    pub max_temperature_c: f64,
    /// Most frequent of the 8 cardinal wind sectors, or `"unknown"`.
    pub dominant_wind_direction: String,
    /// Mean daily maximum wind speed, km/h.
    pub avg_wind_speed_kmh: f64,
    /// Relative humidity, percent in `[0, 100]`.
    pub humidity_percent: f64,
    /// Total sunshine duration over the trailing year, hours.
    pub sunshine_hours_annual: f64,
    /// Derived climate classification.
    pub climate_zone: ClimateZone,
    /// Derived annual temperature-swing classification.
    pub seasonal_variation: SeasonalVariation,
}

/// Terrain summary for one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TerrainData {
    /// Elevation above sea level in metres (negative below sea level).
    pub elevation_m: i32,
    /// Slope classification from the surrounding elevation samples.
    pub slope_assessment: SlopeAssessment,
}

/// Reverse-geocoded location context for one coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LocationData {
    /// Full human-readable place name.
    pub display_name: String,
    /// Country name, or `"Unknown"`.
    pub country: String,
    /// ISO 3166-1 alpha-2 code, lowercase, or `"xx"`.
    pub country_code: String,
    /// State / region / county, whichever the geocoder provides.
    pub region: String,
    /// Keyword-heuristic coastal flag. Approximate in V0.1.
    pub is_coastal: bool,
}

/// Provenance record for one external data provider consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DataSourceRecord {
    /// Short provider name (`"open-meteo"`, `"open-elevation"`, `"nominatim"`).
    pub source: String,
    /// The exact URL queried.
    pub endpoint: String,
    /// When the query was issued.
    pub fetched_at: DateTime<Utc>,
    /// Whether the query succeeded, degraded, or failed.
    pub status: SourceStatus,
    /// Error message when the status is not `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The frozen environmental snapshot passed to every strategy module.
///
/// Invariant: exactly one [`ClimateZone`] and one [`SlopeAssessment`] per
/// snapshot. The engine never mutates a snapshot; concurrent blueprint
/// generations on different snapshots share nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EnvironmentalData {
    /// The coordinate the snapshot describes.
    pub coordinates: Coordinates,
    /// Annualized climate aggregates.
    pub climate: ClimateData,
    /// Elevation and slope.
    pub terrain: TerrainData,
    /// Reverse-geocoded location context.
    pub location: LocationData,
    /// One provenance record per external provider consulted, in query order.
    pub data_sources: Vec<DataSourceRecord>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn data_source_record_omits_absent_error() {
        let record = DataSourceRecord {
            source: String::from("open-meteo"),
            endpoint: String::from("https://api.open-meteo.com/v1/forecast"),
            fetched_at: Utc::now(),
            status: SourceStatus::Success,
            error: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn data_source_record_keeps_error_on_failure() {
        let record = DataSourceRecord {
            source: String::from("nominatim"),
            endpoint: String::from("https://nominatim.openstreetmap.org/reverse"),
            fetched_at: Utc::now(),
            status: SourceStatus::Failed,
            error: Some(String::from("HTTP 503")),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["error"], "HTTP 503");
        assert_eq!(json["status"], "failed");
    }

    #[test]
    fn environmental_data_round_trips() {
        let env = EnvironmentalData {
            coordinates: Coordinates {
                latitude: -1.29,
                longitude: 36.82,
            },
            climate: ClimateData {
                annual_rainfall_mm: 1050.0,
                avg_temperature_c: 19.0,
                min_temperature_c: 10.0,
                max_temperature_c: 28.0,
                dominant_wind_direction: String::from("S"),
                avg_wind_speed_kmh: 12.0,
                humidity_percent: 70.0,
                sunshine_hours_annual: 2500.0,
                climate_zone: ClimateZone::Tropical,
                seasonal_variation: SeasonalVariation::Low,
            },
            terrain: TerrainData {
                elevation_m: 1660,
                slope_assessment: SlopeAssessment::Gentle,
            },
            location: LocationData {
                display_name: String::from("Nairobi, Kenya"),
                country: String::from("Kenya"),
                country_code: String::from("ke"),
                region: String::from("Nairobi County"),
                is_coastal: false,
            },
            data_sources: Vec::new(),
        };

        let json = serde_json::to_string(&env).unwrap();
        let back: EnvironmentalData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
