//! Concurrent environmental data fetch with graceful degradation.
//!
//! All three adapters run in parallel against the same coordinate. A
//! failed adapter never aborts the fetch: its section of the snapshot is
//! replaced by documented global-average fallback values and a warning is
//! emitted for the blueprint's limitations. Only when every adapter fails
//! does the caller get an `all_failed` signal to turn into an upstream
//! error.

use std::time::Duration;

use terraplan_types::{
    ClimateData, ClimateZone, Coordinates, DataSourceRecord, EnvironmentalData, LocationData,
    SeasonalVariation, SlopeAssessment, TerrainData,
};

use crate::nominatim::NominatimAdapter;
use crate::open_elevation::OpenElevationAdapter;
use crate::open_meteo::OpenMeteoAdapter;

/// Data plus degradation notes from one fetch pass.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The assembled snapshot, possibly containing fallback sections.
    pub data: EnvironmentalData,
    /// One human-readable warning per degraded or failed source.
    pub warnings: Vec<String>,
    /// True when no adapter returned usable data.
    pub all_failed: bool,
}

/// Global-average climate stand-in, always flagged via a warning.
fn climate_fallback() -> ClimateData {
    ClimateData {
        annual_rainfall_mm: 700.0,
        avg_temperature_c: 15.0,
        min_temperature_c: 0.0,
        max_temperature_c: 30.0,
        dominant_wind_direction: String::from("unknown"),
        avg_wind_speed_kmh: 10.0,
        humidity_percent: 60.0,
        sunshine_hours_annual: 2000.0,
        climate_zone: ClimateZone::Temperate,
        seasonal_variation: SeasonalVariation::Moderate,
    }
}

fn terrain_fallback() -> TerrainData {
    TerrainData {
        elevation_m: 200,
        slope_assessment: SlopeAssessment::Flat,
    }
}

fn location_fallback(coords: Coordinates) -> LocationData {
    LocationData {
        display_name: format!("{:.4}, {:.4}", coords.latitude, coords.longitude),
        country: String::from("Unknown"),
        country_code: String::from("xx"),
        region: String::from("Unknown"),
        is_coastal: false,
    }
}

fn record_error(record: &DataSourceRecord) -> String {
    record
        .error
        .clone()
        .unwrap_or_else(|| String::from("unknown error"))
}

/// Live fetcher hitting the three public APIs.
#[derive(Debug, Clone)]
pub struct LiveFetcher {
    open_meteo: OpenMeteoAdapter,
    open_elevation: OpenElevationAdapter,
    nominatim: NominatimAdapter,
}

impl LiveFetcher {
    /// Build a live fetcher sharing one HTTP client across adapters.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::new();
        Self {
            open_meteo: OpenMeteoAdapter::new(client.clone(), timeout),
            open_elevation: OpenElevationAdapter::new(client.clone(), timeout),
            nominatim: NominatimAdapter::new(client, timeout),
        }
    }

    async fn fetch(&self, coords: Coordinates) -> FetchOutcome {
        let (climate, terrain, location) = tokio::join!(
            self.open_meteo.fetch(coords),
            self.open_elevation.fetch(coords),
            self.nominatim.fetch(coords),
        );

        let mut warnings = Vec::new();
        let data_sources = vec![
            climate.record.clone(),
            terrain.record.clone(),
            location.record.clone(),
        ];

        let climate_data = climate.data.unwrap_or_else(|| {
            warnings.push(format!(
                "Climate data unavailable: {}. Using global average fallback values.",
                record_error(&climate.record)
            ));
            climate_fallback()
        });

        let terrain_data = terrain.data.unwrap_or_else(|| {
            warnings.push(format!(
                "Terrain data unavailable: {}. Using flat/200m fallback.",
                record_error(&terrain.record)
            ));
            terrain_fallback()
        });

        let location_data = location.data.unwrap_or_else(|| {
            warnings.push(format!(
                "Location data unavailable: {}. Using coordinate string as location name.",
                record_error(&location.record)
            ));
            location_fallback(coords)
        });

        let all_failed = warnings.len() == 3;

        FetchOutcome {
            data: EnvironmentalData {
                coordinates: coords,
                climate: climate_data,
                terrain: terrain_data,
                location: location_data,
                data_sources,
            },
            warnings,
            all_failed,
        }
    }
}

/// Environmental data source with enum dispatch.
///
/// Enum dispatch instead of a trait object keeps the async fetch method
/// dyn-compatible for free and gives tests a deterministic in-memory
/// variant.
#[derive(Debug, Clone)]
pub enum EnvironmentFetcher {
    /// Real HTTP adapters against the public APIs.
    Live(LiveFetcher),
    /// Canned outcome, coordinates rewritten per request. Test only.
    Fixed(Box<FetchOutcome>),
}

impl EnvironmentFetcher {
    /// Build the live variant with one shared timeout.
    pub fn live(timeout: Duration) -> Self {
        Self::Live(LiveFetcher::new(timeout))
    }

    /// Build a fixed variant serving a canned outcome.
    pub fn fixed(outcome: FetchOutcome) -> Self {
        Self::Fixed(Box::new(outcome))
    }

    /// Fetch the environmental snapshot for one coordinate.
    pub async fn fetch(&self, coords: Coordinates) -> FetchOutcome {
        match self {
            Self::Live(fetcher) => fetcher.fetch(coords).await,
            Self::Fixed(outcome) => {
                let mut outcome = (**outcome).clone();
                outcome.data.coordinates = coords;
                outcome
            }
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Live(_) => "live",
            Self::Fixed(_) => "fixed",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn outcome() -> FetchOutcome {
        FetchOutcome {
            data: EnvironmentalData {
                coordinates: Coordinates {
                    latitude: 0.0,
                    longitude: 0.0,
                },
                climate: climate_fallback(),
                terrain: terrain_fallback(),
                location: location_fallback(Coordinates {
                    latitude: 0.0,
                    longitude: 0.0,
                }),
                data_sources: Vec::new(),
            },
            warnings: Vec::new(),
            all_failed: false,
        }
    }

    #[tokio::test]
    async fn fixed_fetcher_rewrites_coordinates() {
        let fetcher = EnvironmentFetcher::fixed(outcome());
        let coords = Coordinates {
            latitude: -1.286,
            longitude: 36.817,
        };
        let result = fetcher.fetch(coords).await;
        assert!((result.data.coordinates.latitude - coords.latitude).abs() < f64::EPSILON);
        assert!((result.data.coordinates.longitude - coords.longitude).abs() < f64::EPSILON);
    }

    #[test]
    fn fallback_location_uses_four_decimal_coordinate_string() {
        let location = location_fallback(Coordinates {
            latitude: -1.28638,
            longitude: 36.81722,
        });
        assert_eq!(location.display_name, "-1.2864, 36.8172");
        assert!(!location.is_coastal);
    }

    #[test]
    fn fallback_climate_is_temperate_global_average() {
        let climate = climate_fallback();
        assert!((climate.annual_rainfall_mm - 700.0).abs() < f64::EPSILON);
        assert_eq!(climate.climate_zone, ClimateZone::Temperate);
        assert_eq!(climate.seasonal_variation, SeasonalVariation::Moderate);
    }

    #[test]
    fn fetcher_names() {
        assert_eq!(EnvironmentFetcher::fixed(outcome()).name(), "fixed");
        assert_eq!(
            EnvironmentFetcher::live(Duration::from_secs(15)).name(),
            "live"
        );
    }
}
