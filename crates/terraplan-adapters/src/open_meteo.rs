//! Open-Meteo climate adapter.
//!
//! Endpoint: `https://api.open-meteo.com/v1/forecast`, free tier, no API
//! key. One year of daily history (`past_days=365`) is aggregated into
//! annual climate figures, then classified into a simplified
//! Koppen-style zone. Thresholds are approximate and sufficient for a
//! rule-based V0.1.

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use terraplan_types::{
    ClimateData, ClimateZone, Coordinates, DataSourceRecord, SeasonalVariation, SourceStatus,
};

use crate::error::AdapterError;
use crate::AdapterOutcome;

const ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,\
                            wind_speed_10m_max,wind_direction_10m_dominant,sunshine_duration";

/// Free-tier daily data carries no humidity series. A global average
/// stands in and is flagged as a limitation downstream.
const HUMIDITY_DEFAULT_PERCENT: f64 = 60.0;

/// Classify the climate zone from annual aggregates.
pub fn derive_climate_zone(
    avg_temp: f64,
    min_temp: f64,
    max_temp: f64,
    rainfall_mm: f64,
) -> ClimateZone {
    if max_temp < 10.0 {
        ClimateZone::Polar
    } else if min_temp < -3.0 {
        ClimateZone::Continental
    } else if avg_temp > 18.0 && rainfall_mm > 1500.0 {
        ClimateZone::Tropical
    } else if rainfall_mm < 250.0 {
        ClimateZone::Arid
    } else {
        ClimateZone::Temperate
    }
}

/// Classify seasonal variation from the annual temperature range.
pub fn derive_seasonal_variation(min_temp: f64, max_temp: f64) -> SeasonalVariation {
    let range = max_temp - min_temp;
    if range < 10.0 {
        SeasonalVariation::Low
    } else if range <= 25.0 {
        SeasonalVariation::Moderate
    } else {
        SeasonalVariation::High
    }
}

/// Map wind direction degrees onto the eight-point compass rose.
pub fn derive_wind_direction(degrees: Option<f64>) -> &'static str {
    const SECTORS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    degrees.map_or("unknown", |deg| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = ((deg / 45.0).round().rem_euclid(8.0)) as usize;
        SECTORS.get(index).copied().unwrap_or("N")
    })
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

/// Daily series from Open-Meteo. Individual days can be null.
#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<Option<f64>>,
    wind_direction_10m_dominant: Vec<Option<f64>>,
    sunshine_duration: Vec<Option<f64>>,
}

/// Sum with nulls treated as zero.
fn sum_defined(values: &[Option<f64>]) -> f64 {
    values.iter().map(|v| v.unwrap_or(0.0)).sum()
}

/// Mean over the full series length, nulls contributing zero.
fn mean_defined(values: &[Option<f64>]) -> f64 {
    let (sum, count) = values
        .iter()
        .fold((0.0_f64, 0.0_f64), |(s, n), v| (s + v.unwrap_or(0.0), n + 1.0));
    if count > 0.0 { sum / count } else { 0.0 }
}

fn max_defined(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().reduce(f64::max)
}

fn min_defined(values: &[Option<f64>]) -> Option<f64> {
    values.iter().flatten().copied().reduce(f64::min)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Most frequent compass sector across the year.
fn dominant_wind(directions: &[Option<f64>]) -> String {
    let mut counts: std::collections::HashMap<&'static str, u32> = std::collections::HashMap::new();
    for deg in directions {
        let sector = derive_wind_direction(*deg);
        let tally = counts.entry(sector).or_insert(0);
        *tally = tally.saturating_add(1);
    }
    counts
        .into_iter()
        .max_by_key(|(_, n)| *n)
        .map_or_else(|| String::from("unknown"), |(dir, _)| String::from(dir))
}

fn aggregate(daily: &DailySeries) -> Result<ClimateData, AdapterError> {
    if daily.time.is_empty() {
        return Err(AdapterError::Malformed(String::from(
            "empty daily data returned",
        )));
    }

    let total_rainfall = sum_defined(&daily.precipitation_sum);
    let avg_temp_max = mean_defined(&daily.temperature_2m_max);
    let avg_temp_min = mean_defined(&daily.temperature_2m_min);
    let avg_temp = (avg_temp_max + avg_temp_min) / 2.0;
    let max_temp = max_defined(&daily.temperature_2m_max)
        .ok_or_else(|| AdapterError::Malformed(String::from("no defined daily max temperature")))?;
    let min_temp = min_defined(&daily.temperature_2m_min)
        .ok_or_else(|| AdapterError::Malformed(String::from("no defined daily min temperature")))?;
    let avg_wind = mean_defined(&daily.wind_speed_10m_max);
    let sunshine_hours = sum_defined(&daily.sunshine_duration) / 3600.0;

    Ok(ClimateData {
        annual_rainfall_mm: total_rainfall.round(),
        avg_temperature_c: round1(avg_temp),
        min_temperature_c: round1(min_temp),
        max_temperature_c: round1(max_temp),
        dominant_wind_direction: dominant_wind(&daily.wind_direction_10m_dominant),
        avg_wind_speed_kmh: round1(avg_wind),
        humidity_percent: HUMIDITY_DEFAULT_PERCENT,
        sunshine_hours_annual: sunshine_hours.round(),
        climate_zone: derive_climate_zone(avg_temp, min_temp, max_temp, total_rainfall),
        seasonal_variation: derive_seasonal_variation(min_temp, max_temp),
    })
}

/// Open-Meteo HTTP client.
#[derive(Debug, Clone)]
pub struct OpenMeteoAdapter {
    client: reqwest::Client,
    timeout: Duration,
}

impl OpenMeteoAdapter {
    /// Create an adapter with the given per-request timeout.
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetch one year of daily climate data and aggregate it.
    ///
    /// Failures are folded into the returned record; this never errors.
    pub async fn fetch(&self, coords: Coordinates) -> AdapterOutcome<ClimateData> {
        let endpoint = format!(
            "{ENDPOINT}?latitude={}&longitude={}&daily={DAILY_FIELDS}&timezone=auto&past_days=365&forecast_days=1",
            coords.latitude, coords.longitude
        );
        let fetched_at = Utc::now();

        match self.request(&endpoint).await {
            Ok(climate) => AdapterOutcome {
                data: Some(climate),
                record: DataSourceRecord {
                    source: String::from("open-meteo"),
                    endpoint,
                    fetched_at,
                    status: SourceStatus::Success,
                    error: None,
                },
            },
            Err(err) => {
                tracing::warn!(error = %err, "open-meteo fetch failed");
                AdapterOutcome {
                    data: None,
                    record: DataSourceRecord {
                        source: String::from("open-meteo"),
                        endpoint,
                        fetched_at,
                        status: SourceStatus::Failed,
                        error: Some(err.to_string()),
                    },
                }
            }
        }
    }

    async fn request(&self, endpoint: &str) -> Result<ClimateData, AdapterError> {
        let response = self
            .client
            .get(endpoint)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| AdapterError::request(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unable to read error body"));
            return Err(AdapterError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ForecastResponse = response
            .json()
            .await
            .map_err(|e| AdapterError::Malformed(e.to_string()))?;

        aggregate(&parsed.daily)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn cold_summer_is_polar() {
        assert_eq!(derive_climate_zone(-5.0, -30.0, 8.0, 300.0), ClimateZone::Polar);
    }

    #[test]
    fn harsh_winter_warm_summer_is_continental() {
        assert_eq!(
            derive_climate_zone(8.0, -15.0, 28.0, 600.0),
            ClimateZone::Continental
        );
    }

    #[test]
    fn hot_and_wet_is_tropical() {
        assert_eq!(
            derive_climate_zone(26.0, 20.0, 33.0, 2200.0),
            ClimateZone::Tropical
        );
    }

    #[test]
    fn hot_but_dry_is_arid_not_tropical() {
        assert_eq!(derive_climate_zone(25.0, 12.0, 42.0, 120.0), ClimateZone::Arid);
    }

    #[test]
    fn mild_midlatitude_is_temperate() {
        assert_eq!(
            derive_climate_zone(12.0, 1.0, 25.0, 800.0),
            ClimateZone::Temperate
        );
    }

    #[test]
    fn seasonal_variation_bands() {
        assert_eq!(derive_seasonal_variation(20.0, 28.0), SeasonalVariation::Low);
        assert_eq!(
            derive_seasonal_variation(5.0, 30.0),
            SeasonalVariation::Moderate
        );
        assert_eq!(derive_seasonal_variation(-20.0, 30.0), SeasonalVariation::High);
    }

    #[test]
    fn wind_sectors_wrap_around() {
        assert_eq!(derive_wind_direction(Some(0.0)), "N");
        assert_eq!(derive_wind_direction(Some(45.0)), "NE");
        assert_eq!(derive_wind_direction(Some(180.0)), "S");
        assert_eq!(derive_wind_direction(Some(270.0)), "W");
        // 350 rounds to sector 8 which wraps back to N.
        assert_eq!(derive_wind_direction(Some(350.0)), "N");
        assert_eq!(derive_wind_direction(None), "unknown");
    }

    fn series(days: usize) -> DailySeries {
        DailySeries {
            time: (0..days).map(|i| format!("2026-01-{:02}", i.saturating_add(1))).collect(),
            temperature_2m_max: vec![Some(20.0); days],
            temperature_2m_min: vec![Some(10.0); days],
            precipitation_sum: vec![Some(2.0); days],
            wind_speed_10m_max: vec![Some(12.0); days],
            wind_direction_10m_dominant: vec![Some(90.0); days],
            sunshine_duration: vec![Some(7200.0); days],
        }
    }

    #[test]
    fn aggregate_sums_and_averages_daily_series() {
        let climate = aggregate(&series(10)).unwrap();
        assert!((climate.annual_rainfall_mm - 20.0).abs() < f64::EPSILON);
        assert!((climate.avg_temperature_c - 15.0).abs() < f64::EPSILON);
        assert!((climate.sunshine_hours_annual - 20.0).abs() < f64::EPSILON);
        assert_eq!(climate.dominant_wind_direction, "E");
        assert!((climate.humidity_percent - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_treats_null_days_as_zero_rainfall() {
        let mut daily = series(4);
        daily.precipitation_sum = vec![Some(5.0), None, Some(3.0), None];
        let climate = aggregate(&daily).unwrap();
        assert!((climate.annual_rainfall_mm - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_rejects_empty_series() {
        let daily = series(0);
        assert!(aggregate(&daily).is_err());
    }
}
