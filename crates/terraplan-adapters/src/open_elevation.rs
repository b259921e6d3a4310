//! Open-Elevation terrain adapter.
//!
//! Endpoint: `https://api.open-elevation.com/api/v1/lookup`, free tier,
//! no API key. Slope is estimated from a five-point cross around the
//! target (centre plus N/S/E/W at a 0.01 degree offset, roughly 1110m
//! of horizontal distance). When the multi-point query fails, a
//! single-point query supplies elevation with slope defaulted to flat
//! and the record marked as a fallback.

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use terraplan_types::{Coordinates, DataSourceRecord, SlopeAssessment, SourceStatus, TerrainData};

use crate::error::AdapterError;
use crate::AdapterOutcome;

const ENDPOINT: &str = "https://api.open-elevation.com/api/v1/lookup";

/// Sample offset in degrees. 1 degree of latitude is roughly 111km.
const OFFSET_DEG: f64 = 0.01;

/// Horizontal sample distance in metres implied by [`OFFSET_DEG`].
const HORIZONTAL_DIST_M: f64 = OFFSET_DEG * 111_000.0;

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<ElevationPoint>,
}

#[derive(Debug, Deserialize)]
struct ElevationPoint {
    elevation: Option<f64>,
}

/// Classify slope from the five-point cross.
///
/// The first elevation is the centre point; the steepest rise towards
/// any arm decides the band. Anything other than exactly five samples
/// means the cross is incomplete and slope cannot be judged.
pub fn classify_slope(elevations: &[f64]) -> SlopeAssessment {
    let Some((center, arms)) = elevations.split_first() else {
        return SlopeAssessment::Flat;
    };
    if arms.len() != 4 {
        return SlopeAssessment::Flat;
    }

    let max_rise = arms
        .iter()
        .map(|e| (e - center).abs())
        .fold(0.0_f64, f64::max);
    let slope_percent = max_rise / HORIZONTAL_DIST_M * 100.0;

    if slope_percent < 2.0 {
        SlopeAssessment::Flat
    } else if slope_percent < 8.0 {
        SlopeAssessment::Gentle
    } else if slope_percent < 15.0 {
        SlopeAssessment::Moderate
    } else {
        SlopeAssessment::Steep
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(value: f64) -> i32 {
    value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Open-Elevation HTTP client.
#[derive(Debug, Clone)]
pub struct OpenElevationAdapter {
    client: reqwest::Client,
    timeout: Duration,
}

impl OpenElevationAdapter {
    /// Create an adapter with the given per-request timeout.
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Fetch elevation and slope for one coordinate.
    ///
    /// Failures are folded into the returned record; this never errors.
    pub async fn fetch(&self, coords: Coordinates) -> AdapterOutcome<TerrainData> {
        let fetched_at = Utc::now();
        let lat = coords.latitude;
        let lon = coords.longitude;

        // Centre first, then the four arms.
        let cross = format!(
            "{lat},{lon}|{},{lon}|{},{lon}|{lat},{}|{lat},{}",
            lat + OFFSET_DEG,
            lat - OFFSET_DEG,
            lon + OFFSET_DEG,
            lon - OFFSET_DEG
        );
        let endpoint = format!("{ENDPOINT}?locations={cross}");

        match self.lookup(&endpoint).await {
            Ok(elevations) if !elevations.is_empty() => {
                let center = elevations.first().copied().unwrap_or(0.0);
                AdapterOutcome {
                    data: Some(TerrainData {
                        elevation_m: round_to_i32(center),
                        slope_assessment: classify_slope(&elevations),
                    }),
                    record: DataSourceRecord {
                        source: String::from("open-elevation"),
                        endpoint,
                        fetched_at,
                        status: SourceStatus::Success,
                        error: None,
                    },
                }
            }
            Ok(_) => {
                self.fallback_single_point(coords, fetched_at, "no elevation results returned")
                    .await
            }
            Err(err) => {
                tracing::warn!(error = %err, "open-elevation multi-point fetch failed");
                self.fallback_single_point(coords, fetched_at, &err.to_string())
                    .await
            }
        }
    }

    /// Single-point retry after a failed cross query. Slope is unknowable
    /// from one sample, so it defaults to flat and the record is marked
    /// as a fallback.
    async fn fallback_single_point(
        &self,
        coords: Coordinates,
        fetched_at: chrono::DateTime<Utc>,
        original_error: &str,
    ) -> AdapterOutcome<TerrainData> {
        let endpoint = format!(
            "{ENDPOINT}?locations={},{}",
            coords.latitude, coords.longitude
        );

        match self.lookup(&endpoint).await {
            Ok(elevations) if !elevations.is_empty() => {
                let elevation = elevations.first().copied().unwrap_or(0.0);
                AdapterOutcome {
                    data: Some(TerrainData {
                        elevation_m: round_to_i32(elevation),
                        slope_assessment: SlopeAssessment::Flat,
                    }),
                    record: DataSourceRecord {
                        source: String::from("open-elevation"),
                        endpoint,
                        fetched_at,
                        status: SourceStatus::Fallback,
                        error: Some(String::from(
                            "Multi-point slope query failed; slope defaulted to flat",
                        )),
                    },
                }
            }
            _ => AdapterOutcome {
                data: None,
                record: DataSourceRecord {
                    source: String::from("open-elevation"),
                    endpoint,
                    fetched_at,
                    status: SourceStatus::Failed,
                    error: Some(String::from(original_error)),
                },
            },
        }
    }

    async fn lookup(&self, endpoint: &str) -> Result<Vec<f64>, AdapterError> {
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

        let parsed: LookupResponse = response
            .json()
            .await
            .map_err(|e| AdapterError::Malformed(e.to_string()))?;

        Ok(parsed
            .results
            .into_iter()
            .map(|p| p.elevation.unwrap_or(0.0))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn level_ground_is_flat() {
        // 10m rise over 1110m is under 2%.
        let slope = classify_slope(&[100.0, 105.0, 102.0, 98.0, 110.0]);
        assert_eq!(slope, SlopeAssessment::Flat);
    }

    #[test]
    fn moderate_rise_is_gentle() {
        // 50m rise over 1110m is about 4.5%.
        let slope = classify_slope(&[100.0, 150.0, 100.0, 100.0, 100.0]);
        assert_eq!(slope, SlopeAssessment::Gentle);
    }

    #[test]
    fn steep_hillside_is_steep() {
        // 400m rise over 1110m is about 36%.
        let slope = classify_slope(&[1000.0, 1400.0, 980.0, 1010.0, 990.0]);
        assert_eq!(slope, SlopeAssessment::Steep);
    }

    #[test]
    fn drops_count_the_same_as_rises() {
        // 200m drop over 1110m is about 18%.
        let slope = classify_slope(&[500.0, 300.0, 500.0, 500.0, 500.0]);
        assert_eq!(slope, SlopeAssessment::Steep);
    }

    #[test]
    fn moderate_band_between_eight_and_fifteen_percent() {
        // 120m rise over 1110m is about 10.8%.
        let slope = classify_slope(&[200.0, 320.0, 200.0, 200.0, 200.0]);
        assert_eq!(slope, SlopeAssessment::Moderate);
    }

    #[test]
    fn incomplete_cross_defaults_to_flat() {
        assert_eq!(classify_slope(&[100.0, 400.0]), SlopeAssessment::Flat);
        assert_eq!(classify_slope(&[]), SlopeAssessment::Flat);
    }

    #[test]
    fn rounding_preserves_sub_metre_elevations() {
        assert_eq!(round_to_i32(1659.7), 1660);
        assert_eq!(round_to_i32(-12.4), -12);
    }
}
