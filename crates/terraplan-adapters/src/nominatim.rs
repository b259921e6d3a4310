//! Nominatim (OpenStreetMap) reverse geocoding adapter.
//!
//! Endpoint: `https://nominatim.openstreetmap.org/reverse`, free tier.
//! The usage policy requires an identifying User-Agent and at most one
//! request per second, which the request path naturally satisfies (one
//! geocode per blueprint).
//!
//! Coastal detection is a keyword heuristic over the address fields, not
//! a GIS lookup. It is approximate and flagged as such in the blueprint
//! limitations.

use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;
use terraplan_types::{Coordinates, DataSourceRecord, LocationData, SourceStatus};

use crate::error::AdapterError;
use crate::AdapterOutcome;

const ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";

const USER_AGENT: &str =
    "Terraplan/0.1 (open-source humanitarian project; https://github.com/terraplan-project)";

/// Zoom 10 resolves to city/district level, which is the granularity the
/// blueprint metadata needs.
const ZOOM: u8 = 10;

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    country: Option<String>,
    country_code: Option<String>,
    state: Option<String>,
    region: Option<String>,
    county: Option<String>,
    coastline: Option<String>,
    natural: Option<String>,
    water: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    address: Option<ReverseAddress>,
    #[serde(rename = "type")]
    place_type: Option<String>,
}

/// Keyword heuristic over address fields and place type.
fn detect_coastal(address: &ReverseAddress, place_type: Option<&str>) -> bool {
    let haystack = [
        address.natural.as_deref(),
        address.coastline.as_deref(),
        address.water.as_deref(),
        place_type,
    ]
    .iter()
    .flatten()
    .map(|s| s.to_lowercase())
    .collect::<Vec<_>>()
    .join(" ");

    ["coast", "sea", "ocean", "bay"]
        .iter()
        .any(|kw| haystack.contains(kw))
}

fn into_location(coords: Coordinates, response: ReverseResponse) -> LocationData {
    let address = response.address.unwrap_or_default();
    let is_coastal = detect_coastal(&address, response.place_type.as_deref());

    LocationData {
        display_name: response
            .display_name
            .unwrap_or_else(|| format!("{}, {}", coords.latitude, coords.longitude)),
        country: address.country.unwrap_or_else(|| String::from("Unknown")),
        country_code: address
            .country_code
            .map_or_else(|| String::from("xx"), |c| c.to_lowercase()),
        region: address
            .state
            .or(address.region)
            .or(address.county)
            .unwrap_or_else(|| String::from("Unknown")),
        is_coastal,
    }
}

/// Nominatim HTTP client.
#[derive(Debug, Clone)]
pub struct NominatimAdapter {
    client: reqwest::Client,
    timeout: Duration,
}

impl NominatimAdapter {
    /// Create an adapter with the given per-request timeout.
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Reverse geocode one coordinate.
    ///
    /// Failures are folded into the returned record; this never errors.
    pub async fn fetch(&self, coords: Coordinates) -> AdapterOutcome<LocationData> {
        let endpoint = format!(
            "{ENDPOINT}?lat={}&lon={}&format=json&zoom={ZOOM}",
            coords.latitude, coords.longitude
        );
        let fetched_at = Utc::now();

        match self.request(&endpoint).await {
            Ok(response) => AdapterOutcome {
                data: Some(into_location(coords, response)),
                record: DataSourceRecord {
                    source: String::from("nominatim"),
                    endpoint,
                    fetched_at,
                    status: SourceStatus::Success,
                    error: None,
                },
            },
            Err(err) => {
                tracing::warn!(error = %err, "nominatim fetch failed");
                AdapterOutcome {
                    data: None,
                    record: DataSourceRecord {
                        source: String::from("nominatim"),
                        endpoint,
                        fetched_at,
                        status: SourceStatus::Failed,
                        error: Some(err.to_string()),
                    },
                }
            }
        }
    }

    async fn request(&self, endpoint: &str) -> Result<ReverseResponse, AdapterError> {
        let response = self
            .client
            .get(endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
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

        response
            .json()
            .await
            .map_err(|e| AdapterError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn coords() -> Coordinates {
        Coordinates {
            latitude: -1.286,
            longitude: 36.817,
        }
    }

    #[test]
    fn full_address_maps_through() {
        let response = ReverseResponse {
            display_name: Some(String::from("Nairobi, Kenya")),
            address: Some(ReverseAddress {
                country: Some(String::from("Kenya")),
                country_code: Some(String::from("KE")),
                state: Some(String::from("Nairobi County")),
                ..ReverseAddress::default()
            }),
            place_type: Some(String::from("administrative")),
        };
        let location = into_location(coords(), response);
        assert_eq!(location.display_name, "Nairobi, Kenya");
        assert_eq!(location.country_code, "ke");
        assert_eq!(location.region, "Nairobi County");
        assert!(!location.is_coastal);
    }

    #[test]
    fn region_falls_back_state_then_region_then_county() {
        let response = ReverseResponse {
            display_name: None,
            address: Some(ReverseAddress {
                county: Some(String::from("Kilifi")),
                ..ReverseAddress::default()
            }),
            place_type: None,
        };
        let location = into_location(coords(), response);
        assert_eq!(location.region, "Kilifi");
    }

    #[test]
    fn missing_fields_get_unknown_defaults() {
        let response = ReverseResponse {
            display_name: None,
            address: None,
            place_type: None,
        };
        let location = into_location(coords(), response);
        assert_eq!(location.display_name, "-1.286, 36.817");
        assert_eq!(location.country, "Unknown");
        assert_eq!(location.country_code, "xx");
        assert_eq!(location.region, "Unknown");
        assert!(!location.is_coastal);
    }

    #[test]
    fn coastal_keywords_trigger_detection() {
        for (natural, place_type) in [
            (Some("coastline"), None),
            (Some("bay"), None),
            (None, Some("sea")),
            (Some("Ocean Beach"), None),
        ] {
            let address = ReverseAddress {
                natural: natural.map(String::from),
                ..ReverseAddress::default()
            };
            assert!(detect_coastal(&address, place_type), "{natural:?} {place_type:?}");
        }
    }

    #[test]
    fn inland_fields_do_not_trigger_coastal() {
        let address = ReverseAddress {
            natural: Some(String::from("forest")),
            ..ReverseAddress::default()
        };
        assert!(!detect_coastal(&address, Some("administrative")));
    }
}
