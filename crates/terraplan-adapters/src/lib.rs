//! Environmental data adapters.
//!
//! Each adapter wraps one free public API and converts its response into
//! the snapshot section the rule engine consumes, always alongside a
//! [`DataSourceRecord`](terraplan_types::DataSourceRecord) describing how
//! the fetch went. Adapters are infallible at the type level: errors are
//! carried in the record, never returned, so the fetch layer can degrade
//! gracefully.
//!
//! | Adapter | API | Section |
//! |---------|-----|---------|
//! | [`open_meteo`] | Open-Meteo forecast (1y daily history) | climate |
//! | [`open_elevation`] | Open-Elevation lookup (5-point cross) | terrain |
//! | [`nominatim`] | Nominatim reverse geocoding | location |

pub mod error;
pub mod fetch;
pub mod nominatim;
pub mod open_elevation;
pub mod open_meteo;

use terraplan_types::DataSourceRecord;

pub use error::AdapterError;
pub use fetch::{EnvironmentFetcher, FetchOutcome, LiveFetcher};

/// One adapter's result: optional data plus the always-present record.
#[derive(Debug, Clone)]
pub struct AdapterOutcome<T> {
    /// Converted data, absent when the fetch failed outright.
    pub data: Option<T>,
    /// Provenance record, including status and any error message.
    pub record: DataSourceRecord,
}
