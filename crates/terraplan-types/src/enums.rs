//! Enumeration types for the Terraplan data model.
//!
//! These are the closed categorical vocabularies the rule engine switches
//! on. Every value is lowercase on the wire, matching the external JSON
//! contract consumed by the dashboard and export tooling.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Climate classification
// ---------------------------------------------------------------------------

/// Simplified Köppen-style climate classification.
///
/// Derived by the climate adapter from annual temperature and rainfall
/// aggregates. This is the primary discriminator for the food and shelter
/// strategy modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ClimateZone {
    /// Hot year-round with heavy rainfall.
    Tropical,
    /// Very low rainfall, extreme diurnal temperature swings.
    Arid,
    /// Moderate temperatures with distinct but mild seasons.
    Temperate,
    /// Cold winters, warm summers, large seasonal range.
    Continental,
    /// Maximum monthly temperature below the tree-growth threshold.
    Polar,
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Tropical => "tropical",
            Self::Arid => "arid",
            Self::Temperate => "temperate",
            Self::Continental => "continental",
            Self::Polar => "polar",
        };
        f.write_str(label)
    }
}

/// How strongly temperatures swing across the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SeasonalVariation {
    /// Annual min/max temperature range below 10 °C.
    Low,
    /// Annual range between 10 °C and 25 °C.
    Moderate,
    /// Annual range above 25 °C.
    High,
}

impl fmt::Display for SeasonalVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Terrain classification
// ---------------------------------------------------------------------------

/// Coarse slope classification around the target coordinate.
///
/// Derived by the terrain adapter from a 5-point elevation cross. The
/// shelter and risk modules switch on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SlopeAssessment {
    /// Slope below 2%.
    Flat,
    /// Slope between 2% and 8%.
    Gentle,
    /// Slope between 8% and 15%.
    Moderate,
    /// Slope of 15% or more.
    Steep,
}

impl fmt::Display for SlopeAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Flat => "flat",
            Self::Gentle => "gentle",
            Self::Moderate => "moderate",
            Self::Steep => "steep",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Data source health
// ---------------------------------------------------------------------------

/// Outcome of one external data-source query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SourceStatus {
    /// The source answered with full-fidelity data.
    Success,
    /// The source answered via a degraded query path; values are partial.
    Fallback,
    /// The source did not answer; global-average defaults were substituted.
    Failed,
}

/// Coarse three-value summary of snapshot data health.
///
/// Derived from the data-source statuses by the reasoning-trace
/// aggregator, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ConfidenceLevel {
    /// Two or more sources failed outright.
    Low,
    /// Exactly one source failed, or at least one degraded to fallback.
    Medium,
    /// Every source answered successfully.
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}
