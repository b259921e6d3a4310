//! Strategy output types produced by the rule engine.
//!
//! Each of the five strategy modules is a pure function from an
//! environmental snapshot to one of these records. Every record carries a
//! non-empty `reasoning_trace`: an ordered list of free-text explanation
//! strings, appended in the causal order the rules fired. The trace is the
//! explainability contract: anyone reading a blueprint must be able to
//! see exactly why each recommendation was made.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ClimateZone;

/// Water access strategy for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WaterStrategy {
    /// The single recommended primary water source.
    pub primary_method: String,
    /// Concrete techniques supporting the primary method, plus any
    /// modifier-added supplements (desalination, spring capture).
    pub techniques: Vec<String>,
    /// The rainfall figure the band selection was based on, mm/year.
    pub estimated_annual_rainfall_mm: f64,
    /// Storage sizing guidance with an explicit litre target scaled to
    /// band severity (more arid means larger minimum storage).
    pub storage_recommendation: String,
    /// Why these rules fired, in application order. Never empty.
    pub reasoning_trace: Vec<String>,
}

/// Food production strategy for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FoodStrategy {
    /// The climate zone the crop selection was dispatched on.
    pub climate_zone: ClimateZone,
    /// Recommended crop list, at least three entries in every zone.
    pub recommended_crops: Vec<String>,
    /// Growing-season estimate from the sinusoidal monthly temperature
    /// model. Computed independently of `climate_zone`.
    pub growing_seasons: String,
    /// Growing techniques tuned to the zone.
    pub techniques: Vec<String>,
    /// Why these rules fired, in application order. Never empty.
    pub reasoning_trace: Vec<String>,
}

/// Shelter construction strategy for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShelterStrategy {
    /// Locally-sourceable building materials for the zone.
    pub recommended_materials: Vec<String>,
    /// Construction techniques, including terrain/wind modifier additions.
    pub construction_techniques: Vec<String>,
    /// Site-specific cautions (moisture, frost, salt air, flood siting).
    pub climate_considerations: Vec<String>,
    /// Why these rules fired, in application order. Never empty.
    pub reasoning_trace: Vec<String>,
}

/// Energy sourcing strategy for one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EnergyStrategy {
    /// The primary source chosen by the priority cascade.
    pub primary_source: String,
    /// Secondary sources specific to the chosen primary.
    pub secondary_sources: Vec<String>,
    /// Daily average sunshine hours, rounded to one decimal.
    pub estimated_solar_hours_daily: f64,
    /// Implementation techniques, always ending with the two universal
    /// efficiency measures (energy audit, passive ventilation).
    pub techniques: Vec<String>,
    /// Why these rules fired, in application order. Never empty.
    pub reasoning_trace: Vec<String>,
}

/// Environmental hazard assessment for one site.
///
/// The three category lists are independently populated by non-exclusive
/// hazard checks; seismic risk is always present as a declared
/// data-coverage limitation rather than a computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RiskAssessment {
    /// Flood, storm surge, and seismic entries.
    pub natural_hazards: Vec<String>,
    /// Drought, heat, cold, and wind entries.
    pub climate_risks: Vec<String>,
    /// Erosion and landslide entries.
    pub terrain_risks: Vec<String>,
    /// Mitigation guidance accumulated across all fired checks.
    pub mitigation_strategies: Vec<String>,
    /// Why these rules fired, in application order. Never empty.
    pub reasoning_trace: Vec<String>,
}
