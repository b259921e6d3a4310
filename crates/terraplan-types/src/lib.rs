//! Shared type definitions for the Terraplan blueprint service.
//!
//! This crate is the single source of truth for every type that crosses a
//! crate or process boundary. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`enums`] -- closed categorical vocabularies (climate zone, slope,
//!   source status, confidence level)
//! - [`environment`] -- the environmental snapshot consumed by the engine
//! - [`strategy`] -- the five strategy output records
//! - [`blueprint`] -- guardrail verdicts, the aggregated reasoning trace,
//!   and the final blueprint

pub mod blueprint;
pub mod enums;
pub mod environment;
pub mod strategy;

// Re-export all public types at crate root for convenience.
pub use blueprint::{
    Blueprint, BlueprintMetadata, CoordinateInput, GuardrailResult, ReasoningTrace,
};
pub use enums::{ClimateZone, ConfidenceLevel, SeasonalVariation, SlopeAssessment, SourceStatus};
pub use environment::{
    ClimateData, Coordinates, DataSourceRecord, EnvironmentalData, LocationData, TerrainData,
};
pub use strategy::{
    EnergyStrategy, FoodStrategy, RiskAssessment, ShelterStrategy, WaterStrategy,
};
