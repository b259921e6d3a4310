//! Reasoning-trace aggregation and confidence derivation.
//!
//! [`TraceBuilder`] is an append-only accumulator scoped to a single
//! orchestration call: module-tagged rule summaries, data-source records,
//! limitations, and ethical check names. It is a local value, never shared
//! across requests. Confidence is a simple ordered rule over data-source
//! health, not a weighted score: deterministic and total.

use terraplan_types::{ConfidenceLevel, DataSourceRecord, ReasoningTrace, SourceStatus};

/// Derive the confidence level from data-source statuses.
///
/// Counting failed (F) and fallback (B) sources: `F >= 2` is low,
/// `F == 1` or `B >= 1` is medium, everything else is high. Every
/// combination of F and B maps to exactly one level.
pub fn derive_confidence(sources: &[DataSourceRecord]) -> ConfidenceLevel {
    let failed = sources
        .iter()
        .filter(|s| s.status == SourceStatus::Failed)
        .count();
    let fallback = sources
        .iter()
        .filter(|s| s.status == SourceStatus::Fallback)
        .count();

    if failed >= 2 {
        ConfidenceLevel::Low
    } else if failed == 1 || fallback >= 1 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::High
    }
}

/// Append-only accumulator for one blueprint's reasoning trace.
#[derive(Debug, Default)]
pub struct TraceBuilder {
    steps: Vec<String>,
    limitations: Vec<String>,
    ethical_checks: Vec<String>,
}

impl TraceBuilder {
    /// Create an empty builder.
    pub const fn new() -> Self {
        Self {
            steps: Vec::new(),
            limitations: Vec::new(),
            ethical_checks: Vec::new(),
        }
    }

    /// Record a module-tagged rule summary (`[module] step`).
    pub fn add_step(&mut self, module: &str, step: &str) -> &mut Self {
        self.steps.push(format!("[{module}] {step}"));
        self
    }

    /// Record a known limitation or caveat.
    pub fn add_limitation(&mut self, limitation: &str) -> &mut Self {
        self.limitations.push(String::from(limitation));
        self
    }

    /// Record the name of a passed ethical check.
    pub fn add_ethical_check(&mut self, check: &str) -> &mut Self {
        self.ethical_checks.push(String::from(check));
        self
    }

    /// Build the final trace from the snapshot's data sources plus
    /// externally supplied warnings (fetch-layer degradation notes),
    /// which are appended after the accumulated limitations.
    pub fn build(self, sources: &[DataSourceRecord], warnings: &[String]) -> ReasoningTrace {
        let confidence_level = derive_confidence(sources);

        let mut limitations = self.limitations;
        limitations.extend(warnings.iter().cloned());

        ReasoningTrace {
            data_sources_used: sources.to_vec(),
            rules_applied: self.steps,
            confidence_level,
            limitations,
            ethical_checks_passed: self.ethical_checks,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn source(name: &str, status: SourceStatus) -> DataSourceRecord {
        DataSourceRecord {
            source: String::from(name),
            endpoint: String::from("https://example.com"),
            fetched_at: Utc::now(),
            status,
            error: None,
        }
    }

    #[test]
    fn all_success_is_high_confidence() {
        let sources = vec![
            source("open-meteo", SourceStatus::Success),
            source("open-elevation", SourceStatus::Success),
            source("nominatim", SourceStatus::Success),
        ];
        assert_eq!(derive_confidence(&sources), ConfidenceLevel::High);
    }

    #[test]
    fn one_failure_is_medium_confidence() {
        let sources = vec![
            source("open-meteo", SourceStatus::Failed),
            source("open-elevation", SourceStatus::Success),
            source("nominatim", SourceStatus::Success),
        ];
        assert_eq!(derive_confidence(&sources), ConfidenceLevel::Medium);
    }

    #[test]
    fn one_fallback_is_medium_confidence() {
        let sources = vec![
            source("open-meteo", SourceStatus::Success),
            source("open-elevation", SourceStatus::Fallback),
            source("nominatim", SourceStatus::Success),
        ];
        assert_eq!(derive_confidence(&sources), ConfidenceLevel::Medium);
    }

    #[test]
    fn two_failures_are_low_confidence() {
        let sources = vec![
            source("open-meteo", SourceStatus::Failed),
            source("open-elevation", SourceStatus::Failed),
            source("nominatim", SourceStatus::Success),
        ];
        assert_eq!(derive_confidence(&sources), ConfidenceLevel::Low);
    }

    #[test]
    fn no_sources_is_high_confidence() {
        // Vacuously healthy; the orchestrator always passes the real list.
        assert_eq!(derive_confidence(&[]), ConfidenceLevel::High);
    }

    #[test]
    fn steps_are_module_tagged_in_order() {
        let mut builder = TraceBuilder::new();
        builder
            .add_step("water", "band selected")
            .add_step("energy", "cascade resolved");
        let trace = builder.build(&[], &[]);
        assert_eq!(
            trace.rules_applied,
            vec![
                String::from("[water] band selected"),
                String::from("[energy] cascade resolved"),
            ]
        );
    }

    #[test]
    fn warnings_are_appended_after_limitations() {
        let mut builder = TraceBuilder::new();
        builder.add_limitation("V0.1: Seismic data not integrated. Verify locally.");
        let warnings = vec![String::from("Terrain data unavailable: timeout.")];
        let trace = builder.build(&[], &warnings);
        assert_eq!(trace.limitations.len(), 2);
        assert!(trace.limitations.first().unwrap().contains("Seismic"));
        assert!(trace.limitations.last().unwrap().contains("Terrain"));
    }

    #[test]
    fn build_copies_data_sources() {
        let sources = vec![source("open-meteo", SourceStatus::Success)];
        let trace = TraceBuilder::new().build(&sources, &[]);
        assert_eq!(trace.data_sources_used, sources);
    }
}
