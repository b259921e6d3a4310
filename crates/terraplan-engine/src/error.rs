//! Error types for the rule engine.
//!
//! The engine is total over well-formed snapshots: upstream data
//! unavailability is never an error here (it is recorded as source status
//! and downgraded confidence). The only failure mode is a malformed
//! snapshot, which callers must treat as an internal fault rather than a
//! validation rejection.

/// Errors that can occur during blueprint generation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A numeric field of the snapshot is NaN or infinite, so threshold
    /// comparisons would silently misfire.
    #[error("malformed snapshot: field `{field}` is not a finite number")]
    MalformedSnapshot {
        /// The offending snapshot field.
        field: &'static str,
    },
}
