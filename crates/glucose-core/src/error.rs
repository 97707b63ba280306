// File: crates/glucose-core/src/error.rs
// Summary: Error taxonomy for the numeric core.

use thiserror::Error;

/// Failures surfaced by core operations. Every fallible operation returns one of
/// these in its `Result`; nothing in the core panics on bad data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GlucoseError {
    /// Too few or too many readings, non-finite times, or times that are not
    /// strictly increasing after normalization.
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// A missing slot could not be reconstructed. Reported per slot; other
    /// slots are still processed.
    #[error("missing reading at index {index} could not be resolved: {reason}")]
    UnresolvableMissing { index: usize, reason: String },

    /// Zero time delta or zero rate in a division.
    #[error("degenerate rate: {what}")]
    DegenerateRate { what: String },

    /// The anchor needs a neighbor outside the series.
    #[error("anchor index {anchor} needs index {needed}, series has {len} readings")]
    AnchorOutOfRange { anchor: usize, needed: isize, len: usize },

    /// A reading used as an anchor is still absent.
    #[error("reading at index {index} is unresolved")]
    UnresolvedAnchor { index: usize },
}
