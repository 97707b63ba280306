// File: crates/glucose-core/src/types.rs
// Summary: Shared constants (series bounds, sentinel, clock wrap, iteration count).

/// Raw glucose value that marks a missing reading at the input boundary.
/// Matched by exact equality only.
pub const MISSING_SENTINEL: f64 = -1.0;

/// Fewest readings any interpolation can work with.
pub const MIN_READINGS: usize = 2;
/// Upper bound on series length.
pub const MAX_READINGS: usize = 20;

/// Hours added when a clock time does not advance past its predecessor.
pub const CLOCK_WRAP_HOURS: f64 = 12.0;

/// Fixed number of passes the threshold crossing search performs.
pub const CROSSING_ITERATIONS: usize = 5;
