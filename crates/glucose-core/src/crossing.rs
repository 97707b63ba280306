// File: crates/glucose-core/src/crossing.rs
// Summary: Danger-threshold crossing time via a fixed-slope secant search.

use crate::error::GlucoseError;
use crate::interpolate::{anchor_index, anchor_value};
use crate::series::Series;
use crate::types::CROSSING_ITERATIONS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingEstimate {
    pub time: f64,
    /// Secant slope through readings k-1 and k+1, fixed for every pass.
    pub rate: f64,
    /// Guess after each pass; `trace[CROSSING_ITERATIONS - 1] == time`.
    pub trace: [f64; CROSSING_ITERATIONS],
}

/// Estimate when glucose reaches `danger`.
///
/// Starts at `x[k]` and performs exactly `CROSSING_ITERATIONS` Newton steps on
/// `f(t) = y[k] + rate * (t - x[k]) - danger`. The model is linear, so the
/// first step lands on the root and the rest leave it in place.
pub fn estimate_crossing(series: &Series, danger: f64) -> Result<CrossingEstimate, GlucoseError> {
    let k = anchor_index(series);
    let y_prev = anchor_value(series, k, k as isize - 1)?;
    let y_k = anchor_value(series, k, k as isize)?;
    let y_next = anchor_value(series, k, k as isize + 1)?;
    let (x_prev, x_k, x_next) = (series.time(k - 1), series.time(k), series.time(k + 1));

    let dx = x_next - x_prev;
    if dx == 0.0 {
        return Err(GlucoseError::DegenerateRate {
            what: format!("zero time delta between readings {} and {}", k - 1, k + 1),
        });
    }
    let rate = (y_next - y_prev) / dx;
    if rate == 0.0 {
        return Err(GlucoseError::DegenerateRate {
            what: format!("flat glucose between readings {} and {}", k - 1, k + 1),
        });
    }

    let mut trace = [0.0; CROSSING_ITERATIONS];
    let mut guess = x_k;
    for slot in trace.iter_mut() {
        let f = y_k + rate * (guess - x_k) - danger;
        guess -= f / rate;
        *slot = guess;
    }
    tracing::debug!(anchor = k, rate, time = guess, "threshold crossing estimated");

    Ok(CrossingEstimate { time: guess, rate, trace })
}
