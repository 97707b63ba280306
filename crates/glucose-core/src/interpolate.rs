// File: crates/glucose-core/src/interpolate.rs
// Summary: Glucose estimate at a query time from the fixed anchor pair (k-1, k).

use crate::error::GlucoseError;
use crate::risk::{classify, Risk};
use crate::series::Series;
use crate::time::wrap_query_time;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolationResult {
    pub time: f64, // query time after the 12-hour wrap
    pub glucose: f64,
    pub risk: Risk,
}

/// First originally-missing index, or 1 when the series was complete.
/// Depends only on whether anything was missing, not on where the query falls.
pub fn anchor_index(series: &Series) -> usize {
    series.missing().first().copied().unwrap_or(1)
}

/// Known glucose at `index`, or the reason it cannot serve as an anchor.
pub(crate) fn anchor_value(series: &Series, anchor: usize, index: isize) -> Result<f64, GlucoseError> {
    if index < 0 || index as usize >= series.len() {
        return Err(GlucoseError::AnchorOutOfRange { anchor, needed: index, len: series.len() });
    }
    let index = index as usize;
    series.glucose(index).ok_or(GlucoseError::UnresolvedAnchor { index })
}

/// Linear estimate through `(x[k-1], y[k-1])` and `(x[k], y[k])`, evaluated at
/// `t` (wrapped by 12 hours when it precedes the first reading). Extrapolates
/// when `t` lies outside the pair.
pub fn interpolate_at(series: &Series, t: f64) -> Result<InterpolationResult, GlucoseError> {
    let k = anchor_index(series);
    let y_prev = anchor_value(series, k, k as isize - 1)?;
    let y_k = anchor_value(series, k, k as isize)?;
    let (x_prev, x_k) = (series.time(k - 1), series.time(k));

    let dx = x_k - x_prev;
    if dx == 0.0 {
        return Err(GlucoseError::DegenerateRate {
            what: format!("zero time delta between readings {} and {}", k - 1, k),
        });
    }

    let time = wrap_query_time(t, series.time(0));
    let glucose = y_prev + (time - x_prev) * (y_k - y_prev) / dx;
    Ok(InterpolationResult { time, glucose, risk: classify(glucose) })
}
