// File: crates/glucose-core/src/resolve.rs
// Summary: Missing-value reconstruction (two-point Newton for a single gap, segment-wise linear otherwise).

use std::fmt;

use crate::error::GlucoseError;
use crate::series::Series;

/// Reconstruction strategy attached to each originally-missing index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    NewtonForward,
    NewtonBackward,
    SegmentLinear,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::NewtonForward => "Newton Forward Interpolation",
            Method::NewtonBackward => "Newton Backward Interpolation",
            Method::SegmentLinear => "Segment-wise Linear Interpolation",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome for one originally-missing index.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSlot {
    pub index: usize,
    pub method: Method,
    pub outcome: Result<f64, GlucoseError>,
}

/// Per-slot outcomes in missing-set order. Empty when nothing was missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub slots: Vec<ResolvedSlot>,
}

impl Resolution {
    pub fn is_noop(&self) -> bool { self.slots.is_empty() }

    /// Branch taken for the whole series, `None` when nothing was missing.
    pub fn method(&self) -> Option<Method> { self.slots.first().map(|s| s.method) }

    pub fn unresolved(&self) -> impl Iterator<Item = &ResolvedSlot> {
        self.slots.iter().filter(|s| s.outcome.is_err())
    }

    pub fn all_resolved(&self) -> bool { self.unresolved().next().is_none() }
}

/// Fill every originally-missing slot once.
///
/// The branch is picked from the count captured at construction: one gap uses
/// the two-point Newton formula, several gaps are bridged independently by
/// their nearest known neighbors. Slots that cannot be reconstructed stay
/// absent and report `UnresolvableMissing`; the remaining slots still resolve.
pub fn resolve_missing(series: &mut Series) -> Resolution {
    let missing = series.missing().to_vec();
    let slots = match missing.as_slice() {
        [] => Vec::new(),
        [k] => vec![resolve_single(series, *k)],
        many => many.iter().map(|&i| resolve_segment(series, i)).collect(),
    };
    Resolution { slots }
}

fn resolve_single(series: &mut Series, k: usize) -> ResolvedSlot {
    let method = if k <= series.len() / 2 { Method::NewtonForward } else { Method::NewtonBackward };
    series.tag(k, method);
    let outcome = newton_two_point(series, k, method);
    match &outcome {
        Ok(v) => {
            tracing::debug!(index = k, value = *v, method = %method, "resolved single gap");
            series.fill(k, *v);
        }
        Err(e) => tracing::debug!(index = k, method = %method, error = %e, "single gap unresolved"),
    }
    ResolvedSlot { index: k, method, outcome }
}

/// `y_a + ((x_k - x_a) / h) * slope_term` with `h = x1 - x0` for both directions.
/// Forward anchors on readings 0 and 1, backward on the last two.
fn newton_two_point(series: &Series, k: usize, method: Method) -> Result<f64, GlucoseError> {
    let last = series.len() - 1;
    let h = series.time(1) - series.time(0);
    let known = |j: usize| {
        series.glucose(j).ok_or_else(|| GlucoseError::UnresolvableMissing {
            index: k,
            reason: format!("anchor reading {j} is itself missing"),
        })
    };
    let xk = series.time(k);
    match method {
        Method::NewtonForward => {
            let (y0, y1) = (known(0)?, known(1)?);
            Ok(y0 + ((xk - series.time(0)) / h) * (y1 - y0))
        }
        _ => {
            let (y_last, y_prev) = (known(last)?, known(last - 1)?);
            Ok(y_last + ((xk - series.time(last)) / h) * (y_last - y_prev))
        }
    }
}

fn resolve_segment(series: &mut Series, i: usize) -> ResolvedSlot {
    let method = Method::SegmentLinear;
    series.tag(i, method);

    // Scan the current state: earlier slots filled in this pass count as known.
    let left = (0..i).rev().find_map(|j| series.glucose(j).map(|y| (series.time(j), y)));
    let right = (i + 1..series.len()).find_map(|j| series.glucose(j).map(|y| (series.time(j), y)));

    let outcome = match (left, right) {
        (Some((xl, yl)), Some((xr, yr))) => {
            Ok(yl + (yr - yl) * (series.time(i) - xl) / (xr - xl))
        }
        (None, _) => Err(GlucoseError::UnresolvableMissing {
            index: i,
            reason: "no known reading to the left".to_string(),
        }),
        (_, None) => Err(GlucoseError::UnresolvableMissing {
            index: i,
            reason: "no known reading to the right".to_string(),
        }),
    };
    match &outcome {
        Ok(v) => {
            tracing::debug!(index = i, value = *v, "resolved segment gap");
            series.fill(i, *v);
        }
        Err(e) => tracing::debug!(index = i, error = %e, "segment gap unresolved"),
    }
    ResolvedSlot { index: i, method, outcome }
}
