// File: crates/glucose-core/src/analysis.rs
// Summary: Pipeline glue; builds the series, fills gaps, then runs each estimate independently.

use crate::crossing::{estimate_crossing, CrossingEstimate};
use crate::error::GlucoseError;
use crate::interpolate::{interpolate_at, InterpolationResult};
use crate::resolve::{resolve_missing, Method, Resolution};
use crate::risk::{classify, Risk};
use crate::series::Series;
use crate::time::{meal_context, MealContext};

/// Per-reading view handed to report rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingSummary {
    pub index: usize,
    pub time: f64,
    pub glucose: Option<f64>,
    pub risk: Option<Risk>,
    pub meal: MealContext,
    /// Set only for readings that were missing at ingestion.
    pub method: Option<Method>,
}

/// Everything computed for one run. Only an invalid series aborts; the
/// interpolation and crossing estimates each carry their own result.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub series: Series,
    pub resolution: Resolution,
    pub query_time: f64,
    pub danger_level: f64,
    pub interpolation: Result<InterpolationResult, GlucoseError>,
    pub crossing: Result<CrossingEstimate, GlucoseError>,
}

impl Analysis {
    /// Run the full pipeline over raw `(time, glucose)` pairs (`-1` marks a gap).
    pub fn run(raw: &[(f64, f64)], query_time: f64, danger_level: f64) -> Result<Self, GlucoseError> {
        let series = Series::from_raw(raw)?;
        Ok(Self::from_series(series, query_time, danger_level))
    }

    pub fn from_series(mut series: Series, query_time: f64, danger_level: f64) -> Self {
        let resolution = resolve_missing(&mut series);
        let interpolation = interpolate_at(&series, query_time);
        let crossing = estimate_crossing(&series, danger_level);
        Self { series, resolution, query_time, danger_level, interpolation, crossing }
    }

    pub fn readings(&self) -> impl Iterator<Item = ReadingSummary> + '_ {
        self.series.readings().iter().enumerate().map(move |(index, r)| ReadingSummary {
            index,
            time: r.time,
            glucose: r.glucose,
            risk: r.glucose.map(classify),
            meal: meal_context(r.time),
            method: self.series.method(index),
        })
    }
}
