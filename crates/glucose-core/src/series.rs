// File: crates/glucose-core/src/series.rs
// Summary: Reading and Series model; normalization and validation happen at construction.
// Notes:
// - Missing glucose is `None`. The `-1` sentinel only exists at the raw boundary
//   (`Reading::from_raw`), where it is matched by exact equality.
// - The set of originally-missing indices is captured once and never recomputed,
//   so it still answers "was this reconstructed" after the slots are filled.

use crate::error::GlucoseError;
use crate::resolve::Method;
use crate::time::normalize_times;
use crate::types::{MAX_READINGS, MIN_READINGS, MISSING_SENTINEL};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    pub time: f64,            // hours; may exceed 24 after normalization
    pub glucose: Option<f64>, // None = missing / unresolved
}

impl Reading {
    pub fn new(time: f64, glucose: Option<f64>) -> Self {
        Self { time, glucose }
    }

    /// Build from raw input where exactly `-1` means missing. Other values,
    /// negative or not, pass through untouched.
    pub fn from_raw(time: f64, glucose: f64) -> Self {
        let glucose = if glucose == MISSING_SENTINEL { None } else { Some(glucose) };
        Self { time, glucose }
    }

    pub fn is_missing(&self) -> bool { self.glucose.is_none() }
}

#[derive(Clone, Debug)]
pub struct Series {
    readings: Vec<Reading>,
    missing: Vec<usize>,
    methods: Vec<Option<Method>>,
}

impl Series {
    /// Build from raw `(time, glucose)` pairs using the `-1` sentinel for gaps.
    pub fn from_raw(pairs: &[(f64, f64)]) -> Result<Self, GlucoseError> {
        let readings = pairs.iter().map(|&(t, g)| Reading::from_raw(t, g)).collect();
        Self::new(readings)
    }

    /// Normalize times in input order, then validate and capture the missing set.
    pub fn new(mut readings: Vec<Reading>) -> Result<Self, GlucoseError> {
        let n = readings.len();
        if n < MIN_READINGS {
            return Err(GlucoseError::InvalidSeries(format!(
                "need at least {MIN_READINGS} readings, got {n}"
            )));
        }
        if n > MAX_READINGS {
            return Err(GlucoseError::InvalidSeries(format!(
                "at most {MAX_READINGS} readings supported, got {n}"
            )));
        }
        if let Some(i) = readings.iter().position(|r| !r.time.is_finite()) {
            return Err(GlucoseError::InvalidSeries(format!("time at index {i} is not finite")));
        }

        let mut times: Vec<f64> = readings.iter().map(|r| r.time).collect();
        normalize_times(&mut times);
        for (r, t) in readings.iter_mut().zip(times) {
            r.time = t;
        }

        for i in 1..n {
            if readings[i].time <= readings[i - 1].time {
                return Err(GlucoseError::InvalidSeries(format!(
                    "normalized time {} at index {} does not follow {} at index {}",
                    readings[i].time,
                    i,
                    readings[i - 1].time,
                    i - 1
                )));
            }
        }

        let missing = readings
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_missing())
            .map(|(i, _)| i)
            .collect();

        Ok(Self { readings, missing, methods: vec![None; n] })
    }

    pub fn len(&self) -> usize { self.readings.len() }

    /// Always false for a constructed series; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool { self.readings.is_empty() }

    pub fn readings(&self) -> &[Reading] { &self.readings }

    pub fn time(&self, i: usize) -> f64 { self.readings[i].time }

    pub fn glucose(&self, i: usize) -> Option<f64> { self.readings[i].glucose }

    /// Indices that were missing at ingestion, in ascending order.
    pub fn missing(&self) -> &[usize] { &self.missing }

    pub fn was_missing(&self, i: usize) -> bool { self.missing.binary_search(&i).is_ok() }

    /// Reconstruction method attached to an originally-missing index, if the
    /// resolver has run.
    pub fn method(&self, i: usize) -> Option<Method> { self.methods.get(i).copied().flatten() }

    pub(crate) fn fill(&mut self, i: usize, value: f64) {
        self.readings[i].glucose = Some(value);
    }

    pub(crate) fn tag(&mut self, i: usize, method: Method) {
        self.methods[i] = Some(method);
    }
}
