// File: crates/glucose-core/src/time.rs
// Summary: Clock-time normalization, query wrapping, and 12-hour labels.

use std::fmt;

use chrono::NaiveTime;

use crate::types::CLOCK_WRAP_HOURS;

/// Rewrites raw clock times into a strictly increasing sequence.
///
/// Each time is compared only with the already-normalized time right before it;
/// when it does not advance, 12 hours are added once. Runs of wraps therefore
/// compound (11, 1, 3 becomes 11, 13, 15). A single +12 may still leave the
/// value behind its predecessor (e.g. 20 followed by 2); series validation
/// catches that.
pub fn normalize_times(times: &mut [f64]) {
    for i in 1..times.len() {
        if times[i] <= times[i - 1] {
            times[i] += CLOCK_WRAP_HOURS;
        }
    }
}

/// Applies the same 12-hour wrap to a query time that precedes the series start.
#[inline]
pub fn wrap_query_time(t: f64, first: f64) -> f64 {
    if t < first { t + CLOCK_WRAP_HOURS } else { t }
}

/// Formats fractional hours as `hh:mm AM/PM`.
/// Minutes are truncated, and hours past midnight wrap back onto the clock face.
pub fn clock_label(t: f64) -> String {
    if !t.is_finite() {
        return "--:--".to_string();
    }
    let hour = t.trunc();
    let minute = ((t - hour) * 60.0).trunc().abs() as u32;
    let hour = (hour as i64).rem_euclid(24) as u32;
    match NaiveTime::from_hms_opt(hour, minute.min(59), 0) {
        Some(clock) => clock.format("%I:%M %p").to_string(),
        None => "--:--".to_string(),
    }
}

/// Meal phase inferred from the hour of a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MealContext {
    BeforeMeal,
    AfterMeal,
}

impl fmt::Display for MealContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealContext::BeforeMeal => f.write_str("Before Meal"),
            MealContext::AfterMeal => f.write_str("After Meal"),
        }
    }
}

/// Breakfast window 5-7, post-breakfast 8-11, lunch window 12-16, otherwise after meal.
/// Uses the truncated normalized hour as-is, so times past 23 fall into "after meal".
pub fn meal_context(t: f64) -> MealContext {
    let hour = t.trunc() as i64;
    match hour {
        5..=7 => MealContext::BeforeMeal,
        8..=11 => MealContext::AfterMeal,
        12..=16 => MealContext::BeforeMeal,
        _ => MealContext::AfterMeal,
    }
}
