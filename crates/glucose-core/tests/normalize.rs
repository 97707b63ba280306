// File: crates/glucose-core/tests/normalize.rs
// Purpose: Clock wrap rule, series validation, and the captured missing set.

use glucose_core::series::Reading;
use glucose_core::time::{clock_label, meal_context, normalize_times, wrap_query_time, MealContext};
use glucose_core::{GlucoseError, Series};

#[test]
fn wraps_past_twelve() {
    let mut t = vec![11.0, 1.0, 3.0];
    normalize_times(&mut t);
    assert_eq!(t, vec![11.0, 13.0, 15.0]);
}

#[test]
fn increasing_times_untouched() {
    let mut t = vec![8.0, 9.0, 10.5];
    normalize_times(&mut t);
    assert_eq!(t, vec![8.0, 9.0, 10.5]);
}

#[test]
fn ties_compound_against_previous_only() {
    // Each value is compared with the already-normalized predecessor.
    let mut t = vec![5.0, 5.0, 5.0];
    normalize_times(&mut t);
    assert_eq!(t, vec![5.0, 17.0, 17.0]);

    let err = Series::from_raw(&[(5.0, 8.0), (5.0, 8.0), (5.0, 8.0)]).unwrap_err();
    assert!(matches!(err, GlucoseError::InvalidSeries(_)));
}

#[test]
fn single_wrap_can_still_fall_behind() {
    let err = Series::from_raw(&[(1.0, 8.0), (20.0, 8.0), (2.0, 8.0)]).unwrap_err();
    assert!(matches!(err, GlucoseError::InvalidSeries(_)));
}

#[test]
fn valid_series_are_strictly_increasing() {
    let inputs: [&[f64]; 4] = [
        &[6.0, 7.0, 8.0, 9.0],
        &[11.0, 12.0, 1.0, 2.0],
        &[10.0, 11.5, 0.5, 1.0, 3.0],
        &[9.0, 9.5],
    ];
    for times in inputs {
        let pairs: Vec<(f64, f64)> = times.iter().map(|&t| (t, 8.0)).collect();
        let series = Series::from_raw(&pairs).expect("valid series");
        for w in series.readings().windows(2) {
            assert!(w[1].time > w[0].time, "not increasing: {:?}", series.readings());
        }
    }
}

#[test]
fn length_bounds() {
    assert!(matches!(Series::from_raw(&[]), Err(GlucoseError::InvalidSeries(_))));
    assert!(matches!(Series::from_raw(&[(8.0, 5.0)]), Err(GlucoseError::InvalidSeries(_))));

    let many: Vec<(f64, f64)> = (0..21).map(|i| (i as f64 * 0.5, 8.0)).collect();
    assert!(matches!(Series::from_raw(&many), Err(GlucoseError::InvalidSeries(_))));
    assert_eq!(Series::from_raw(&many[..20]).expect("20 readings").len(), 20);
}

#[test]
fn non_finite_time_rejected() {
    let err = Series::from_raw(&[(8.0, 5.0), (f64::NAN, 6.0)]).unwrap_err();
    assert!(matches!(err, GlucoseError::InvalidSeries(_)));
}

#[test]
fn sentinel_is_exact_equality() {
    assert!(Reading::from_raw(8.0, -1.0).is_missing());
    assert_eq!(Reading::from_raw(8.0, -1.5).glucose, Some(-1.5));
    assert_eq!(Reading::from_raw(8.0, -0.999).glucose, Some(-0.999));
}

#[test]
fn series_from_readings_normalizes_times() {
    let readings = vec![
        Reading::new(11.0, Some(9.0)),
        Reading::new(1.0, None),
        Reading::new(3.0, Some(12.0)),
    ];
    let series = Series::new(readings).expect("valid series");
    let times: Vec<f64> = series.readings().iter().map(|r| r.time).collect();
    assert_eq!(times, vec![11.0, 13.0, 15.0]);
    assert_eq!(series.missing(), &[1]);
}

#[test]
fn missing_set_captured_at_ingestion() {
    let mut series = Series::from_raw(&[(1.0, 10.0), (2.0, -1.0), (3.0, -1.0), (4.0, 16.0)]).unwrap();
    assert_eq!(series.missing(), &[1, 2]);
    glucose_core::resolve_missing(&mut series);
    assert_eq!(series.missing(), &[1, 2]);
    assert!(series.was_missing(2));
    assert!(!series.was_missing(3));
}

#[test]
fn query_wrap() {
    assert_eq!(wrap_query_time(2.0, 8.0), 14.0);
    assert_eq!(wrap_query_time(8.0, 8.0), 8.0);
    assert_eq!(wrap_query_time(9.5, 8.0), 9.5);
}

#[test]
fn clock_labels() {
    assert_eq!(clock_label(10.5), "10:30 AM");
    assert_eq!(clock_label(0.0), "12:00 AM");
    assert_eq!(clock_label(12.0), "12:00 PM");
    assert_eq!(clock_label(13.25), "01:15 PM");
    assert_eq!(clock_label(25.0), "01:00 AM");
    assert_eq!(clock_label(f64::NAN), "--:--");
}

#[test]
fn meal_windows() {
    assert_eq!(meal_context(6.0), MealContext::BeforeMeal);
    assert_eq!(meal_context(9.5), MealContext::AfterMeal);
    assert_eq!(meal_context(13.0), MealContext::BeforeMeal);
    assert_eq!(meal_context(18.0), MealContext::AfterMeal);
    assert_eq!(meal_context(25.0), MealContext::AfterMeal);
    assert_eq!(MealContext::BeforeMeal.to_string(), "Before Meal");
}
