//! Unit tests for rolling-window math helpers

use crate::support::assert_close;
use stockdash::common::math::{diff, ema, rolling_mean, rolling_std, span_alpha, subtract};

#[test]
fn test_rolling_mean_fills_after_window() {
    let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    assert!(out[0].is_nan());
    assert!(out[1].is_nan());
    assert_eq!(&out[2..], &[2.0, 3.0, 4.0]);
}

#[test]
fn test_rolling_mean_zero_period() {
    assert!(rolling_mean(&[1.0, 2.0], 0).iter().all(|v| v.is_nan()));
}

#[test]
fn test_rolling_std_is_sample_deviation() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let out = rolling_std(&values, 8);
    assert_close(out[7], (32.0_f64 / 7.0).sqrt());
    assert!(out[6].is_nan());
}

#[test]
fn test_rolling_std_constant_is_zero() {
    let out = rolling_std(&[3.0; 5], 3);
    assert_eq!(&out[2..], &[0.0, 0.0, 0.0]);
}

#[test]
fn test_ema_seeded_with_first_value() {
    assert_eq!(span_alpha(3), 0.5);
    assert_eq!(ema(&[1.0, 2.0, 3.0], 3), vec![1.0, 1.5, 2.25]);
}

#[test]
fn test_ema_empty() {
    assert!(ema(&[], 10).is_empty());
}

#[test]
fn test_diff_first_is_nan() {
    let out = diff(&[1.0, 4.0, 2.0]);
    assert!(out[0].is_nan());
    assert_eq!(&out[1..], &[3.0, -2.0]);
}

#[test]
fn test_subtract() {
    assert_eq!(subtract(&[5.0, 3.0], &[1.0, 4.0]), vec![4.0, -1.0]);
}

#[test]
fn test_nan_propagates_through_window() {
    let out = rolling_mean(&[1.0, f64::NAN, 3.0, 4.0, 5.0], 2);
    assert!(out[1].is_nan());
    assert!(out[2].is_nan());
    assert_eq!(out[3], 3.5);
}

#[test]
fn test_ema_carries_over_missing_values() {
    let out = ema(&[10.0, f64::NAN, 12.0, 13.0], 3);
    assert_eq!(out[0], 10.0);
    assert_eq!(out[1], 10.0);
    // Old weight decays to 0.25 over the two-row gap.
    assert_close(out[2], (10.0 * 0.25 + 12.0 * 0.5) / 0.75);
    assert_close(out[3], 13.0 * 0.5 + out[2] * 0.5);
}

#[test]
fn test_ema_seeds_from_first_observation() {
    let out = ema(&[f64::NAN, f64::NAN, 2.0, 4.0], 3);
    assert!(out[0].is_nan());
    assert!(out[1].is_nan());
    assert_eq!(&out[2..], &[2.0, 3.0]);
}
