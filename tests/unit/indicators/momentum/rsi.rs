//! Unit tests for RSI indicator

use crate::support::assert_close;
use stockdash::indicators::momentum::{calculate_rsi_default, relative_strength};

#[test]
fn test_rsi_rising_series_pins_at_100() {
    let closes: Vec<f64> = (0..30).map(|i| 50.0 + i as f64).collect();
    let rsi = calculate_rsi_default(&closes);

    assert!(rsi.rsi[..13].iter().all(|v| v.is_nan()));
    assert!(rsi.rsi[13..].iter().all(|&v| v == 100.0));
    assert!(rsi.rs[13..].iter().all(|v| v.is_infinite()));
}

#[test]
fn test_rsi_flat_series_is_undefined() {
    let rsi = calculate_rsi_default(&[100.0; 25]);
    assert!(rsi.rsi.iter().all(|v| v.is_nan()));
    assert_eq!(rsi.avg_gain[20], 0.0);
    assert_eq!(rsi.avg_loss[20], 0.0);
}

#[test]
fn test_rsi_alternating_series() {
    let closes: Vec<f64> = (0..15).map(|i| if i % 2 == 0 { 10.0 } else { 11.0 }).collect();
    let rsi = calculate_rsi_default(&closes);

    // Row 13 window: zero for row 0, seven gains and six losses of 1.
    assert_close(rsi.avg_gain[13], 7.0 / 14.0);
    assert_close(rsi.avg_loss[13], 6.0 / 14.0);
    assert_close(rsi.rs[13], 7.0 / 6.0);
    assert_close(rsi.rsi[13], 100.0 - 600.0 / 13.0);
}

#[test]
fn test_rsi_intermediate_columns() {
    let rsi = calculate_rsi_default(&[10.0, 12.0, 11.0]);
    assert!(rsi.diff[0].is_nan());
    assert_eq!(rsi.gain, vec![0.0, 2.0, 0.0]);
    assert_eq!(rsi.loss, vec![0.0, 0.0, 1.0]);
    assert_eq!(rsi.period, 14);
}

#[test]
fn test_relative_strength_branches() {
    let (rs, rsi) = relative_strength(2.0, 0.0);
    assert!(rs.is_infinite());
    assert_eq!(rsi, 100.0);

    let (rs, rsi) = relative_strength(0.0, 0.0);
    assert!(rs.is_nan());
    assert!(rsi.is_nan());

    assert_eq!(relative_strength(1.0, 1.0), (1.0, 50.0));
    assert_eq!(relative_strength(0.0, 1.0), (0.0, 0.0));
    assert!(relative_strength(f64::NAN, 1.0).1.is_nan());
}
