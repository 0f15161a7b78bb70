//! Unit tests for SMA indicator

use crate::support::{assert_close, wavy_closes};
use stockdash::indicators::trend::calculate_sma;

#[test]
fn test_sma10_on_eleven_rows() {
    let closes: Vec<f64> = (10..=20).map(f64::from).collect();
    let sma = calculate_sma(&closes, 10);

    assert_eq!(sma.len(), 11);
    assert!(sma[..9].iter().all(|v| v.is_nan()));
    assert_eq!(sma[9], 14.5);
    assert_eq!(sma[10], 15.5);
}

#[test]
fn test_sma10_matches_trailing_mean() {
    let closes = wavy_closes(60);
    let sma = calculate_sma(&closes, 10);

    for i in 0..closes.len() {
        if i < 9 {
            assert!(sma[i].is_nan(), "row {i} should be undefined");
        } else {
            let window = &closes[i - 9..=i];
            assert_close(sma[i], window.iter().sum::<f64>() / 10.0);
        }
    }
}

#[test]
fn test_sma50_insufficient_data() {
    let closes = wavy_closes(30);
    assert!(calculate_sma(&closes, 50).iter().all(|v| v.is_nan()));
}
