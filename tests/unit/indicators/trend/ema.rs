//! Unit tests for EMA indicator

use crate::support::{assert_close, wavy_closes};
use stockdash::indicators::trend::{calculate_ema, calculate_emas};

#[test]
fn test_ema10_seed_and_recursion() {
    let closes = wavy_closes(60);
    let ema = calculate_ema(&closes, 10);

    assert_eq!(ema[0], closes[0]);
    for i in 1..closes.len() {
        assert_close(ema[i], closes[i] * (2.0 / 11.0) + ema[i - 1] * (9.0 / 11.0));
    }
}

#[test]
fn test_ema_defined_for_short_series() {
    let ema = calculate_ema(&[5.0, 6.0], 50);
    assert_eq!(ema.len(), 2);
    assert!(ema.iter().all(|v| v.is_finite()));
}

#[test]
fn test_ema_constant_series() {
    let ema = calculate_ema(&[42.0; 20], 10);
    for value in ema {
        assert_close(value, 42.0);
    }
}

#[test]
fn test_calculate_multiple_emas() {
    let closes = wavy_closes(80);
    let emas = calculate_emas(&closes, &[10, 50]);
    assert_eq!(emas.len(), 2);
    assert_eq!(emas[0].0, 10);
    assert_eq!(emas[1].1.len(), 80);
}
