//! Unit tests for Bollinger Bands indicator

use crate::support::{assert_close, wavy_closes};
use stockdash::indicators::volatility::calculate_bollinger_bands_default;

#[test]
fn test_flat_series_collapses_bands() {
    let bands = calculate_bollinger_bands_default(&[100.0; 25]);

    assert!(bands.middle[..19].iter().all(|v| v.is_nan()));
    assert!(bands.upper[..19].iter().all(|v| v.is_nan()));
    for i in 19..25 {
        assert_eq!(bands.std[i], 0.0);
        assert_eq!(bands.middle[i], 100.0);
        assert_eq!(bands.upper[i], 100.0);
        assert_eq!(bands.lower[i], 100.0);
    }
}

#[test]
fn test_band_width_is_four_deviations() {
    let closes = wavy_closes(60);
    let bands = calculate_bollinger_bands_default(&closes);

    for i in 19..closes.len() {
        assert!(bands.std[i] > 0.0);
        assert_close(bands.upper[i] - bands.lower[i], 4.0 * bands.std[i]);
    }
    assert_eq!(bands.period, 20);
    assert_eq!(bands.std_dev, 2.0);
}

#[test]
fn test_bands_short_series() {
    let bands = calculate_bollinger_bands_default(&[1.0, 2.0, 3.0]);
    assert_eq!(bands.lower.len(), 3);
    assert!(bands.lower.iter().all(|v| v.is_nan()));
}
