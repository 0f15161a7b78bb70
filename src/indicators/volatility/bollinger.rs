//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerSeries;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn calculate_bollinger_bands(closes: &[f64], period: u32, std_dev: f64) -> BollingerSeries {
    let middle = math::rolling_mean(closes, period as usize);
    let std = math::rolling_std(closes, period as usize);

    let upper: Vec<f64> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m + std_dev * s)
        .collect();
    let lower: Vec<f64> = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| m - std_dev * s)
        .collect();

    BollingerSeries {
        middle,
        std,
        upper,
        lower,
        period,
        std_dev,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(closes: &[f64]) -> BollingerSeries {
    calculate_bollinger_bands(closes, 20, 2.0)
}
