//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::indicators::RsiSeries;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// The first difference is undefined, so row 0 contributes a zero gain and a
/// zero loss to the first window.
pub fn calculate_rsi(closes: &[f64], period: u32) -> RsiSeries {
    let diff = math::diff(closes);
    let gain: Vec<f64> = diff.iter().map(|&d| if d > 0.0 { d } else { 0.0 }).collect();
    let loss: Vec<f64> = diff.iter().map(|&d| if d < 0.0 { -d } else { 0.0 }).collect();
    let avg_gain = math::rolling_mean(&gain, period as usize);
    let avg_loss = math::rolling_mean(&loss, period as usize);

    let (rs, rsi): (Vec<f64>, Vec<f64>) = avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&g, &l)| relative_strength(g, l))
        .unzip();

    RsiSeries {
        diff,
        gain,
        loss,
        avg_gain,
        avg_loss,
        rs,
        rsi,
        period,
    }
}

/// RS and RSI for one window.
///
/// A window with no losses has no finite RS: any gain pins RSI at 100, and a
/// window with neither gains nor losses leaves it undefined.
pub fn relative_strength(avg_gain: f64, avg_loss: f64) -> (f64, f64) {
    if avg_gain.is_nan() || avg_loss.is_nan() {
        return (f64::NAN, f64::NAN);
    }

    if avg_loss == 0.0 {
        return if avg_gain > 0.0 {
            (f64::INFINITY, 100.0)
        } else {
            (f64::NAN, f64::NAN)
        };
    }

    let rs = avg_gain / avg_loss;
    (rs, 100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> RsiSeries {
    calculate_rsi(closes, 14)
}
