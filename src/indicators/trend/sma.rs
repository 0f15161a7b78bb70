//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Calculate the trailing SMA for every position of `closes`.
///
/// The first `period - 1` entries are NaN.
pub fn calculate_sma(closes: &[f64], period: u32) -> Vec<f64> {
    math::rolling_mean(closes, period as usize)
}
