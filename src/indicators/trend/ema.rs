//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate the span-based EMA for every position of `closes`.
///
/// Seeded with the first close rather than an SMA of the first window, so
/// every position is defined.
pub fn calculate_ema(closes: &[f64], period: u32) -> Vec<f64> {
    math::ema(closes, period as usize)
}

/// Calculate multiple EMAs at once, keyed by period
pub fn calculate_emas(closes: &[f64], periods: &[u32]) -> Vec<(u32, Vec<f64>)> {
    periods
        .iter()
        .map(|&period| (period, calculate_ema(closes, period)))
        .collect()
}
