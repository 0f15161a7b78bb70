//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdSeries;

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD, seeded with the first MACD value
/// Histogram = MACD - Signal
pub fn calculate_macd(
    closes: &[f64],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    let ema_fast = math::ema(closes, fast_period as usize);
    let ema_slow = math::ema(closes, slow_period as usize);
    let macd = math::subtract(&ema_fast, &ema_slow);
    let signal = math::ema(&macd, signal_period as usize);
    let histogram = math::subtract(&macd, &signal);

    MacdSeries {
        ema_fast,
        ema_slow,
        macd,
        signal,
        histogram,
        period: (fast_period, slow_period, signal_period),
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}
