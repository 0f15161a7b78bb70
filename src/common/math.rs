//! Rolling-window and recursive smoothing primitives.
//!
//! Every function returns a series the same length as its input. Positions
//! where a window cannot be filled yet hold `f64::NAN`.

/// Trailing simple moving average.
///
/// `out[i]` is the mean of `values[i + 1 - period..=i]`; the first
/// `period - 1` entries are NaN. A period of zero yields an all-NaN series.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    for (offset, window) in values.windows(period).enumerate() {
        out[offset + period - 1] = window.iter().sum::<f64>() / period as f64;
    }
    out
}

/// Trailing sample standard deviation (n - 1 denominator).
///
/// Windows of a single value have no sample deviation and stay NaN.
pub fn rolling_std(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period < 2 || values.len() < period {
        return out;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let mean = window.iter().sum::<f64>() / period as f64;
        let sum_sq: f64 = window.iter().map(|v| (v - mean).powi(2)).sum();
        out[offset + period - 1] = (sum_sq / (period - 1) as f64).sqrt();
    }
    out
}

/// Smoothing factor for a span-based exponential average.
pub fn span_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Span-based exponential moving average seeded with the first non-NaN value.
///
/// `out[i] = values[i] * a + out[i - 1] * (1 - a)` with `a = 2 / (span + 1)`.
/// Rows before the seed are NaN. A NaN value repeats the previous average;
/// after a gap of `k` rows the old average is weighted by `(1 - a)^k` and
/// the pair renormalised.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = span_alpha(span);
    let mut out = Vec::with_capacity(values.len());
    let mut current = f64::NAN;
    let mut gap = 0;

    for &value in values {
        if current.is_nan() {
            current = value;
        } else {
            gap += 1;
            if !value.is_nan() {
                current = if gap == 1 {
                    ema_from_previous(value, current, alpha)
                } else {
                    let old_weight = (1.0 - alpha).powi(gap);
                    (current * old_weight + value * alpha) / (old_weight + alpha)
                };
                gap = 0;
            }
        }
        out.push(current);
    }
    out
}

/// One step of the exponential recursion.
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    value * alpha + previous * (1.0 - alpha)
}

/// First differences; `out[0]` is NaN.
pub fn diff(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }

    out.push(f64::NAN);
    out.extend(values.windows(2).map(|pair| pair[1] - pair[0]));
    out
}

/// Element-wise `a - b`.
pub fn subtract(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x - y).collect()
}
