//! Fixtures shared by the unit tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use stockdash::models::{Bar, PriceSeries};

pub const TOLERANCE: f64 = 1e-9;

/// Midnight on 2024-01-01 plus `offset` days
pub fn day(offset: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        + Duration::days(offset)
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let dates = (0..closes.len() as i64).map(day).collect();
    PriceSeries::new(dates)
        .with_numeric("Close", closes.to_vec())
        .unwrap()
}

pub fn bars_from_closes(closes: &[f64], ticker: &str, brand: &str, industry: &str) -> Vec<Bar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Bar::new(close - 0.5, close + 1.0, close - 1.0, close, 1000.0 + i as f64, day(i as i64))
                .with_ticker(ticker, brand, industry)
        })
        .collect()
}

/// Closes rising and falling around 100 without a trend
pub fn wavy_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + (i % 3) as f64)
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
