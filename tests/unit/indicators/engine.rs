//! Unit tests for the indicator engine

use std::collections::BTreeSet;

use crate::support::{assert_close, bars_from_closes, day, series_from_closes, wavy_closes};
use stockdash::indicators::{IndicatorEngine, IndicatorError};
use stockdash::models::{IndicatorName, PriceSeries};

fn request(indicators: &[IndicatorName]) -> BTreeSet<IndicatorName> {
    indicators.iter().copied().collect()
}

#[test]
fn test_no_indicators_keeps_input_columns() {
    let series = PriceSeries::from_bars(&bars_from_closes(&wavy_closes(20), "AAA", "Acme", "Tech"));
    let result = IndicatorEngine::compute(&series, &BTreeSet::new()).unwrap();

    assert_eq!(result.column_names(), series.column_names());
    assert!(result.added_columns().is_empty());
}

#[test]
fn test_missing_close_column() {
    let series = PriceSeries::new(vec![day(0), day(1)])
        .with_numeric("Open", vec![1.0, 2.0])
        .unwrap();
    let err = IndicatorEngine::compute(&series, &request(&[IndicatorName::Sma10])).unwrap_err();
    assert_eq!(err, IndicatorError::MissingColumn("Close".to_string()));
}

#[test]
fn test_sma10_scenario() {
    let closes: Vec<f64> = (10..=20).map(f64::from).collect();
    let result =
        IndicatorEngine::compute(&series_from_closes(&closes), &request(&[IndicatorName::Sma10]))
            .unwrap();
    let sma = result.values("SMA10").unwrap();

    assert!(sma[..9].iter().all(|v| v.is_nan()));
    assert_eq!(sma[9], 14.5);
    assert_eq!(sma[10], 15.5);
    assert_eq!(result.added_columns(), ["SMA10"]);
}

#[test]
fn test_macd_does_not_leak_ema_columns() {
    let result = IndicatorEngine::compute(
        &series_from_closes(&wavy_closes(40)),
        &request(&[IndicatorName::Macd]),
    )
    .unwrap();

    assert!(!result.has_column("EMA10"));
    assert!(!result.has_column("EMA50"));
    assert_eq!(
        result.added_columns(),
        ["EMA12", "EMA26", "MACD", "MACD_Signal", "MACD_Hist"]
    );

    let macd = result.values("MACD").unwrap();
    let signal = result.values("MACD_Signal").unwrap();
    let hist = result.values("MACD_Hist").unwrap();
    for i in 0..macd.len() {
        assert_eq!(hist[i], macd[i] - signal[i]);
    }
}

#[test]
fn test_all_indicators_attach_in_family_order() {
    let all: BTreeSet<IndicatorName> = IndicatorName::ALL.into_iter().collect();
    let result = IndicatorEngine::compute(&series_from_closes(&wavy_closes(60)), &all).unwrap();

    assert_eq!(
        result.added_columns(),
        [
            "SMA10", "SMA50", "EMA10", "EMA50", "EMA12", "EMA26", "MACD", "MACD_Signal",
            "MACD_Hist", "diff", "gain", "loss", "avg_gain", "avg_loss", "rs", "RSI", "BB_MA",
            "BB_STD", "BB_Upper", "BB_Lower",
        ]
    );
    for name in result.added_columns() {
        assert_eq!(result.values(name).unwrap().len(), 60);
    }
}

#[test]
fn test_unsorted_input_is_sorted_and_not_mutated() {
    let closes = wavy_closes(30);
    let sorted = series_from_closes(&closes);

    let order: Vec<usize> = (0..30).rev().collect();
    let shuffled = PriceSeries::new(order.iter().map(|&i| day(i as i64)).collect())
        .with_numeric("Close", order.iter().map(|&i| closes[i]).collect())
        .unwrap();
    let before = shuffled.clone();

    let requested = request(&[IndicatorName::Ema10, IndicatorName::BollingerBands]);
    let from_shuffled = IndicatorEngine::compute(&shuffled, &requested).unwrap();
    let from_sorted = IndicatorEngine::compute(&sorted, &requested).unwrap();

    assert_eq!(shuffled, before);
    assert_eq!(from_shuffled.dates(), sorted.dates());
    assert_eq!(from_shuffled.values("EMA10"), from_sorted.values("EMA10"));
    assert_eq!(from_shuffled.values("Close").unwrap(), closes.as_slice());
}

#[test]
fn test_rsi_rising_series() {
    let closes: Vec<f64> = (0..40).map(|i| 10.0 + i as f64 * 0.5).collect();
    let result =
        IndicatorEngine::compute(&series_from_closes(&closes), &request(&[IndicatorName::Rsi]))
            .unwrap();
    let rsi = result.values("RSI").unwrap();
    assert!(rsi[13..].iter().all(|&v| v == 100.0));
}

#[test]
fn test_bollinger_flat_scenario() {
    let result = IndicatorEngine::compute(
        &series_from_closes(&[100.0; 25]),
        &request(&[IndicatorName::BollingerBands]),
    )
    .unwrap();

    for i in 19..25 {
        assert_eq!(result.values("BB_STD").unwrap()[i], 0.0);
        assert_eq!(result.values("BB_Upper").unwrap()[i], 100.0);
        assert_eq!(result.values("BB_Lower").unwrap()[i], 100.0);
        assert_eq!(result.values("BB_MA").unwrap()[i], 100.0);
    }
}

#[test]
fn test_bollinger_width_property() {
    let result = IndicatorEngine::compute(
        &series_from_closes(&wavy_closes(50)),
        &request(&[IndicatorName::BollingerBands]),
    )
    .unwrap();
    let upper = result.values("BB_Upper").unwrap();
    let lower = result.values("BB_Lower").unwrap();
    let std = result.values("BB_STD").unwrap();
    for i in 19..50 {
        assert_close(upper[i] - lower[i], 4.0 * std[i]);
    }
}

#[test]
fn test_existing_column_is_replaced() {
    let series = series_from_closes(&wavy_closes(12))
        .with_numeric("SMA10", vec![0.0; 12])
        .unwrap();
    let result = IndicatorEngine::compute(&series, &request(&[IndicatorName::Sma10])).unwrap();

    assert_eq!(result.column_names(), ["Date", "Close", "SMA10"]);
    assert!(result.values("SMA10").unwrap()[0].is_nan());
}

#[test]
fn test_empty_series() {
    let series = PriceSeries::new(Vec::new())
        .with_numeric("Close", Vec::new())
        .unwrap();
    let all: BTreeSet<IndicatorName> = IndicatorName::ALL.into_iter().collect();
    let result = IndicatorEngine::compute(&series, &all).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.added_columns().len(), 20);
}
