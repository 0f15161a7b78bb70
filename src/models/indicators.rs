use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::series::{ColumnData, PriceSeries};

/// Indicators the engine knows how to compute.
///
/// Declaration order is the order in which families are evaluated and their
/// columns attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorName {
    #[serde(rename = "SMA(10)")]
    Sma10,
    #[serde(rename = "SMA(50)")]
    Sma50,
    #[serde(rename = "EMA(10)")]
    Ema10,
    #[serde(rename = "EMA(50)")]
    Ema50,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "Bollinger Bands")]
    BollingerBands,
}

impl IndicatorName {
    pub const ALL: [IndicatorName; 7] = [
        IndicatorName::Sma10,
        IndicatorName::Sma50,
        IndicatorName::Ema10,
        IndicatorName::Ema50,
        IndicatorName::Macd,
        IndicatorName::Rsi,
        IndicatorName::BollingerBands,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            IndicatorName::Sma10 => "SMA(10)",
            IndicatorName::Sma50 => "SMA(50)",
            IndicatorName::Ema10 => "EMA(10)",
            IndicatorName::Ema50 => "EMA(50)",
            IndicatorName::Macd => "MACD",
            IndicatorName::Rsi => "RSI",
            IndicatorName::BollingerBands => "Bollinger Bands",
        }
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// MACD line, signal and histogram plus the two EMAs they derive from.
#[derive(Debug, Clone, Serialize)]
pub struct MacdSeries {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
    pub period: (u32, u32, u32),
}

/// RSI with every intermediate column.
#[derive(Debug, Clone, Serialize)]
pub struct RsiSeries {
    pub diff: Vec<f64>,
    pub gain: Vec<f64>,
    pub loss: Vec<f64>,
    pub avg_gain: Vec<f64>,
    pub avg_loss: Vec<f64>,
    pub rs: Vec<f64>,
    pub rsi: Vec<f64>,
    pub period: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BollingerSeries {
    pub middle: Vec<f64>,
    pub std: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
    pub period: u32,
    pub std_dev: f64,
}

/// Input series, sorted by date, augmented with derived columns.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorResult {
    series: PriceSeries,
    added: Vec<String>,
}

impl IndicatorResult {
    pub(crate) fn new(series: PriceSeries, added: Vec<String>) -> Self {
        Self { series, added }
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn into_series(self) -> PriceSeries {
        self.series
    }

    pub fn dates(&self) -> &[NaiveDateTime] {
        self.series.dates()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Names of the columns this call attached, in attachment order.
    pub fn added_columns(&self) -> &[String] {
        &self.added
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.series.column_names()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.series.has_column(name)
    }

    /// Numeric column values, if present.
    pub fn values(&self, name: &str) -> Option<&[f64]> {
        match self.series.column(name).map(|c| &c.data) {
            Some(ColumnData::Numeric(values)) => Some(values),
            _ => None,
        }
    }
}
