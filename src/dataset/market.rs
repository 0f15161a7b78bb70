//! Typed view of a frame: one bar per row with a parsed date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dataset::error::DatasetError;
use crate::dataset::frame::Frame;
use crate::indicators::parser::parse_f64_lenient;
use crate::models::series::{
    Bar, PriceSeries, BRAND_NAME, CLOSE, DATE, HIGH, INDUSTRY_TAG, LOW, OPEN, TICKER, VOLUME,
};

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }

    /// Smallest range covering every date, or `None` when there are none.
    pub fn spanning<I: IntoIterator<Item = NaiveDateTime>>(dates: I) -> Option<Self> {
        dates.into_iter().fold(None, |range, date| match range {
            None => Some(Self::new(date, date)),
            Some(r) => Some(Self::new(r.start.min(date), r.end.max(date))),
        })
    }
}

/// Parse a timestamp cell.
///
/// Accepts plain dates, naive date-times and offset date-times; offsets keep
/// the wall-clock time. Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Rows of a frame with parsed dates and numeric prices.
///
/// Rows whose date does not parse are dropped. Unparseable numeric cells and
/// absent numeric columns read as NaN; absent text columns read as empty.
#[derive(Debug, Clone)]
pub struct MarketData {
    columns: Vec<String>,
    bars: Vec<Bar>,
    dropped_rows: usize,
}

impl MarketData {
    pub fn from_frame(frame: &Frame) -> Result<Self, DatasetError> {
        let date_idx = frame
            .column_index(DATE)
            .ok_or_else(|| DatasetError::MissingColumn(DATE.to_string()))?;

        let index = |name: &str| frame.column_index(name);
        let [open, high, low, close, volume] = [OPEN, HIGH, LOW, CLOSE, VOLUME].map(index);
        let [ticker, brand, industry] = [TICKER, BRAND_NAME, INDUSTRY_TAG].map(index);

        let number = |row: &[String], idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|cell| parse_f64_lenient(cell))
                .unwrap_or(f64::NAN)
        };
        let text = |row: &[String], idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default()
        };

        let mut bars = Vec::with_capacity(frame.len());
        let mut dropped_rows = 0;
        for row in frame.rows() {
            let row = row.as_slice();
            let Some(date) = row.get(date_idx).and_then(|cell| parse_timestamp(cell)) else {
                dropped_rows += 1;
                continue;
            };
            bars.push(Bar {
                date,
                open: number(row, open),
                high: number(row, high),
                low: number(row, low),
                close: number(row, close),
                volume: number(row, volume),
                ticker: text(row, ticker),
                brand_name: text(row, brand),
                industry_tag: text(row, industry),
            });
        }

        if dropped_rows > 0 {
            warn!(dropped_rows, "Dropped rows with invalid or missing dates");
        }

        Ok(Self {
            columns: frame.headers().to_vec(),
            bars,
            dropped_rows,
        })
    }

    pub fn from_bars(columns: Vec<String>, bars: Vec<Bar>) -> Self {
        Self {
            columns,
            bars,
            dropped_rows: 0,
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Required column names absent from the source header.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.columns.iter().any(|c| c == *name))
            .map(|name| name.to_string())
            .collect()
    }

    pub fn date_bounds(&self) -> Option<DateRange> {
        DateRange::spanning(self.bars.iter().map(|b| b.date))
    }

    /// Bars of one ticker, optionally restricted to `range`, in input order.
    pub fn ticker_bars(&self, ticker: &str, range: Option<DateRange>) -> Vec<Bar> {
        self.bars
            .iter()
            .filter(|b| b.ticker == ticker)
            .filter(|b| range.map_or(true, |r| r.contains(b.date)))
            .cloned()
            .collect()
    }

    /// Price series for one ticker, sorted ascending by date.
    pub fn series_for(&self, ticker: &str, range: Option<DateRange>) -> PriceSeries {
        let mut bars = self.ticker_bars(ticker, range);
        bars.sort_by_key(|b| b.date);
        PriceSeries::from_bars(&bars)
    }
}
