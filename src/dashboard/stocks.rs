//! Per-ticker views: stock selection, technical indicators, volume comparison.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::dashboard::chart::{build_chart, ChartLayout};
use crate::dashboard::error::DashboardError;
use crate::dashboard::industry::has_industry;
use crate::dataset::market::{DateRange, MarketData};
use crate::indicators::engine::IndicatorEngine;
use crate::models::indicators::{IndicatorName, IndicatorResult};
use crate::models::series::{
    Bar, BRAND_NAME, CLOSE, DATE, HIGH, INDUSTRY_TAG, LOW, OPEN, TICKER, VOLUME,
};

pub const TECHNICAL_COLUMNS: [&str; 9] = [
    DATE,
    OPEN,
    HIGH,
    LOW,
    CLOSE,
    VOLUME,
    TICKER,
    BRAND_NAME,
    INDUSTRY_TAG,
];

/// A selectable stock, shown as `Brand (TICKER)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockOption {
    pub display: String,
    pub ticker: String,
    pub brand_name: String,
    pub industry: String,
}

pub fn display_name(brand_name: &str, ticker: &str) -> String {
    format!("{} ({})", brand_name, ticker)
}

/// Ticker inside a `Brand (TICKER)` display string.
pub fn ticker_from_display(display: &str) -> Option<&str> {
    let (_, rest) = display.rsplit_once(" (")?;
    rest.strip_suffix(')')
}

fn require_technical_columns(data: &MarketData) -> Result<(), DashboardError> {
    let missing = data.missing_columns(&TECHNICAL_COLUMNS);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::MissingColumns(missing))
    }
}

/// Unique stock options in order of first appearance.
pub fn stock_options(data: &MarketData) -> Result<Vec<StockOption>, DashboardError> {
    require_technical_columns(data)?;

    let mut seen = HashSet::new();
    Ok(data
        .bars()
        .iter()
        .filter_map(|bar| {
            let display = display_name(&bar.brand_name, &bar.ticker);
            seen.insert(display.clone()).then(|| StockOption {
                display,
                ticker: bar.ticker.clone(),
                brand_name: bar.brand_name.clone(),
                industry: bar.industry_tag.clone(),
            })
        })
        .collect())
}

/// Everything the technical-indicator page needs for one ticker
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalView {
    pub display: String,
    pub ticker: String,
    pub bounds: DateRange,
    pub range: DateRange,
    pub indicators: BTreeSet<IndicatorName>,
    pub chart: ChartLayout,
    pub result: IndicatorResult,
}

/// Bars of `ticker` and the bounds of its full history.
fn ticker_history(data: &MarketData, ticker: &str) -> Result<(Vec<Bar>, DateRange), DashboardError> {
    let bars = data.ticker_bars(ticker, None);
    let bounds = DateRange::spanning(bars.iter().map(|b| b.date))
        .ok_or_else(|| DashboardError::UnknownTicker(ticker.to_string()))?;
    Ok((bars, bounds))
}

/// Compute the requested indicators for one ticker over `range` (its whole
/// history when `None`) and lay out the chart.
pub fn technical_view(
    data: &MarketData,
    ticker: &str,
    range: Option<DateRange>,
    indicators: &BTreeSet<IndicatorName>,
) -> Result<TechnicalView, DashboardError> {
    require_technical_columns(data)?;
    let (bars, bounds) = ticker_history(data, ticker)?;
    let range = range.unwrap_or(bounds);
    let display = display_name(&bars[0].brand_name, ticker);

    let series = data.series_for(ticker, Some(range));
    let result = IndicatorEngine::compute(&series, indicators)?;
    let chart = build_chart(&display, &result, indicators)?;

    debug!(
        ticker,
        rows = result.len(),
        indicators = indicators.len(),
        "Built technical view"
    );

    Ok(TechnicalView {
        display,
        ticker: ticker.to_string(),
        bounds,
        range,
        indicators: indicators.clone(),
        chart,
        result,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumePoint {
    pub date: NaiveDateTime,
    pub volume: f64,
}

/// A stock's volume next to its industry's total volume
#[derive(Debug, Clone, Serialize)]
pub struct VolumeComparison {
    pub display: String,
    pub ticker: String,
    pub industry: String,
    pub range: DateRange,
    pub industry_volume: Vec<VolumePoint>,
    pub stock_volume: Vec<VolumePoint>,
}

/// Compare a ticker's daily volume with the summed volume of its industry.
///
/// The industry is taken from the ticker's first row. NaN volumes count as
/// zero in the industry sums; an untagged ticker has no industry series.
pub fn industry_comparison(
    data: &MarketData,
    ticker: &str,
    range: Option<DateRange>,
) -> Result<VolumeComparison, DashboardError> {
    require_technical_columns(data)?;
    let (bars, bounds) = ticker_history(data, ticker)?;
    let range = range.unwrap_or(bounds);
    let industry = bars[0].industry_tag.clone();

    let mut totals: BTreeMap<NaiveDateTime, f64> = BTreeMap::new();
    let peers = data
        .bars()
        .iter()
        .filter(|b| has_industry(b) && b.industry_tag == industry);
    for bar in peers {
        let total = totals.entry(bar.date).or_insert(0.0);
        if !bar.volume.is_nan() {
            *total += bar.volume;
        }
    }
    let industry_volume = totals
        .into_iter()
        .filter(|(date, _)| range.contains(*date))
        .map(|(date, volume)| VolumePoint { date, volume })
        .collect();

    let mut stock_bars: Vec<&Bar> = bars.iter().filter(|b| range.contains(b.date)).collect();
    stock_bars.sort_by_key(|b| b.date);
    let stock_volume = stock_bars
        .into_iter()
        .map(|b| VolumePoint {
            date: b.date,
            volume: b.volume,
        })
        .collect();

    Ok(VolumeComparison {
        display: display_name(&bars[0].brand_name, ticker),
        ticker: ticker.to_string(),
        industry,
        range,
        industry_volume,
        stock_volume,
    })
}
