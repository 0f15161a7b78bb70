//! Indicator registry and trait system

use serde::Serialize;

use crate::models::indicators::IndicatorName;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    Volatility,
}

/// Where an indicator is drawn relative to the price candles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartPlacement {
    /// Drawn over the candlestick panel
    Overlay,
    /// Gets its own panel below the candles
    Panel,
}

/// Trait for all indicators
pub trait Indicator {
    /// Get the category this indicator belongs to
    fn category(&self) -> IndicatorCategory;

    /// Get the name of the indicator
    fn name(&self) -> &'static str;

    /// Columns attached to the result when this indicator is requested
    fn columns(&self) -> &'static [&'static str];

    fn placement(&self) -> ChartPlacement;
}

impl Indicator for IndicatorName {
    fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorName::Sma10
            | IndicatorName::Sma50
            | IndicatorName::Ema10
            | IndicatorName::Ema50 => IndicatorCategory::Trend,
            IndicatorName::Macd | IndicatorName::Rsi => IndicatorCategory::Momentum,
            IndicatorName::BollingerBands => IndicatorCategory::Volatility,
        }
    }

    fn name(&self) -> &'static str {
        self.token()
    }

    fn columns(&self) -> &'static [&'static str] {
        match self {
            IndicatorName::Sma10 => &["SMA10"],
            IndicatorName::Sma50 => &["SMA50"],
            IndicatorName::Ema10 => &["EMA10"],
            IndicatorName::Ema50 => &["EMA50"],
            IndicatorName::Macd => &["EMA12", "EMA26", "MACD", "MACD_Signal", "MACD_Hist"],
            IndicatorName::Rsi => &["diff", "gain", "loss", "avg_gain", "avg_loss", "rs", "RSI"],
            IndicatorName::BollingerBands => &["BB_MA", "BB_STD", "BB_Upper", "BB_Lower"],
        }
    }

    fn placement(&self) -> ChartPlacement {
        match self {
            IndicatorName::Macd | IndicatorName::Rsi => ChartPlacement::Panel,
            _ => ChartPlacement::Overlay,
        }
    }
}

/// Descriptor of one selectable indicator
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorInfo {
    pub name: &'static str,
    pub category: IndicatorCategory,
    pub placement: ChartPlacement,
    pub columns: &'static [&'static str],
}

impl From<IndicatorName> for IndicatorInfo {
    fn from(indicator: IndicatorName) -> Self {
        Self {
            name: indicator.name(),
            category: indicator.category(),
            placement: indicator.placement(),
            columns: indicator.columns(),
        }
    }
}

/// Indicator registry listing the selectable indicators in display order
pub struct IndicatorRegistry {
    options: Vec<IndicatorName>,
}

impl IndicatorRegistry {
    /// Create a registry with every supported indicator
    pub fn new() -> Self {
        Self {
            options: IndicatorName::ALL.to_vec(),
        }
    }

    pub fn options(&self) -> &[IndicatorName] {
        &self.options
    }

    pub fn describe(&self) -> Vec<IndicatorInfo> {
        self.options.iter().copied().map(IndicatorInfo::from).collect()
    }

    /// Indicators of one category, in display order
    pub fn by_category(&self, category: IndicatorCategory) -> Vec<IndicatorName> {
        self.options
            .iter()
            .copied()
            .filter(|indicator| indicator.category() == category)
            .collect()
    }

    /// Get all categories
    pub fn all_categories() -> Vec<IndicatorCategory> {
        vec![
            IndicatorCategory::Trend,
            IndicatorCategory::Momentum,
            IndicatorCategory::Volatility,
        ]
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
