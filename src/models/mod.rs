//! Shared data models spanning the engine and presentation layers.

pub mod indicators;
pub mod series;

pub use indicators::{BollingerSeries, IndicatorName, IndicatorResult, MacdSeries, RsiSeries};
pub use series::{Bar, Column, ColumnData, PriceSeries};
