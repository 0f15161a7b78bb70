//! Presentation-side views over a loaded dataset.
//!
//! Each view returns plain serialisable data for a charting client.

pub mod chart;
pub mod error;
pub mod industry;
pub mod stocks;

pub use chart::{build_chart, chart_height, ChartLayout, Panel, ThresholdLine, Trace};
pub use error::DashboardError;
pub use industry::{IndustryAnalysis, IndustryVolume, INDUSTRY_COLUMNS};
pub use stocks::{
    display_name, industry_comparison, stock_options, technical_view, ticker_from_display,
    StockOption, TechnicalView, VolumeComparison, VolumePoint, TECHNICAL_COLUMNS,
};
