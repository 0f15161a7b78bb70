use thiserror::Error;

use crate::indicators::error::IndicatorError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("The dataset must contain the following columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("no data available for ticker {0}")]
    UnknownTicker(String),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}
