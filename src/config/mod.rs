//! Environment-driven settings.
//!
//! Binaries load `.env` with dotenvy before reading these.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "dataset-miniproject.csv";
pub const DEFAULT_PORT: u16 = 8080;

/// Deployment environment, lower-cased. Defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

/// CSV dataset served by the dashboard.
pub fn get_dataset_path() -> PathBuf {
    env::var("DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH))
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Ticker for the console report; `None` picks the first in the dataset.
pub fn get_report_ticker() -> Option<String> {
    env::var("TICKER").ok().filter(|t| !t.trim().is_empty())
}

/// Comma-separated indicator tokens for the console report.
pub fn get_report_indicators() -> String {
    env::var("INDICATORS")
        .unwrap_or_else(|_| "SMA(10),SMA(50),EMA(10),EMA(50),MACD,RSI,Bollinger Bands".to_string())
}
