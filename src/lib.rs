//! Stock dataset dashboard backend: technical-indicator engine plus the
//! dataset, industry and chart views served over HTTP.

pub mod common;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod dataset;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
