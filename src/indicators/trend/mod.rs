//! Trend indicators: SMA, EMA

pub mod ema;
pub mod sma;

pub use ema::*;
pub use sma::*;
