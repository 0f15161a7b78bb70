//! Technical-indicator engine: augments a price series with derived columns.

use std::collections::BTreeSet;

use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd_default, calculate_rsi_default};
use crate::indicators::registry::Indicator;
use crate::indicators::trend::{calculate_ema, calculate_sma};
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::indicators::{IndicatorName, IndicatorResult};
use crate::models::series::{ColumnData, PriceSeries, CLOSE};

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute the requested indicators over a copy of `series`.
    ///
    /// The copy is sorted ascending by date first. Only requested families
    /// are evaluated, and each one reads the close column alone, so the
    /// result does not depend on which other indicators were requested.
    pub fn compute(
        series: &PriceSeries,
        requested: &BTreeSet<IndicatorName>,
    ) -> Result<IndicatorResult, IndicatorError> {
        let mut data = series.sorted_by_date();
        let closes = data.numeric(CLOSE)?.to_vec();
        let mut added = Vec::new();

        for &indicator in requested {
            let columns = indicator.columns();
            let values = Self::family_values(indicator, &closes);
            debug_assert_eq!(columns.len(), values.len());

            for (&name, column) in columns.iter().zip(values) {
                data.insert(name, ColumnData::Numeric(column))?;
                added.push(name.to_string());
            }
            debug!(indicator = %indicator, rows = closes.len(), "Computed indicator");
        }

        Ok(IndicatorResult::new(data, added))
    }

    /// Output columns of one family, in the order `Indicator::columns` names them.
    fn family_values(indicator: IndicatorName, closes: &[f64]) -> Vec<Vec<f64>> {
        match indicator {
            IndicatorName::Sma10 => vec![calculate_sma(closes, 10)],
            IndicatorName::Sma50 => vec![calculate_sma(closes, 50)],
            IndicatorName::Ema10 => vec![calculate_ema(closes, 10)],
            IndicatorName::Ema50 => vec![calculate_ema(closes, 50)],
            IndicatorName::Macd => {
                let macd = calculate_macd_default(closes);
                vec![
                    macd.ema_fast,
                    macd.ema_slow,
                    macd.macd,
                    macd.signal,
                    macd.histogram,
                ]
            }
            IndicatorName::Rsi => {
                let rsi = calculate_rsi_default(closes);
                vec![
                    rsi.diff,
                    rsi.gain,
                    rsi.loss,
                    rsi.avg_gain,
                    rsi.avg_loss,
                    rsi.rs,
                    rsi.rsi,
                ]
            }
            IndicatorName::BollingerBands => {
                let bands = calculate_bollinger_bands_default(closes);
                vec![bands.middle, bands.std, bands.upper, bands.lower]
            }
        }
    }
}
