use std::collections::BTreeSet;
use std::str::FromStr;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::IndicatorName;

pub fn parse_f64(value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

/// Parse a numeric cell, mapping blanks and garbage to NaN.
pub fn parse_f64_lenient(value: &str) -> f64 {
    parse_f64(value).unwrap_or(f64::NAN)
}

/// Parse one indicator token such as `"SMA(10)"` or `"Bollinger Bands"`.
pub fn parse_indicator(token: &str) -> Result<IndicatorName, IndicatorError> {
    let token = token.trim();
    IndicatorName::ALL
        .iter()
        .copied()
        .find(|indicator| indicator.token() == token)
        .ok_or_else(|| IndicatorError::UnknownIndicator(token.to_string()))
}

/// Parse a comma-separated indicator list. Blank entries are skipped and
/// repeated tokens collapse.
pub fn parse_indicator_list(list: &str) -> Result<BTreeSet<IndicatorName>, IndicatorError> {
    list.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(parse_indicator)
        .collect()
}

impl FromStr for IndicatorName {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_indicator(s)
    }
}
