//! Columnar, date-indexed price table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;

pub const DATE: &str = "Date";
pub const OPEN: &str = "Open";
pub const HIGH: &str = "High";
pub const LOW: &str = "Low";
pub const CLOSE: &str = "Close";
pub const VOLUME: &str = "Volume";
pub const TICKER: &str = "Ticker";
pub const BRAND_NAME: &str = "Brand_Name";
pub const INDUSTRY_TAG: &str = "Industry_Tag";

/// One OHLCV row for a single instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub industry_tag: String,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64, date: NaiveDateTime) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            ticker: String::new(),
            brand_name: String::new(),
            industry_tag: String::new(),
        }
    }

    pub fn with_ticker(mut self, ticker: &str, brand_name: &str, industry_tag: &str) -> Self {
        self.ticker = ticker.to_string();
        self.brand_name = brand_name.to_string();
        self.industry_tag = industry_tag.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn reordered(&self, order: &[usize]) -> Self {
        match self {
            ColumnData::Numeric(values) => {
                ColumnData::Numeric(order.iter().map(|&i| values[i]).collect())
            }
            ColumnData::Text(values) => {
                ColumnData::Text(order.iter().map(|&i| values[i].clone()).collect())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Price series for one instrument.
///
/// The `Date` index is held separately from the value columns; column order
/// is insertion order and is preserved through every transformation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    dates: Vec<NaiveDateTime>,
    columns: Vec<Column>,
}

impl PriceSeries {
    pub fn new(dates: Vec<NaiveDateTime>) -> Self {
        Self {
            dates,
            columns: Vec::new(),
        }
    }

    /// Build the standard OHLCV + metadata column set from bars.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut series = Self::new(bars.iter().map(|b| b.date).collect());
        let numeric: [(&str, fn(&Bar) -> f64); 5] = [
            (OPEN, |b| b.open),
            (HIGH, |b| b.high),
            (LOW, |b| b.low),
            (CLOSE, |b| b.close),
            (VOLUME, |b| b.volume),
        ];
        for (name, field) in numeric {
            series.push_column(name, ColumnData::Numeric(bars.iter().map(field).collect()));
        }

        let text: [(&str, fn(&Bar) -> &str); 3] = [
            (TICKER, |b| b.ticker.as_str()),
            (BRAND_NAME, |b| b.brand_name.as_str()),
            (INDUSTRY_TAG, |b| b.industry_tag.as_str()),
        ];
        for (name, field) in text {
            series.push_column(
                name,
                ColumnData::Text(bars.iter().map(|b| field(b).to_string()).collect()),
            );
        }
        series
    }

    pub fn with_numeric(mut self, name: &str, values: Vec<f64>) -> Result<Self, IndicatorError> {
        self.insert(name, ColumnData::Numeric(values))?;
        Ok(self)
    }

    pub fn with_text(mut self, name: &str, values: Vec<String>) -> Result<Self, IndicatorError> {
        self.insert(name, ColumnData::Text(values))?;
        Ok(self)
    }

    /// Add a column, replacing an existing one of the same name in place.
    pub fn insert(&mut self, name: &str, data: ColumnData) -> Result<(), IndicatorError> {
        if data.len() != self.dates.len() {
            return Err(IndicatorError::LengthMismatch {
                name: name.to_string(),
                expected: self.dates.len(),
                actual: data.len(),
            });
        }
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.data = data,
            None => self.push_column(name, data),
        }
        Ok(())
    }

    fn push_column(&mut self, name: &str, data: ColumnData) {
        self.columns.push(Column {
            name: name.to_string(),
            data,
        });
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDateTime] {
        &self.dates
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        name == DATE || self.column(name).is_some()
    }

    /// Numeric column by name; absent or text columns are reported missing.
    pub fn numeric(&self, name: &str) -> Result<&[f64], IndicatorError> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Numeric(values)) => Ok(values),
            _ => Err(IndicatorError::MissingColumn(name.to_string())),
        }
    }

    pub fn text(&self, name: &str) -> Result<&[String], IndicatorError> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Text(values)) => Ok(values),
            _ => Err(IndicatorError::MissingColumn(name.to_string())),
        }
    }

    /// Column names with the `Date` index first.
    pub fn column_names(&self) -> Vec<&str> {
        std::iter::once(DATE)
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    pub fn is_sorted(&self) -> bool {
        self.dates.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Copy of the series ordered ascending by date. Ties keep input order.
    pub fn sorted_by_date(&self) -> Self {
        if self.is_sorted() {
            return self.clone();
        }

        let mut order: Vec<usize> = (0..self.dates.len()).collect();
        order.sort_by_key(|&i| self.dates[i]);

        Self {
            dates: order.iter().map(|&i| self.dates[i]).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    data: c.data.reordered(&order),
                })
                .collect(),
        }
    }

    /// Read the rows back as bars. Metadata columns default to empty strings.
    pub fn bars(&self) -> Result<Vec<Bar>, IndicatorError> {
        let open = self.numeric(OPEN)?;
        let high = self.numeric(HIGH)?;
        let low = self.numeric(LOW)?;
        let close = self.numeric(CLOSE)?;
        let volume = self.numeric(VOLUME)?;
        let ticker = self.text(TICKER).ok();
        let brand = self.text(BRAND_NAME).ok();
        let industry = self.text(INDUSTRY_TAG).ok();

        let text_at = |column: Option<&[String]>, i: usize| {
            column.map(|values| values[i].clone()).unwrap_or_default()
        };

        Ok((0..self.len())
            .map(|i| Bar {
                date: self.dates[i],
                open: open[i],
                high: high[i],
                low: low[i],
                close: close[i],
                volume: volume[i],
                ticker: text_at(ticker, i),
                brand_name: text_at(brand, i),
                industry_tag: text_at(industry, i),
            })
            .collect())
    }
}
