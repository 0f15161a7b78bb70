//! Chart panel planning for the technical-indicator view.
//!
//! Produces a plotting-library-neutral layout: stacked panels sharing the
//! date axis, each holding traces. NaN values serialise as `null`.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::indicators::error::IndicatorError;
use crate::models::indicators::{IndicatorName, IndicatorResult};
use crate::models::series::{CLOSE, HIGH, LOW, OPEN};

pub const PRICE_PANEL_TITLE: &str = "Candlestick with Overlays";
pub const CHART_WIDTH: u32 = 900;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

const MOVING_AVERAGE_OVERLAYS: [&str; 4] = ["SMA10", "SMA50", "EMA10", "EMA50"];

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Candlestick {
        name: String,
        x: Vec<NaiveDateTime>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        increasing_color: &'static str,
        decreasing_color: &'static str,
    },
    Line {
        name: String,
        x: Vec<NaiveDateTime>,
        y: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<&'static str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
    },
    Bar {
        name: String,
        x: Vec<NaiveDateTime>,
        y: Vec<f64>,
        color: &'static str,
    },
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Candlestick { name, .. } | Trace::Line { name, .. } | Trace::Bar { name, .. } => {
                name
            }
        }
    }
}

/// Horizontal reference line drawn across a panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdLine {
    pub y: f64,
    pub color: &'static str,
    pub dash: &'static str,
    pub width: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub row: usize,
    pub title: String,
    pub traces: Vec<Trace>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub thresholds: Vec<ThresholdLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_axis_title: &'static str,
    pub template: &'static str,
    pub width: u32,
    pub height: u32,
    pub shared_x_axis: bool,
    pub panels: Vec<Panel>,
}

impl ChartLayout {
    pub fn rows(&self) -> usize {
        self.panels.len()
    }

    pub fn subplot_titles(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.title.as_str()).collect()
    }

    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }
}

/// Height for a chart of `rows` stacked panels.
pub fn chart_height(rows: usize) -> u32 {
    if rows == 1 {
        500
    } else {
        300 * rows as u32
    }
}

/// Lay out the candlestick panel plus one panel each for MACD and RSI when
/// requested. Overlays are drawn for whichever moving-average columns the
/// result carries.
pub fn build_chart(
    display: &str,
    result: &IndicatorResult,
    requested: &BTreeSet<IndicatorName>,
) -> Result<ChartLayout, IndicatorError> {
    let series = result.series();
    let x = result.dates().to_vec();
    let column = |name: &str| -> Result<Vec<f64>, IndicatorError> {
        result
            .values(name)
            .map(<[f64]>::to_vec)
            .ok_or_else(|| IndicatorError::MissingColumn(name.to_string()))
    };

    let mut price_traces = vec![Trace::Candlestick {
        name: "Candlestick".to_string(),
        x: x.clone(),
        open: series.numeric(OPEN)?.to_vec(),
        high: series.numeric(HIGH)?.to_vec(),
        low: series.numeric(LOW)?.to_vec(),
        close: series.numeric(CLOSE)?.to_vec(),
        increasing_color: "green",
        decreasing_color: "red",
    }];

    for name in MOVING_AVERAGE_OVERLAYS {
        if let Some(values) = result.values(name) {
            price_traces.push(line(name, &x, values.to_vec(), None, None));
        }
    }

    if requested.contains(&IndicatorName::BollingerBands) {
        price_traces.push(line("BB Upper", &x, column("BB_Upper")?, Some("gray"), Some(1.0)));
        price_traces.push(line("BB Lower", &x, column("BB_Lower")?, Some("gray"), Some(1.0)));
    }

    let mut panels = vec![Panel {
        row: 1,
        title: PRICE_PANEL_TITLE.to_string(),
        traces: price_traces,
        thresholds: Vec::new(),
    }];

    if requested.contains(&IndicatorName::Macd) {
        panels.push(Panel {
            row: panels.len() + 1,
            title: "MACD".to_string(),
            traces: vec![
                line("MACD", &x, column("MACD")?, Some("blue"), None),
                line("MACD Signal", &x, column("MACD_Signal")?, Some("red"), None),
                Trace::Bar {
                    name: "MACD Hist".to_string(),
                    x: x.clone(),
                    y: column("MACD_Hist")?,
                    color: "gray",
                },
            ],
            thresholds: Vec::new(),
        });
    }

    if requested.contains(&IndicatorName::Rsi) {
        panels.push(Panel {
            row: panels.len() + 1,
            title: "RSI".to_string(),
            traces: vec![line("RSI", &x, column("RSI")?, Some("orange"), None)],
            thresholds: vec![threshold(RSI_OVERBOUGHT, "red"), threshold(RSI_OVERSOLD, "green")],
        });
    }

    Ok(ChartLayout {
        title: format!("Technical Indicators: {}", display),
        x_axis_title: "Date",
        template: "plotly_white",
        width: CHART_WIDTH,
        height: chart_height(panels.len()),
        shared_x_axis: true,
        panels,
    })
}

fn line(
    name: &str,
    x: &[NaiveDateTime],
    y: Vec<f64>,
    color: Option<&'static str>,
    width: Option<f64>,
) -> Trace {
    Trace::Line {
        name: name.to_string(),
        x: x.to_vec(),
        y,
        color,
        width,
    }
}

fn threshold(y: f64, color: &'static str) -> ThresholdLine {
    ThresholdLine {
        y,
        color,
        dash: "dash",
        width: 1.0,
        opacity: 0.2,
    }
}
