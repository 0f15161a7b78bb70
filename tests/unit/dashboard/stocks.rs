//! Unit tests for per-ticker views

use std::collections::BTreeSet;

use crate::support::{bars_from_closes, day, wavy_closes};
use stockdash::dashboard::{
    display_name, industry_comparison, stock_options, technical_view, ticker_from_display,
    DashboardError,
};
use stockdash::dataset::{DateRange, MarketData};
use stockdash::models::IndicatorName;

const TECHNICAL_HEADER: [&str; 9] = [
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "Ticker",
    "Brand_Name",
    "Industry_Tag",
];

fn market() -> MarketData {
    let mut bars = bars_from_closes(&wavy_closes(30), "AAA", "Acme", "Tech");
    bars.extend(bars_from_closes(&wavy_closes(30), "BBB", "Bolt", "Tech"));
    bars.extend(bars_from_closes(&wavy_closes(10), "CCC", "Coal Co", "Energy"));
    MarketData::from_bars(TECHNICAL_HEADER.iter().map(|s| s.to_string()).collect(), bars)
}

#[test]
fn test_display_roundtrip() {
    let display = display_name("Acme", "AAA");
    assert_eq!(display, "Acme (AAA)");
    assert_eq!(ticker_from_display(&display), Some("AAA"));
    assert_eq!(ticker_from_display("Foo (Bar) (X)"), Some("X"));
    assert_eq!(ticker_from_display("No ticker"), None);
}

#[test]
fn test_stock_options_unique_in_first_appearance_order() {
    let options = stock_options(&market()).unwrap();
    let displays: Vec<&str> = options.iter().map(|o| o.display.as_str()).collect();
    assert_eq!(displays, ["Acme (AAA)", "Bolt (BBB)", "Coal Co (CCC)"]);
    assert_eq!(options[2].industry, "Energy");
}

#[test]
fn test_technical_columns_required() {
    let data = MarketData::from_bars(vec!["Date".to_string(), "Close".to_string()], Vec::new());
    let err = stock_options(&data).unwrap_err();
    assert!(matches!(err, DashboardError::MissingColumns(ref cols) if cols.len() == 7));
}

#[test]
fn test_technical_view_defaults_to_full_history() {
    let indicators: BTreeSet<IndicatorName> =
        [IndicatorName::Sma10, IndicatorName::Rsi].into_iter().collect();
    let view = technical_view(&market(), "AAA", None, &indicators).unwrap();

    assert_eq!(view.display, "Acme (AAA)");
    assert_eq!(view.range, DateRange::new(day(0), day(29)));
    assert_eq!(view.range, view.bounds);
    assert_eq!(view.result.len(), 30);
    assert!(view.result.has_column("SMA10"));
    assert!(view.result.has_column("RSI"));
    assert_eq!(view.chart.rows(), 2);
}

#[test]
fn test_technical_view_honours_range() {
    let range = DateRange::new(day(5), day(14));
    let view = technical_view(&market(), "BBB", Some(range), &BTreeSet::new()).unwrap();
    assert_eq!(view.result.len(), 10);
    assert_eq!(view.result.dates()[0], day(5));
    assert_eq!(view.bounds, DateRange::new(day(0), day(29)));
}

#[test]
fn test_unknown_ticker() {
    let err = technical_view(&market(), "ZZZ", None, &BTreeSet::new()).unwrap_err();
    assert!(matches!(err, DashboardError::UnknownTicker(ref t) if t == "ZZZ"));
}

#[test]
fn test_industry_comparison() {
    let range = DateRange::new(day(0), day(4));
    let comparison = industry_comparison(&market(), "AAA", Some(range)).unwrap();

    assert_eq!(comparison.industry, "Tech");
    assert_eq!(comparison.display, "Acme (AAA)");
    assert_eq!(comparison.industry_volume.len(), 5);
    assert_eq!(comparison.stock_volume.len(), 5);
    // AAA and BBB both trade 1000 + day on each date.
    assert_eq!(comparison.industry_volume[2].volume, 2.0 * 1002.0);
    assert_eq!(comparison.stock_volume[2].volume, 1002.0);
}

#[test]
fn test_untagged_ticker_has_no_industry_series() {
    let mut bars = bars_from_closes(&wavy_closes(5), "AAA", "Acme", "Tech");
    bars.extend(bars_from_closes(&wavy_closes(5), "XXX", "Unknown", ""));
    bars.extend(bars_from_closes(&wavy_closes(5), "YYY", "Other", ""));
    let data =
        MarketData::from_bars(TECHNICAL_HEADER.iter().map(|s| s.to_string()).collect(), bars);

    let comparison = industry_comparison(&data, "XXX", None).unwrap();
    assert_eq!(comparison.industry, "");
    assert!(comparison.industry_volume.is_empty());
    assert_eq!(comparison.stock_volume.len(), 5);
}
