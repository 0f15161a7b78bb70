use std::collections::BTreeSet;

use dotenvy::dotenv;
use stockdash::config;
use stockdash::dashboard::{stock_options, technical_view, TechnicalView};
use stockdash::dataset::{Frame, MarketData};
use stockdash::indicators::parse_indicator_list;
use stockdash::logging;
use stockdash::models::IndicatorName;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let path = config::get_dataset_path();
    let frame = Frame::from_path(&path)?;
    let data = MarketData::from_frame(&frame)?;
    info!(
        path = %path.display(),
        rows = frame.len(),
        dropped_rows = data.dropped_rows(),
        "Dataset loaded"
    );

    let ticker = match config::get_report_ticker() {
        Some(ticker) => ticker,
        None => stock_options(&data)?
            .into_iter()
            .next()
            .map(|option| option.ticker)
            .ok_or("dataset has no stocks")?,
    };
    let indicators: BTreeSet<IndicatorName> = parse_indicator_list(&config::get_report_indicators())?;

    let view = technical_view(&data, &ticker, None, &indicators)?;
    print_view(&view);

    Ok(())
}

fn print_view(view: &TechnicalView) {
    println!("{}", view.chart.title);
    println!("  Range: {} to {}", view.range.start.date(), view.range.end.date());
    println!("  Rows: {}", view.result.len());
    println!("  Panels: {}", view.chart.subplot_titles().join(", "));

    let Some(last) = view.result.len().checked_sub(1) else {
        println!("  No rows in range");
        return;
    };
    println!("  Latest ({}):", view.result.dates()[last].date());
    for name in view.result.added_columns() {
        if let Some(values) = view.result.values(name) {
            println!("    {:<12} {:>12.4}", name, values[last]);
        }
    }
}
