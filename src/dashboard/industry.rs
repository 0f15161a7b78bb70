//! Industry-level volume aggregation.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::dashboard::error::DashboardError;
use crate::dataset::market::{DateRange, MarketData};
use crate::models::series::{Bar, DATE, INDUSTRY_TAG, VOLUME};

pub const INDUSTRY_COLUMNS: [&str; 3] = [INDUSTRY_TAG, VOLUME, DATE];

pub(crate) fn has_industry(bar: &Bar) -> bool {
    !bar.industry_tag.trim().is_empty()
}

/// Total volume of one industry on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryVolume {
    pub date: NaiveDateTime,
    pub industry: String,
    pub volume: f64,
}

/// Volume summed per (date, industry), ordered by date then industry.
#[derive(Debug, Clone)]
pub struct IndustryAnalysis {
    points: Vec<IndustryVolume>,
}

impl IndustryAnalysis {
    /// NaN volumes count as zero in the sums. Rows without an industry tag
    /// are left out.
    pub fn new(data: &MarketData) -> Result<Self, DashboardError> {
        let missing = data.missing_columns(&INDUSTRY_COLUMNS);
        if !missing.is_empty() {
            return Err(DashboardError::MissingColumns(missing));
        }

        let mut totals: BTreeMap<(NaiveDateTime, &str), f64> = BTreeMap::new();
        for bar in data.bars().iter().filter(|b| has_industry(b)) {
            let total = totals.entry((bar.date, bar.industry_tag.as_str())).or_insert(0.0);
            if !bar.volume.is_nan() {
                *total += bar.volume;
            }
        }

        let points = totals
            .into_iter()
            .map(|((date, industry), volume)| IndustryVolume {
                date,
                industry: industry.to_string(),
                volume,
            })
            .collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[IndustryVolume] {
        &self.points
    }

    pub fn available_dates(&self) -> Vec<NaiveDateTime> {
        let dates: BTreeSet<NaiveDateTime> = self.points.iter().map(|p| p.date).collect();
        dates.into_iter().collect()
    }

    pub fn available_industries(&self) -> Vec<String> {
        let industries: BTreeSet<&str> = self.points.iter().map(|p| p.industry.as_str()).collect();
        industries.into_iter().map(str::to_string).collect()
    }

    pub fn date_bounds(&self) -> Option<DateRange> {
        DateRange::spanning(self.points.iter().map(|p| p.date))
    }

    pub fn industry_bounds(&self, industry: &str) -> Option<DateRange> {
        DateRange::spanning(
            self.points
                .iter()
                .filter(|p| p.industry == industry)
                .map(|p| p.date),
        )
    }

    /// Industries on `date`, largest total volume first.
    pub fn volume_on(&self, date: NaiveDateTime) -> Vec<IndustryVolume> {
        let mut day: Vec<IndustryVolume> = self
            .points
            .iter()
            .filter(|p| p.date == date)
            .cloned()
            .collect();
        day.sort_by(|a, b| {
            b.volume
                .total_cmp(&a.volume)
                .then_with(|| a.industry.cmp(&b.industry))
        });
        day
    }

    /// One industry's daily totals inside `range` (all dates when `None`).
    pub fn industry_trend(&self, industry: &str, range: Option<DateRange>) -> Vec<IndustryVolume> {
        self.points
            .iter()
            .filter(|p| p.industry == industry)
            .filter(|p| range.map_or(true, |r| r.contains(p.date)))
            .cloned()
            .collect()
    }

    pub fn all_trends(&self, range: Option<DateRange>) -> Vec<IndustryVolume> {
        self.points
            .iter()
            .filter(|p| range.map_or(true, |r| r.contains(p.date)))
            .cloned()
            .collect()
    }
}
