use crate::error::Result;
use crate::models::{AggregatedReading, DailyAverage, MeanAccumulator};
use crate::utils::timestamps::{end_of, parse_range_bound};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Inclusive timestamp window. Date filtering only applies when both bounds
/// are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        Self { start, end }
    }

    /// Whole-day window from the start of `start` to the end of `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start.and_time(NaiveTime::MIN)), Some(end_of(end)))
    }

    /// Parse optional picker values, each either a date or a date-time.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = start.map(|s| parse_range_bound(s, false)).transpose()?;
        let end = end.map(|s| parse_range_bound(s, true)).transpose()?;
        Ok(Self::new(start, end))
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= timestamp && timestamp <= end,
            _ => true,
        }
    }
}

/// User selection driving one recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Empty means every location.
    pub locations: Vec<String>,
    pub date_range: DateRange,
}

impl FilterSelection {
    pub fn new(locations: Vec<String>, date_range: DateRange) -> Self {
        Self {
            locations,
            date_range,
        }
    }

    fn matches(&self, reading: &AggregatedReading) -> bool {
        let location_ok =
            self.locations.is_empty() || self.locations.iter().any(|l| *l == reading.location);
        location_ok && self.date_range.contains(reading.timestamp)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOutput {
    pub filtered: Vec<AggregatedReading>,
    pub daily_averages: Vec<DailyAverage>,
}

pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// Filter the base dataset and derive daily averages. The dataset is
    /// only read; every output is freshly allocated.
    pub fn apply(
        &self,
        dataset: &[AggregatedReading],
        selection: &FilterSelection,
    ) -> FilterOutput {
        let filtered: Vec<AggregatedReading> = dataset
            .iter()
            .filter(|r| selection.matches(r))
            .cloned()
            .collect();

        let daily_averages = self.daily_averages(&filtered);

        debug!(
            "Filter kept {} of {} rows ({} daily averages)",
            filtered.len(),
            dataset.len(),
            daily_averages.len()
        );

        FilterOutput {
            filtered,
            daily_averages,
        }
    }

    /// Mean index per (location, date), ordered by location then date.
    pub fn daily_averages(&self, readings: &[AggregatedReading]) -> Vec<DailyAverage> {
        let mut grouped: BTreeMap<(&str, NaiveDate), MeanAccumulator> = BTreeMap::new();

        for reading in readings {
            grouped
                .entry((reading.location.as_str(), reading.date()))
                .or_default()
                .push(reading.air_quality_index);
        }

        grouped
            .into_iter()
            .map(|((location, date), acc)| DailyAverage {
                location: location.to_string(),
                date,
                air_quality_index: acc.mean().unwrap_or(f64::NAN),
            })
            .collect()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
