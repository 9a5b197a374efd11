use crate::models::{
    AggregatedReading, AxisRole, ChartData, ChartKind, ChartRow, ChartValue, DailyAverage,
    LocationStatistics,
};
use crate::processors::{FilterEngine, FilterSelection, StatisticsSummarizer};
use crate::utils::constants::{
    CHART_AIR_QUALITY, CHART_TRENDS, COL_AIR_QUALITY_INDEX, COL_LOCATION, COL_TIMESTAMP,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the live monitoring tab shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringView {
    pub selection: FilterSelection,
    pub air_quality_chart: ChartData,
    pub trends_chart: ChartData,
    pub statistics: Vec<LocationStatistics>,
}

pub struct MonitoringRenderer {
    engine: FilterEngine,
    summarizer: StatisticsSummarizer,
}

impl MonitoringRenderer {
    pub fn new() -> Self {
        Self {
            engine: FilterEngine::new(),
            summarizer: StatisticsSummarizer::new(),
        }
    }

    /// One full recomputation pass: filter, daily averages, statistics.
    pub fn render(
        &self,
        dataset: &[AggregatedReading],
        selection: &FilterSelection,
    ) -> MonitoringView {
        let output = self.engine.apply(dataset, selection);
        let statistics = self
            .summarizer
            .summarize(&output.filtered, &selection.locations);

        for stats in statistics.iter().filter(|s| !s.has_values()) {
            debug!(
                "No index values for location {} in selection",
                stats.location
            );
        }

        MonitoringView {
            selection: selection.clone(),
            air_quality_chart: air_quality_chart(&output.filtered),
            trends_chart: trends_chart(&output.daily_averages),
            statistics,
        }
    }
}

impl Default for MonitoringRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn air_quality_chart(readings: &[AggregatedReading]) -> ChartData {
    let rows = readings
        .iter()
        .map(|r| {
            ChartRow::new(
                ChartValue::DateTime(r.timestamp),
                r.air_quality_index,
                Some(r.location.clone()),
            )
        })
        .collect();

    ChartData::new(
        CHART_AIR_QUALITY,
        ChartKind::Line,
        "Air Quality Index Over Time",
        AxisRole::plain(COL_TIMESTAMP),
        AxisRole::plain(COL_AIR_QUALITY_INDEX),
    )
    .with_color(COL_LOCATION)
    .with_rows(rows)
}

fn trends_chart(daily: &[DailyAverage]) -> ChartData {
    let rows = daily
        .iter()
        .map(|d| {
            let value = (!d.air_quality_index.is_nan()).then_some(d.air_quality_index);
            ChartRow::new(ChartValue::Date(d.date), value, Some(d.location.clone()))
        })
        .collect();

    ChartData::new(
        CHART_TRENDS,
        ChartKind::Bar,
        "Daily Average Air Quality Index",
        AxisRole::plain("date"),
        AxisRole::plain(COL_AIR_QUALITY_INDEX),
    )
    .with_color(COL_LOCATION)
    .with_rows(rows)
}
