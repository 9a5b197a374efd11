use crate::models::{AggregatedReading, MeanAccumulator, SensorReading};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Keeps particulate readings only (P0, P1, P2).
pub struct ReadingAggregator;

impl ReadingAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Collapse readings to one row per (timestamp, location, sensor_id),
    /// averaging the index over non-missing values. Output is ordered by key.
    pub fn aggregate(&self, readings: &[SensorReading]) -> Vec<AggregatedReading> {
        let grouped = self.group_by_key(readings);

        grouped
            .into_iter()
            .map(|((timestamp, location, sensor_id), acc)| {
                AggregatedReading::new(timestamp, location, sensor_id, acc.mean())
            })
            .collect()
    }

    fn group_by_key<'a>(
        &self,
        readings: &'a [SensorReading],
    ) -> BTreeMap<(NaiveDateTime, &'a str, &'a str), MeanAccumulator> {
        let mut grouped: BTreeMap<_, MeanAccumulator> = BTreeMap::new();

        for reading in readings {
            if !reading.is_particulate() {
                continue;
            }

            if let Some(key) = reading.aggregation_key() {
                grouped
                    .entry(key)
                    .or_default()
                    .push(reading.air_quality_index);
            }
        }

        grouped
    }
}

impl Default for ReadingAggregator {
    fn default() -> Self {
        Self::new()
    }
}
