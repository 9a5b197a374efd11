use crate::error::{DashboardError, Result};
use crate::models::{AggregatedReading, SensorReading};
use crate::processors::{ReadingAggregator, SampleDataGenerator};
use crate::readers::csv_source::{cell, coerce_number, CsvSource};
use crate::utils::constants::{
    COL_AIR_QUALITY_INDEX, COL_LOCATION, COL_SENSOR_ID, COL_SENSOR_TYPE, COL_TIMESTAMP,
    COL_VALUE_TYPE, EXPORT_QUOTE,
};
use crate::utils::timestamps::parse_timestamp;
use std::path::Path;
use tracing::{debug, info, warn};

struct SensorColumns {
    sensor_id: usize,
    sensor_type: usize,
    location: usize,
    value_type: usize,
    air_quality_index: usize,
    timestamp: usize,
}

impl SensorColumns {
    fn resolve(source: &CsvSource) -> Result<Self> {
        Ok(Self {
            sensor_id: source.column(COL_SENSOR_ID)?,
            sensor_type: source.column(COL_SENSOR_TYPE)?,
            location: source.column(COL_LOCATION)?,
            value_type: source.column(COL_VALUE_TYPE)?,
            air_quality_index: source.column(COL_AIR_QUALITY_INDEX)?,
            timestamp: source.column(COL_TIMESTAMP)?,
        })
    }
}

/// Loads the sensor export, degrading to synthetic demo data on any failure.
pub struct SensorReader {
    aggregator: ReadingAggregator,
    generator: SampleDataGenerator,
}

impl SensorReader {
    pub fn new() -> Self {
        Self {
            aggregator: ReadingAggregator::new(),
            generator: SampleDataGenerator::new(),
        }
    }

    /// Load aggregated readings. Never fails: any error is logged and the
    /// synthetic dataset is returned in its place.
    pub fn load(&self, path: &Path) -> Vec<AggregatedReading> {
        info!("Loading air quality data from {}", path.display());

        match self.try_load(path) {
            Ok(readings) => readings,
            Err(e) => {
                warn!("Error processing sensor data: {}; using sample data", e);
                self.generator.generate()
            }
        }
    }

    /// Load aggregated readings, propagating the first error.
    pub fn try_load(&self, path: &Path) -> Result<Vec<AggregatedReading>> {
        let readings = self.read_readings(path)?;
        let aggregated = self.aggregator.aggregate(&readings);
        log_summary(&aggregated);
        Ok(aggregated)
    }

    /// Parse and clean every row of the export, before value-type filtering.
    ///
    /// Timestamps are parsed for the whole file up front, so a single
    /// unparseable timestamp fails the load even on a row that would later
    /// be filtered out. Rows with an empty timestamp carry no time key and
    /// are skipped.
    pub fn read_readings(&self, path: &Path) -> Result<Vec<SensorReading>> {
        let source = CsvSource::open(path)?;
        info!("Initial data load: {} rows", source.len());
        if source.is_empty() {
            warn!("{} has a header but no data rows", path.display());
        }
        self.parse_source(&source)
    }

    fn parse_source(&self, source: &CsvSource) -> Result<Vec<SensorReading>> {
        let columns = SensorColumns::resolve(source)?;
        let mut readings = Vec::with_capacity(source.len());
        let mut skipped = 0usize;

        for (index, record) in source.records().iter().enumerate() {
            let Some(raw_timestamp) = cell(record, columns.timestamp) else {
                skipped += 1;
                continue;
            };

            let timestamp =
                parse_timestamp(raw_timestamp).map_err(|_| DashboardError::InvalidTimestamp {
                    row: record.position().map_or(index + 2, |p| p.line() as usize),
                    value: raw_timestamp.to_string(),
                })?;

            readings.push(SensorReading {
                timestamp,
                location: clean_text(cell(record, columns.location)),
                sensor_id: clean_text(cell(record, columns.sensor_id)),
                sensor_type: clean_text(cell(record, columns.sensor_type)),
                value_type: clean_text(cell(record, columns.value_type)),
                air_quality_index: coerce_number(strip_export_quotes(cell(
                    record,
                    columns.air_quality_index,
                ))),
            });
        }

        if skipped > 0 {
            debug!("Skipped {} rows without a timestamp", skipped);
        }

        Ok(readings)
    }
}

impl Default for SensorReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the quote characters the export leaves around values.
fn strip_export_quotes(value: Option<&str>) -> Option<&str> {
    value.map(|v| v.trim_matches(EXPORT_QUOTE))
}

fn clean_text(value: Option<&str>) -> Option<String> {
    strip_export_quotes(value).map(str::to_string)
}

fn log_summary(readings: &[AggregatedReading]) {
    info!("Number of records: {}", readings.len());

    let first = readings.iter().map(|r| r.timestamp).min();
    let last = readings.iter().map(|r| r.timestamp).max();
    if let (Some(first), Some(last)) = (first, last) {
        info!("Date range: {} to {}", first, last);
    }

    let mut locations: Vec<&str> = Vec::new();
    for location in readings.iter().map(|r| r.location.as_str()) {
        if !locations.contains(&location) {
            locations.push(location);
        }
    }
    info!("Locations: {}", locations.join(", "));
}
