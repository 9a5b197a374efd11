use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::constants::PARTICULATE_VALUE_TYPES;

/// One cleaned row of the sensor export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp: NaiveDateTime,
    /// `None` when the raw cell was empty.
    pub location: Option<String>,
    pub sensor_id: Option<String>,
    pub sensor_type: Option<String>,
    pub value_type: Option<String>,
    /// `None` when the index could not be read as a number.
    pub air_quality_index: Option<f64>,
}

impl SensorReading {
    pub fn is_particulate(&self) -> bool {
        self.value_type
            .as_deref()
            .is_some_and(|v| PARTICULATE_VALUE_TYPES.contains(&v))
    }

    /// Aggregation key; rows with a missing key part never form a group.
    pub fn aggregation_key(&self) -> Option<(NaiveDateTime, &str, &str)> {
        Some((
            self.timestamp,
            self.location.as_deref()?,
            self.sensor_id.as_deref()?,
        ))
    }
}

/// Mean of all readings sharing (timestamp, location, sensor_id).
///
/// `location` may be empty when the export held a quoted-empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedReading {
    pub timestamp: NaiveDateTime,
    pub location: String,
    pub sensor_id: String,

    /// `None` when every reading in the group was missing.
    pub air_quality_index: Option<f64>,
}

impl AggregatedReading {
    pub fn new(
        timestamp: NaiveDateTime,
        location: impl Into<String>,
        sensor_id: impl Into<String>,
        air_quality_index: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            location: location.into(),
            sensor_id: sensor_id.into(),
            air_quality_index,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Mean index per (location, calendar day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub location: String,
    pub date: NaiveDate,
    /// NaN when no reading of the day carried a value.
    pub air_quality_index: f64,
}

/// Running mean that skips missing values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| !v.is_nan()) {
            self.sum += v;
            self.count += 1;
        }
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}
