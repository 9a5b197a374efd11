use crate::models::AggregatedReading;
use chrono::NaiveDateTime;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only handle to the sensor dataset loaded at startup.
///
/// Cloning shares the same rows; recomputations borrow it and allocate
/// their own outputs.
#[derive(Debug, Clone)]
pub struct SensorDataset {
    rows: Arc<[AggregatedReading]>,
}

impl SensorDataset {
    pub fn new(rows: Vec<AggregatedReading>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &[AggregatedReading] {
        &self.rows
    }

    /// Distinct locations in order of first appearance.
    pub fn locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = Vec::new();
        for reading in self.rows.iter() {
            if !locations.iter().any(|l| *l == reading.location) {
                locations.push(reading.location.clone());
            }
        }
        locations
    }

    pub fn time_bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.rows.iter().map(|r| r.timestamp).min()?;
        let last = self.rows.iter().map(|r| r.timestamp).max()?;
        Some((first, last))
    }
}

impl Deref for SensorDataset {
    type Target = [AggregatedReading];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl From<Vec<AggregatedReading>> for SensorDataset {
    fn from(rows: Vec<AggregatedReading>) -> Self {
        Self::new(rows)
    }
}
