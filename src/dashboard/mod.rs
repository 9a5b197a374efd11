//! Contract between the data core and the rendering layer.
//!
//! A [`Dashboard`] is built once per process. It hands out the filter
//! controls, recomputes the monitoring view for each selection and rebuilds
//! the research view whenever that tab is shown.

pub mod dataset;

pub use dataset::SensorDataset;

use crate::error::Result;
use crate::processors::{DateRange, FilterSelection};
use crate::readers::{ResearchReader, SensorReader};
use crate::renderers::{MonitoringRenderer, MonitoringView, ResearchRenderer, ResearchView};
use crate::utils::constants::DATE_PICKER_DISPLAY_FORMAT;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    pub label: String,
    pub value: String,
}

/// Controls offered on the monitoring tab and their initial values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControls {
    pub location_options: Vec<LocationOption>,
    pub default_locations: Vec<String>,
    pub min_timestamp: Option<NaiveDateTime>,
    pub max_timestamp: Option<NaiveDateTime>,
    /// Picker token (`YYYY-MM-DD`), not a chrono pattern.
    pub display_format: String,
}

impl FilterControls {
    /// Selection the monitoring tab starts with.
    pub fn initial_selection(&self) -> FilterSelection {
        FilterSelection::new(
            self.default_locations.clone(),
            DateRange::new(self.min_timestamp, self.max_timestamp),
        )
    }
}

pub struct Dashboard {
    dataset: SensorDataset,
    correlations_path: PathBuf,
    monitoring: MonitoringRenderer,
    research: ResearchRenderer,
}

impl Dashboard {
    pub fn new(dataset: SensorDataset, correlations_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset,
            correlations_path: correlations_path.into(),
            monitoring: MonitoringRenderer::new(),
            research: ResearchRenderer::new(),
        }
    }

    /// Load sensor data (falling back to sample data) and bind the
    /// correlations file the research tab reads.
    pub fn load(sensor_path: &Path, correlations_path: &Path) -> Self {
        let readings = SensorReader::new().load(sensor_path);
        Self::new(SensorDataset::new(readings), correlations_path)
    }

    pub fn dataset(&self) -> &SensorDataset {
        &self.dataset
    }

    pub fn filter_controls(&self) -> FilterControls {
        let locations = self.dataset.locations();
        let bounds = self.dataset.time_bounds();

        FilterControls {
            location_options: locations
                .iter()
                .map(|loc| LocationOption {
                    label: format!("Location {}", loc),
                    value: loc.clone(),
                })
                .collect(),
            default_locations: locations.into_iter().take(1).collect(),
            min_timestamp: bounds.map(|(first, _)| first),
            max_timestamp: bounds.map(|(_, last)| last),
            display_format: DATE_PICKER_DISPLAY_FORMAT.to_string(),
        }
    }

    pub fn monitoring_view(&self, selection: &FilterSelection) -> MonitoringView {
        debug!(
            "Recomputing monitoring view for {} location(s)",
            selection.locations.len()
        );
        self.monitoring.render(&self.dataset, selection)
    }

    /// Rebuild the research tab from the correlations file. Failures are
    /// logged and turned into a placeholder view.
    pub fn research_view(&self) -> ResearchView {
        match self.try_research_view() {
            Ok(view) => view,
            Err(e) => {
                error!(
                    "Error updating research findings from {}: {:?}",
                    self.correlations_path.display(),
                    e
                );
                ResearchView::placeholder()
            }
        }
    }

    fn try_research_view(&self) -> Result<ResearchView> {
        let correlations = ResearchReader::new().read_correlations(&self.correlations_path)?;
        Ok(self.research.render(&correlations))
    }
}
