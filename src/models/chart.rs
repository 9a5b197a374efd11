//! Neutral chart-ready tables.
//!
//! Views describe each chart as rows plus declared axis roles so that any
//! rendering layer can draw them without knowing how the rows were produced.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
}

/// Column bound to an axis, with the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRole {
    pub field: String,
    pub label: String,
}

impl AxisRole {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }

    /// Axis labelled with its own field name.
    pub fn plain(field: &str) -> Self {
        Self::new(field, field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartValue {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub x: ChartValue,
    /// `None` leaves a gap in the rendered series.
    pub y: Option<f64>,
    pub series: Option<String>,
}

impl ChartRow {
    pub fn new(x: ChartValue, y: Option<f64>, series: Option<String>) -> Self {
        Self { x, y, series }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: AxisRole,
    pub y_axis: AxisRole,
    /// Field the series colour is keyed by.
    pub color_field: Option<String>,
    pub marker_size: Option<f64>,
    pub rows: Vec<ChartRow>,
}

impl ChartData {
    pub fn new(
        id: impl Into<String>,
        kind: ChartKind,
        title: impl Into<String>,
        x_axis: AxisRole,
        y_axis: AxisRole,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            x_axis,
            y_axis,
            color_field: None,
            marker_size: None,
            rows: Vec::new(),
        }
    }

    /// Blank chart used as a placeholder when a view cannot be built.
    pub fn empty(id: impl Into<String>, kind: ChartKind) -> Self {
        Self::new(id, kind, "", AxisRole::plain("x"), AxisRole::plain("y"))
    }

    pub fn with_color(mut self, field: &str) -> Self {
        self.color_field = Some(field.to_string());
        self
    }

    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = Some(size);
        self
    }

    pub fn with_rows(mut self, rows: Vec<ChartRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn series_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.rows.iter().filter_map(|r| r.series.as_deref()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_names_keep_first_appearance_order() {
        let chart = ChartData::new(
            "c",
            ChartKind::Bar,
            "Test",
            AxisRole::plain("x"),
            AxisRole::plain("y"),
        )
        .with_rows(vec![
            ChartRow::new(ChartValue::Number(1.0), Some(1.0), Some("B".to_string())),
            ChartRow::new(ChartValue::Number(2.0), Some(2.0), Some("A".to_string())),
            ChartRow::new(ChartValue::Number(3.0), None, Some("B".to_string())),
        ]);

        assert_eq!(chart.series_names(), vec!["B", "A"]);
    }

    #[test]
    fn test_serialized_shape() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let chart = ChartData::new(
            "trends",
            ChartKind::Bar,
            "Trends",
            AxisRole::plain("date"),
            AxisRole::new("air_quality_index", "AQI"),
        )
        .with_color("location")
        .with_rows(vec![ChartRow::new(
            ChartValue::Date(date),
            Some(5.5),
            Some("A".to_string()),
        )]);

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["color_field"], "location");
        assert_eq!(json["rows"][0]["x"], "2024-01-02");
        assert_eq!(json["rows"][0]["y"], 5.5);
    }

    #[test]
    fn test_empty_placeholder() {
        let chart = ChartData::empty("findings-distribution", ChartKind::Bar);
        assert!(chart.is_empty());
        assert!(chart.title.is_empty());
    }
}
