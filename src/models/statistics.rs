use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics for one selected location.
///
/// `mean`, `max` and `min` are NaN when the location had no usable readings.
/// Serialized NaN becomes JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationStatistics {
    pub location: String,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

impl LocationStatistics {
    pub fn empty(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            mean: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
            count: 0,
        }
    }

    pub fn has_values(&self) -> bool {
        !self.mean.is_nan()
    }

    pub fn title(&self) -> String {
        format!("Statistics for Location {}", self.location)
    }

    /// Display lines for a statistics card.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Average AQI: {}", format_two_decimals(self.mean)),
            format!("Maximum AQI: {}", format_two_decimals(self.max)),
            format!("Minimum AQI: {}", format_two_decimals(self.min)),
            format!("Number of readings: {}", self.count),
        ]
    }
}

impl fmt::Display for LocationStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        for line in self.lines() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

pub fn format_two_decimals(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_use_two_decimals() {
        let stats = LocationStatistics {
            location: "A".to_string(),
            mean: 20.0,
            max: 30.456,
            min: 9.999,
            count: 3,
        };

        assert_eq!(
            stats.lines(),
            vec![
                "Average AQI: 20.00",
                "Maximum AQI: 30.46",
                "Minimum AQI: 10.00",
                "Number of readings: 3",
            ]
        );
        assert_eq!(stats.title(), "Statistics for Location A");
    }

    #[test]
    fn test_empty_statistics_render_nan() {
        let stats = LocationStatistics::empty("B");
        assert!(!stats.has_values());
        assert_eq!(stats.lines()[0], "Average AQI: nan");
        assert_eq!(stats.lines()[3], "Number of readings: 0");
        assert!(stats.to_string().contains("Statistics for Location B"));
    }
}
