use crate::models::{AggregatedReading, LocationStatistics, MeanAccumulator};

pub struct StatisticsSummarizer;

impl StatisticsSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// One entry per requested location, in request order.
    pub fn summarize(
        &self,
        filtered: &[AggregatedReading],
        locations: &[String],
    ) -> Vec<LocationStatistics> {
        locations
            .iter()
            .map(|location| self.summarize_location(filtered, location))
            .collect()
    }

    fn summarize_location(
        &self,
        filtered: &[AggregatedReading],
        location: &str,
    ) -> LocationStatistics {
        let mut stats = LocationStatistics::empty(location);
        let mut acc = MeanAccumulator::default();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for reading in filtered.iter().filter(|r| r.location == location) {
            stats.count += 1;
            acc.push(reading.air_quality_index);

            if let Some(value) = reading.air_quality_index.filter(|v| !v.is_nan()) {
                min = min.min(value);
                max = max.max(value);
            }
        }

        if let Some(mean) = acc.mean() {
            stats.mean = mean;
            stats.min = min;
            stats.max = max;
        }

        stats
    }
}

impl Default for StatisticsSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rows() -> Vec<AggregatedReading> {
        let ts = |h| {
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap()
        };
        vec![
            AggregatedReading::new(ts(1), "A", "s1", Some(10.0)),
            AggregatedReading::new(ts(2), "A", "s1", Some(40.0)),
            AggregatedReading::new(ts(3), "A", "s1", None),
            AggregatedReading::new(ts(1), "B", "s2", Some(5.0)),
        ]
    }

    #[test]
    fn test_per_location_statistics() {
        let stats = StatisticsSummarizer::new().summarize(&rows(), &["A".to_string()]);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].location, "A");
        assert_eq!(stats[0].mean, 25.0);
        assert_eq!(stats[0].max, 40.0);
        assert_eq!(stats[0].min, 10.0);
        // Rows with a missing index still count as readings
        assert_eq!(stats[0].count, 3);
    }

    #[test]
    fn test_location_without_rows() {
        let stats = StatisticsSummarizer::new().summarize(&rows(), &["Z".to_string()]);

        assert_eq!(stats.len(), 1);
        assert!(stats[0].mean.is_nan());
        assert!(stats[0].max.is_nan());
        assert!(stats[0].min.is_nan());
        assert_eq!(stats[0].count, 0);
    }

    #[test]
    fn test_request_order_and_empty_selection() {
        let summarizer = StatisticsSummarizer::new();
        let stats = summarizer.summarize(&rows(), &["B".to_string(), "A".to_string()]);
        assert_eq!(stats[0].location, "B");
        assert_eq!(stats[1].location, "A");

        assert!(summarizer.summarize(&rows(), &[]).is_empty());
        assert_eq!(summarizer.summarize(&[], &["A".to_string()])[0].count, 0);
    }
}
