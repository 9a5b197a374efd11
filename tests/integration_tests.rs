use air_quality_dashboard::dashboard::{Dashboard, SensorDataset};
use air_quality_dashboard::models::AggregatedReading;
use air_quality_dashboard::processors::{
    DateRange, FilterEngine, FilterSelection, StatisticsSummarizer,
};
use air_quality_dashboard::readers::{ResearchReader, SensorReader};
use air_quality_dashboard::renderers::{FindingsRenderer, KeyFindings};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SENSOR_CSV: &str = "\
sensor_id,sensor_type,location,value_type,air_quality_index,timestamp
'101','SDS011','1','P1','10',2024-03-01 08:00:00
'101','SDS011','1','P2','30',2024-03-01 08:00:00
'101','SDS011','1','temperature','21.4',2024-03-01 08:00:00
'101','SDS011','1','P1','n/a',2024-03-01 09:00:00
'101','SDS011','1','P1','50',2024-03-02 08:00:00
'202','SDS011','2','P0','70',2024-03-01 08:00:00
'202','SDS011','2','humidity','65',2024-03-01 08:00:00
'202','SDS011','2','P2','90',2024-03-03 12:30:00
";

const FINDINGS_CSV: &str = "\
category,detail,reference
Pollution Sources,Traffic-related emissions,Study A
Pollution Sources,Waste burning near schools,Study B
Vulnerable Groups,Children with asthma,Study A
Study Limitations,Cross-sectional design,Study C
";

const CORRELATIONS_CSV: &str = "\
parameter,detail,value
PM2.5 Levels,Annual mean concentration,35.2
PM2.5 Levels,WHO guideline,5
PM2.5 Levels,Peak episode,not measured
Health Implications,Asthma odds ratio,1.8
Health Implications,Wheeze prevalence,significant
Respiratory Symptoms,Cough prevalence (%),22
";

struct Fixture {
    _dir: TempDir,
    sensor: std::path::PathBuf,
    findings: std::path::PathBuf,
    correlations: std::path::PathBuf,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let sensor = dir.path().join("sensor_reading.csv");
    let findings = dir.path().join("research_findings.csv");
    let correlations = dir.path().join("health_correlations.csv");

    fs::write(&sensor, SENSOR_CSV).unwrap();
    fs::write(&findings, FINDINGS_CSV).unwrap();
    fs::write(&correlations, CORRELATIONS_CSV).unwrap();

    Fixture {
        _dir: dir,
        sensor,
        findings,
        correlations,
    }
}

#[test]
fn test_sensor_pipeline_aggregates_particulate_rows() {
    let fx = fixture();
    let rows = SensorReader::new().try_load(&fx.sensor).unwrap();

    // 6 particulate rows collapse into 5 keys
    assert_eq!(rows.len(), 5);

    let keys: HashSet<_> = rows
        .iter()
        .map(|r| (r.timestamp, r.location.clone(), r.sensor_id.clone()))
        .collect();
    assert_eq!(keys.len(), rows.len());

    let first = &rows[0];
    assert_eq!(first.location, "1");
    assert_eq!(first.sensor_id, "101");
    assert_eq!(first.air_quality_index, Some(20.0));

    let unparseable = rows
        .iter()
        .find(|r| r.timestamp.format("%H").to_string() == "09")
        .unwrap();
    assert_eq!(unparseable.air_quality_index, None);
}

#[test]
fn test_sensor_fallback_shape_regardless_of_cause() {
    let fx = fixture();
    let reader = SensorReader::new();

    let broken = fx.sensor.with_file_name("broken.csv");
    fs::write(&broken, "sensor_id,location\n1,2\n").unwrap();

    for path in [Path::new("missing.csv"), broken.as_path()] {
        let rows = reader.load(path);
        assert_eq!(rows.len(), 90);

        let locations: HashSet<_> = rows.iter().map(|r| r.location.clone()).collect();
        let dates: HashSet<_> = rows.iter().map(|r| r.timestamp.date()).collect();
        assert_eq!(locations.len(), 3);
        assert_eq!(dates.len(), 30);
    }
}

#[test]
fn test_filter_and_statistics_end_to_end() {
    let fx = fixture();
    let dataset = SensorDataset::new(SensorReader::new().load(&fx.sensor));

    let all = FilterEngine::new().apply(&dataset, &FilterSelection::default());
    assert_eq!(all.filtered.len(), dataset.len());

    let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let selection = FilterSelection::new(
        vec!["1".to_string(), "2".to_string()],
        DateRange::from_dates(march_first, march_first),
    );
    let output = FilterEngine::new().apply(&dataset, &selection);
    assert_eq!(output.filtered.len(), 3);
    assert_eq!(output.daily_averages.len(), 2);
    assert_eq!(output.daily_averages[0].air_quality_index, 20.0);

    let stats = StatisticsSummarizer::new().summarize(&output.filtered, &selection.locations);
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].count, 2);
    assert_eq!(
        stats[0].lines(),
        vec![
            "Average AQI: 20.00",
            "Maximum AQI: 20.00",
            "Minimum AQI: 20.00",
            "Number of readings: 2",
        ]
    );
    assert_eq!(stats[1].mean, 70.0);
}

#[test]
fn test_range_excluding_all_rows() {
    let fx = fixture();
    let dashboard = Dashboard::load(&fx.sensor, &fx.correlations);

    let far_future = NaiveDate::from_ymd_opt(2031, 1, 1).unwrap();
    let selection = FilterSelection::new(
        vec!["1".to_string()],
        DateRange::from_dates(far_future, far_future),
    );
    let view = dashboard.monitoring_view(&selection);

    assert!(view.air_quality_chart.rows.is_empty());
    assert!(view.trends_chart.rows.is_empty());
    assert_eq!(view.statistics.len(), 1);
    assert_eq!(view.statistics[0].count, 0);
    assert!(view.statistics[0].mean.is_nan());
}

#[test]
fn test_research_loading_and_rendering() {
    let fx = fixture();
    let research = ResearchReader::new()
        .load(&fx.findings, &fx.correlations)
        .unwrap();

    assert_eq!(research.findings.len(), 4);
    assert_eq!(research.correlations.len(), 6);
    let counts: Vec<(&str, usize)> = research
        .category_counts
        .iter()
        .map(|c| (c.category.as_str(), c.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Pollution Sources", 2),
            ("Study Limitations", 1),
            ("Vulnerable Groups", 1),
        ]
    );

    let rendered = FindingsRenderer::new().render(&research.correlations);
    assert_eq!(rendered.pm25_levels.len(), 3);
    assert_eq!(rendered.health_implications.len(), 1);
    // Non-numeric rows stay in the raw set
    assert_eq!(
        research.correlations.iter().filter(|c| c.value.is_none()).count(),
        2
    );
}

#[test]
fn test_research_errors_propagate_but_view_degrades() {
    let fx = fixture();

    assert!(ResearchReader::new()
        .load(&fx.findings, Path::new("missing.csv"))
        .is_err());

    let dashboard = Dashboard::new(
        SensorDataset::new(vec![AggregatedReading::new(
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            "1",
            "101",
            Some(1.0),
        )]),
        fx.correlations.with_file_name("gone.csv"),
    );
    let view = dashboard.research_view();

    assert!(view.is_placeholder());
    assert!(view.findings_distribution.rows.is_empty());
    assert_eq!(dashboard.dataset().len(), 1);
}

#[test]
fn test_dashboard_views_from_files() {
    let fx = fixture();
    let dashboard = Dashboard::load(&fx.sensor, &fx.correlations);

    let controls = dashboard.filter_controls();
    assert_eq!(controls.default_locations, vec!["1"]);
    assert_eq!(controls.location_options.len(), 2);

    let view = dashboard.monitoring_view(&controls.initial_selection());
    assert_eq!(view.statistics[0].count, 3);

    let research = dashboard.research_view();
    assert_eq!(research.findings_distribution.rows.len(), 4);
    assert_eq!(research.health_correlations.rows.len(), 3);
    match research.key_findings {
        KeyFindings::Rendered(findings) => assert_eq!(findings.cards.len(), 3),
        KeyFindings::Error { message } => panic!("unexpected placeholder: {}", message),
    }
}
