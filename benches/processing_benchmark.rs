use air_quality_dashboard::models::{AggregatedReading, SensorReading};
use air_quality_dashboard::processors::{
    DateRange, FilterEngine, FilterSelection, ReadingAggregator, StatisticsSummarizer,
};
use air_quality_dashboard::renderers::MonitoringRenderer;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const VALUE_TYPES: [&str; 5] = ["P0", "P1", "P2", "temperature", "humidity"];

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

// Raw readings: every sensor reports all value types every hour
fn create_test_readings(locations: usize, hours: usize) -> Vec<SensorReading> {
    let mut readings = Vec::with_capacity(locations * hours * VALUE_TYPES.len());

    for location in 0..locations {
        for hour in 0..hours {
            let timestamp = base_time() + Duration::hours(hour as i64);
            for (i, value_type) in VALUE_TYPES.iter().enumerate() {
                readings.push(SensorReading {
                    timestamp,
                    location: Some(format!("Location {}", location)),
                    sensor_id: Some(format!("SENSOR_{}", location % 4 + 1)),
                    sensor_type: Some("SDS011".to_string()),
                    value_type: Some(value_type.to_string()),
                    air_quality_index: Some((hour % 200) as f64 + i as f64),
                });
            }
        }
    }

    readings
}

fn create_test_dataset(locations: usize, hours: usize) -> Vec<AggregatedReading> {
    ReadingAggregator::new().aggregate(&create_test_readings(locations, hours))
}

fn benchmark_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for hours in [24 * 7, 24 * 30, 24 * 90] {
        let readings = create_test_readings(10, hours);
        group.bench_with_input(BenchmarkId::new("aggregate", hours), &readings, |b, readings| {
            b.iter(|| ReadingAggregator::new().aggregate(black_box(readings)))
        });
    }

    group.finish();
}

fn benchmark_filtering(c: &mut Criterion) {
    let dataset = create_test_dataset(10, 24 * 90);
    let engine = FilterEngine::new();

    let start = base_time().date() + Duration::days(10);
    let end = base_time().date() + Duration::days(40);
    let selection = FilterSelection::new(
        vec!["Location 1".to_string(), "Location 5".to_string()],
        DateRange::from_dates(start, end),
    );

    c.bench_function("filter_and_daily_averages", |b| {
        b.iter(|| engine.apply(black_box(&dataset), black_box(&selection)))
    });

    c.bench_function("filter_all_locations", |b| {
        b.iter(|| engine.apply(black_box(&dataset), black_box(&FilterSelection::default())))
    });
}

fn benchmark_statistics(c: &mut Criterion) {
    let dataset = create_test_dataset(10, 24 * 90);
    let locations: Vec<String> = (0..10).map(|i| format!("Location {}", i)).collect();
    let summarizer = StatisticsSummarizer::new();

    c.bench_function("statistics_summarizer", |b| {
        b.iter(|| summarizer.summarize(black_box(&dataset), black_box(&locations)))
    });
}

fn benchmark_monitoring_view(c: &mut Criterion) {
    let dataset = create_test_dataset(10, 24 * 90);
    let renderer = MonitoringRenderer::new();
    let selection = FilterSelection::new(
        (0..3).map(|i| format!("Location {}", i)).collect(),
        DateRange::default(),
    );

    c.bench_function("monitoring_view_recompute", |b| {
        b.iter(|| renderer.render(black_box(&dataset), black_box(&selection)))
    });
}

criterion_group!(
    benches,
    benchmark_aggregation,
    benchmark_filtering,
    benchmark_statistics,
    benchmark_monitoring_view
);
criterion_main!(benches);
