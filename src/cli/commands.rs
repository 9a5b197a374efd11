use crate::cli::args::{Cli, Commands};
use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, FilterControls};
use crate::error::Result;
use crate::models::ChartData;
use crate::processors::{DateRange, FilterSelection};
use crate::readers::ResearchReader;
use crate::renderers::{
    category_chart, KeyFindings, MonitoringView, ResearchRenderer, ResearchView,
};
use crate::utils::constants::DATE_FORMAT;
use crate::utils::filename::generate_default_export_filename;
use crate::utils::progress::ProgressReporter;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let settings = DashboardConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Monitor {
            sensor_file,
            locations,
            all_locations,
            start,
            end,
            export,
        } => {
            let sensor_path = sensor_file.unwrap_or_else(|| settings.sensor_path());
            let dashboard = load_dashboard(&sensor_path, &settings, cli.quiet);
            let controls = dashboard.filter_controls();

            let selection = build_selection(
                &controls,
                locations,
                all_locations,
                start.as_deref(),
                end.as_deref(),
            )?;

            let view = dashboard.monitoring_view(&selection);
            print_monitoring(&view);

            if let Some(path) = export {
                let path = resolve_export_path(path, &settings, "monitoring");
                write_json(&view, &path)?;
                println!("Monitoring view written to {}", path.display());
            }
        }

        Commands::Research {
            findings_file,
            correlations_file,
            export,
        } => {
            let findings_path = findings_file.unwrap_or_else(|| settings.findings_path());
            let correlations_path =
                correlations_file.unwrap_or_else(|| settings.correlations_path());

            let progress = ProgressReporter::new_spinner("Loading research data...", cli.quiet);
            // Research inputs have no fallback: a bad file stops the command.
            let research = ResearchReader::new().load(&findings_path, &correlations_path)?;
            progress.set_message("Building research charts...");
            let view = ResearchRenderer::new().render(&research.correlations);
            progress.finish_with_message(&format!(
                "Loaded {} findings and {} correlations",
                research.findings.len(),
                research.correlations.len()
            ));

            println!("\nFindings by category:");
            for count in &research.category_counts {
                println!("  {}: {}", count.category, count.count);
            }

            print_research(&view);

            if let Some(path) = export {
                let path = resolve_export_path(path, &settings, "research");
                let bundle = ResearchExport {
                    category_chart: category_chart(&research.category_counts),
                    view,
                };
                write_json(&bundle, &path)?;
                println!("Research view written to {}", path.display());
            }
        }

        Commands::Info {
            sensor_file,
            sample,
        } => {
            let sensor_path = sensor_file.unwrap_or_else(|| settings.sensor_path());
            let dashboard = load_dashboard(&sensor_path, &settings, cli.quiet);
            let dataset = dashboard.dataset();
            let controls = dashboard.filter_controls();

            println!("\nSensor dataset: {} aggregated readings", dataset.len());
            print_controls(&controls);

            if sample > 0 {
                println!("\nSample readings (showing up to {}):", sample);
                for (i, reading) in dataset.iter().take(sample).enumerate() {
                    let aqi = reading
                        .air_quality_index
                        .map_or_else(|| "missing".to_string(), |v| format!("{:.2}", v));
                    println!(
                        "{}. {} at {} ({}): AQI {}",
                        i + 1,
                        reading.location,
                        reading.timestamp,
                        reading.sensor_id,
                        aqi
                    );
                }
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct ResearchExport {
    category_chart: ChartData,
    view: ResearchView,
}

fn load_dashboard(sensor_path: &Path, settings: &DashboardConfig, quiet: bool) -> Dashboard {
    let progress = ProgressReporter::new_spinner("Loading sensor data...", quiet);
    let dashboard = Dashboard::load(sensor_path, &settings.correlations_path());
    progress.finish_with_message(&format!(
        "Loaded {} aggregated readings",
        dashboard.dataset().len()
    ));
    dashboard
}

/// Turn command-line filter arguments into a selection, falling back to the
/// dashboard's initial values for anything not given.
fn build_selection(
    controls: &FilterControls,
    locations: Vec<String>,
    all_locations: bool,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<FilterSelection> {
    let initial = controls.initial_selection();

    let locations = if all_locations {
        Vec::new()
    } else if locations.is_empty() {
        initial.locations
    } else {
        locations
    };

    let parsed = DateRange::parse(start, end)?;
    let date_range = DateRange::new(
        parsed.start.or(initial.date_range.start),
        parsed.end.or(initial.date_range.end),
    );

    Ok(FilterSelection::new(locations, date_range))
}

fn resolve_export_path(path: PathBuf, settings: &DashboardConfig, view: &str) -> PathBuf {
    if path.as_os_str().is_empty() {
        generate_default_export_filename(&settings.output_path(), view)
    } else {
        path
    }
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn print_controls(controls: &FilterControls) {
    println!("\nLocations:");
    for option in &controls.location_options {
        println!("  {} ({})", option.label, option.value);
    }
    println!("Default selection: {}", controls.default_locations.join(", "));

    if let (Some(first), Some(last)) = (controls.min_timestamp, controls.max_timestamp) {
        println!(
            "Date range: {} to {}",
            first.format(DATE_FORMAT),
            last.format(DATE_FORMAT)
        );
    }
}

fn print_monitoring(view: &MonitoringView) {
    println!(
        "\n{}: {} points ({})",
        view.air_quality_chart.title,
        view.air_quality_chart.rows.len(),
        view.air_quality_chart.series_names().join(", ")
    );
    println!(
        "{}: {} bars",
        view.trends_chart.title,
        view.trends_chart.rows.len()
    );

    for stats in &view.statistics {
        println!("\n{}", stats);
    }
}

fn print_research(view: &ResearchView) {
    println!(
        "\n{}: {} bars",
        view.findings_distribution.title,
        view.findings_distribution.rows.len()
    );
    println!(
        "{}: {} points",
        view.health_correlations.title,
        view.health_correlations.rows.len()
    );

    match &view.key_findings {
        KeyFindings::Rendered(findings) => {
            println!("\nPM2.5 measurements: {}", findings.pm25_levels.len());
            println!("Health risk indicators: {}", findings.health_implications.len());
            for card in &findings.cards {
                println!("\n{}", card.title);
                for point in &card.points {
                    println!("  - {}", point);
                }
            }
        }
        KeyFindings::Error { message } => println!("\n{}", message),
    }
}
