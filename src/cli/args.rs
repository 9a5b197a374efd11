use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aq-dashboard")]
#[command(about = "Air quality sensor and research data core for the monitoring dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide progress spinners")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: dashboard.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter sensor readings and summarise air quality per location
    Monitor {
        #[arg(short, long, help = "Sensor readings CSV")]
        sensor_file: Option<PathBuf>,

        #[arg(
            short,
            long = "location",
            help = "Location to include (repeatable) [default: first location]"
        )]
        locations: Vec<String>,

        #[arg(long, help = "Include every location")]
        all_locations: bool,

        #[arg(long, help = "Range start, YYYY-MM-DD or date-time [default: earliest reading]")]
        start: Option<String>,

        #[arg(long, help = "Range end, YYYY-MM-DD or date-time [default: latest reading]")]
        end: Option<String>,

        #[arg(
            short,
            long,
            help = "Write the view as JSON [default: output/air-quality-monitoring-{YYMMDD}.json]",
            num_args = 0..=1,
            default_missing_value = ""
        )]
        export: Option<PathBuf>,
    },

    /// Summarise research findings and health correlations
    Research {
        #[arg(short, long, help = "Research findings CSV")]
        findings_file: Option<PathBuf>,

        #[arg(short = 'r', long, help = "Health correlations CSV")]
        correlations_file: Option<PathBuf>,

        #[arg(
            short,
            long,
            help = "Write the view as JSON [default: output/air-quality-research-{YYMMDD}.json]",
            num_args = 0..=1,
            default_missing_value = ""
        )]
        export: Option<PathBuf>,
    },

    /// Show the loaded sensor dataset and the filter controls it offers
    Info {
        #[arg(short, long, help = "Sensor readings CSV")]
        sensor_file: Option<PathBuf>,

        #[arg(long, default_value = "5", help = "Number of sample rows to print")]
        sample: usize,
    },
}
