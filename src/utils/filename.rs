use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Generate default export filename with format: air-quality-{view}-{YYMMDD}.json
pub fn generate_default_export_filename(output_dir: &Path, view: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("air-quality-{}-{:02}{:02}{:02}.json", view, year, month, day);
    output_dir.join(filename)
}
