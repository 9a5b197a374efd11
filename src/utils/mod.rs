pub mod constants;
pub mod filename;
pub mod progress;
pub mod timestamps;

pub use constants::*;
pub use filename::generate_default_export_filename;
pub use progress::ProgressReporter;
pub use timestamps::{parse_range_bound, parse_timestamp};
