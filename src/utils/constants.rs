/// Default input file names
pub const SENSOR_FILE: &str = "sensor_reading.csv";
pub const FINDINGS_FILE: &str = "research_findings.csv";
pub const CORRELATIONS_FILE: &str = "health_correlations.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
pub const ENV_PREFIX: &str = "AQD";

/// Sensor CSV columns
pub const COL_SENSOR_ID: &str = "sensor_id";
pub const COL_SENSOR_TYPE: &str = "sensor_type";
pub const COL_LOCATION: &str = "location";
pub const COL_VALUE_TYPE: &str = "value_type";
pub const COL_AIR_QUALITY_INDEX: &str = "air_quality_index";
pub const COL_TIMESTAMP: &str = "timestamp";

/// Research CSV columns
pub const COL_CATEGORY: &str = "category";
pub const COL_DETAIL: &str = "detail";
pub const COL_PARAMETER: &str = "parameter";
pub const COL_VALUE: &str = "value";

/// Particulate measurement classes kept by the sensor loader
pub const PARTICULATE_VALUE_TYPES: [&str; 3] = ["P0", "P1", "P2"];

/// Quote character left around fields by the sensor export
pub const EXPORT_QUOTE: char = '\'';

/// Synthetic fallback dataset shape
pub const SAMPLE_DAYS: i64 = 30;
pub const SAMPLE_LOCATIONS: [&str; 3] = ["Location A", "Location B", "Location C"];
pub const SAMPLE_SENSOR_COUNT: u32 = 4;
pub const SAMPLE_SENSOR_PREFIX: &str = "SENSOR_";
pub const SAMPLE_AQI_MAX: u32 = 200;

/// Correlation parameters with dedicated charts
pub const PARAM_PM25_LEVELS: &str = "PM2.5 Levels";
pub const PARAM_HEALTH_IMPLICATIONS: &str = "Health Implications";

/// Chart identifiers handed to the rendering layer
pub const CHART_AIR_QUALITY: &str = "air-quality-graph";
pub const CHART_TRENDS: &str = "trends-graph";
pub const CHART_FINDINGS_DISTRIBUTION: &str = "findings-distribution";
pub const CHART_HEALTH_CORRELATIONS: &str = "health-correlations";
pub const CHART_FINDINGS_BY_CATEGORY: &str = "findings-by-category";
pub const CHART_PM25: &str = "pm25-concentrations";
pub const CHART_HEALTH_RISK: &str = "health-risk-indicators";

/// Marker size used by the scatter charts
pub const SCATTER_MARKER_SIZE: f64 = 20.0;

/// Display token handed to the date picker
pub const DATE_PICKER_DISPLAY_FORMAT: &str = "YYYY-MM-DD";

/// chrono pattern rendering the same layout as the picker token
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Message shown when the research panel cannot be built
pub const RESEARCH_ERROR_MESSAGE: &str = "Error loading research findings";
