use crate::error::Result;
use crate::utils::constants::{
    CORRELATIONS_FILE, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR, ENV_PREFIX, FINDINGS_FILE,
    SENSOR_FILE,
};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// Input and output locations for the dashboard data core.
///
/// Layers, lowest to highest precedence: built-in defaults, the optional
/// `dashboard.toml` (or an explicit file), `AQD_*` environment variables.
/// Command-line flags are applied on top by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DashboardConfig {
    #[validate(length(min = 1))]
    pub sensor_file: String,

    #[validate(length(min = 1))]
    pub findings_file: String,

    #[validate(length(min = 1))]
    pub correlations_file: String,

    #[validate(length(min = 1))]
    pub output_dir: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sensor_file: SENSOR_FILE.to_string(),
            findings_file: FINDINGS_FILE.to_string(),
            correlations_file: CORRELATIONS_FILE.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load layered settings. An explicit `path` must exist; the default
    /// config file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let defaults = Self::default();

        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings: Self = Config::builder()
            .set_default("sensor_file", defaults.sensor_file)?
            .set_default("findings_file", defaults.findings_file)?
            .set_default("correlations_file", defaults.correlations_file)?
            .set_default("output_dir", defaults.output_dir)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn sensor_path(&self) -> PathBuf {
        PathBuf::from(&self.sensor_file)
    }

    pub fn findings_path(&self) -> PathBuf {
        PathBuf::from(&self.findings_file)
    }

    pub fn correlations_path(&self) -> PathBuf {
        PathBuf::from(&self.correlations_file)
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}
