//! Application configuration.
//!
//! Stored as `config.toml` in the platform data directory. A missing file
//! means defaults.

use crate::metrics::analytics::training_load::{
    DEFAULT_ACUTE_DAYS, DEFAULT_CHRONIC_DAYS, DEFAULT_ROLLING_WINDOW,
};
use crate::metrics::analytics::TrainingLoadCalculator;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Meters in one mile.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Unit the server stores run distances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Miles (default)
    #[default]
    Miles,
    /// Meters
    Meters,
}

impl DistanceUnit {
    /// Convert a distance in this unit to miles.
    pub fn to_miles(&self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Miles => distance,
            DistanceUnit::Meters => distance / METERS_PER_MILE,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceUnit::Miles => write!(f, "Miles"),
            DistanceUnit::Meters => write!(f, "Meters"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Run payload settings
    pub runs: RunsSettings,
    /// Training load settings
    pub analytics: AnalyticsSettings,
    /// Display settings
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            runs: RunsSettings::default(),
            analytics: AnalyticsSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Run payload settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunsSettings {
    /// Unit of the `distance` field in the runs payload
    pub distance_unit: DistanceUnit,
    /// Distance preselected in the filters (miles)
    pub default_distance: Option<f64>,
}

/// Training load settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Acute window in days
    pub acute_window_days: i64,
    /// Chronic window in days
    pub chronic_window_days: i64,
    /// Rolling load window in runs
    pub rolling_window_runs: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            acute_window_days: DEFAULT_ACUTE_DAYS,
            chronic_window_days: DEFAULT_CHRONIC_DAYS,
            rolling_window_runs: DEFAULT_ROLLING_WINDOW,
        }
    }
}

impl AnalyticsSettings {
    /// Build the calculator for these windows.
    pub fn calculator(&self) -> TrainingLoadCalculator {
        TrainingLoadCalculator::with_windows(
            self.acute_window_days,
            self.chronic_window_days,
            self.rolling_window_runs,
        )
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Segment length for run detail splits (miles)
    pub split_segment_miles: f64,
    /// Leaderboard rows shown per distance
    pub leaderboard_rows: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            split_segment_miles: 1.0,
            leaderboard_rows: 10,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "runlog", "RunLog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to `path`.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
