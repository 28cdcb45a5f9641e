//! Storage module for configuration and the runs payload.

pub mod config;
pub mod runs_file;

pub use config::{AppConfig, ConfigError, DistanceUnit};
pub use runs_file::{load_runs, parse_runs, RunsFileError};
