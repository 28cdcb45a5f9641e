//! Loading the runs payload.
//!
//! The payload is the JSON array served by the running-log backend:
//! `[{"id": 1, "date": "2024-01-01", "distance": 5000, "duration": 27.5}, ...]`.

use super::config::DistanceUnit;
use crate::runs::Run;
use std::path::Path;
use thiserror::Error;

/// Errors reading a runs payload.
#[derive(Debug, Error)]
pub enum RunsFileError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Parse a runs payload, converting distances to miles.
pub fn parse_runs(json: &str, unit: DistanceUnit) -> Result<Vec<Run>, RunsFileError> {
    let mut runs: Vec<Run> =
        serde_json::from_str(json).map_err(|e| RunsFileError::ParseError(e.to_string()))?;

    if unit != DistanceUnit::Miles {
        for run in &mut runs {
            run.distance = run.distance.map(|d| unit.to_miles(d));
        }
    }

    Ok(runs)
}

/// Load and parse a runs payload from disk.
pub fn load_runs(path: &Path, unit: DistanceUnit) -> Result<Vec<Run>, RunsFileError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| RunsFileError::IoError(e.to_string()))?;

    let runs = parse_runs(&content, unit)?;
    tracing::info!("Loaded {} runs from {}", runs.len(), path.display());

    Ok(runs)
}
