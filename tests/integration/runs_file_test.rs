//! Integration tests for loading runs and configuration from disk.

use runlog::storage::config::{load_config_from, save_config_to, AppConfig};
use runlog::storage::{load_runs, DistanceUnit, RunsFileError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_runs_with_config_unit() {
    let dir = tempdir().unwrap();

    let mut config = AppConfig::default();
    config.runs.distance_unit = DistanceUnit::Meters;
    let config_path = dir.path().join("config.toml");
    save_config_to(&config, &config_path).unwrap();

    let runs_path = dir.path().join("runs.json");
    fs::write(
        &runs_path,
        r#"[{"id": 1, "date": "2024-01-01", "distance": 1609.34, "duration": "8:00"}]"#,
    )
    .unwrap();

    let loaded = load_config_from(&config_path).unwrap();
    let runs = load_runs(&runs_path, loaded.runs.distance_unit).unwrap();

    assert_eq!(runs.len(), 1);
    assert!((runs[0].distance_miles() - 1.0).abs() < 1e-9);
    assert_eq!(runlog::metrics::pace(runs[0].distance_miles(), runs[0].duration_minutes()), "8:00");
}

#[test]
fn test_load_runs_malformed_payload() {
    let dir = tempdir().unwrap();
    let runs_path = dir.path().join("runs.json");
    fs::write(&runs_path, r#"{"runs": []}"#).unwrap();

    let result = load_runs(&runs_path, DistanceUnit::Miles);
    assert!(matches!(result, Err(RunsFileError::ParseError(_))));
}
