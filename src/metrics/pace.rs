//! Pace, predicted pace and VO2 heuristics for a single run.
//!
//! Neither the VO2 estimate nor the prediction is a physiological model:
//! both are fixed-coefficient heuristics kept for compatibility with the
//! existing charts.

use super::time::to_mmss;
use serde::{Deserialize, Serialize};

/// Speed coefficient of the VO2 heuristic.
pub const VO2_SPEED_FACTOR: f64 = 0.2;

/// Resting oxygen uptake multiplier of the VO2 heuristic (ml/kg/min).
pub const VO2_RESTING_FACTOR: f64 = 3.5;

/// Flat improvement assumed by the pace prediction.
pub const PREDICTION_FACTOR: f64 = 0.95;

/// Pace in decimal minutes per mile, `None` when undefined.
pub fn pace_minutes(distance_miles: f64, duration_minutes: f64) -> Option<f64> {
    if !distance_miles.is_finite() || distance_miles <= 0.0 {
        return None;
    }
    if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
        return None;
    }
    Some(duration_minutes / distance_miles)
}

/// Pace formatted as `M:SS` per mile, `"0:00"` when undefined.
pub fn pace(distance_miles: f64, duration_minutes: f64) -> String {
    pace_minutes(distance_miles, duration_minutes)
        .map(to_mmss)
        .unwrap_or_else(|| "0:00".to_string())
}

/// Predicted pace: current pace improved by a flat 5%.
pub fn predicted_pace(distance_miles: f64, duration_minutes: f64) -> Option<f64> {
    pace_minutes(distance_miles, duration_minutes).map(|p| p * PREDICTION_FACTOR)
}

/// Speed-based VO2 estimate, 0 when the duration is missing.
pub fn vo2_estimate(distance_miles: f64, duration_minutes: f64) -> f64 {
    if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
        return 0.0;
    }
    (distance_miles * VO2_SPEED_FACTOR / duration_minutes) * VO2_RESTING_FACTOR
}

/// One even split of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Display label ("Mile 1", "Mile 2", ...)
    pub label: String,
    /// Pace in decimal minutes per mile
    pub pace: f64,
}

/// Even splits for the run detail chart.
///
/// Without per-segment data every split carries the run's average pace.
/// Produces `floor(distance / segment_size)` splits.
pub fn synthetic_splits(distance_miles: f64, duration_minutes: f64, segment_size: f64) -> Vec<Split> {
    let Some(average) = pace_minutes(distance_miles, duration_minutes) else {
        return Vec::new();
    };
    if !segment_size.is_finite() || segment_size <= 0.0 {
        return Vec::new();
    }

    let segments = (distance_miles / segment_size).floor() as usize;
    (1..=segments)
        .map(|i| Split {
            label: format!("Mile {}", i),
            pace: average,
        })
        .collect()
}
