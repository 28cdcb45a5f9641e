//! Per-run chart series paired with their run dates.

use crate::metrics::pace::{pace_minutes, predicted_pace, vo2_estimate};
use crate::runs::Run;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated value on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Date of the run
    pub date: NaiveDate,
    /// Value plotted for that run
    pub value: f64,
}

impl SeriesPoint {
    /// Create a new point
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Pace (decimal min/mile) of every valid run, in list order.
pub fn pace_series(runs: &[Run]) -> Vec<SeriesPoint> {
    runs.iter()
        .filter(|run| run.is_valid())
        .filter_map(|run| {
            pace_minutes(run.distance_miles(), run.duration_minutes())
                .map(|pace| SeriesPoint::new(run.date, pace))
        })
        .collect()
}

/// VO2 estimate of every valid run, in list order.
pub fn vo2_series(runs: &[Run]) -> Vec<SeriesPoint> {
    runs.iter()
        .filter(|run| run.is_valid())
        .map(|run| {
            SeriesPoint::new(
                run.date,
                vo2_estimate(run.distance_miles(), run.duration_minutes()),
            )
        })
        .collect()
}

/// Predicted pace of every valid run, in list order.
pub fn predicted_pace_series(runs: &[Run]) -> Vec<SeriesPoint> {
    runs.iter()
        .filter(|run| run.is_valid())
        .filter_map(|run| {
            predicted_pace(run.distance_miles(), run.duration_minutes())
                .map(|pace| SeriesPoint::new(run.date, pace))
        })
        .collect()
}
