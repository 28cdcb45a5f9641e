//! One-shot analytics over a run list.

use super::series::{pace_series, predicted_pace_series, vo2_series, SeriesPoint};
use super::streaks::{longest_streak, weekly_streak};
use super::training_load::{Acwr, TrainingLoadCalculator, WeeklyLoad};
use crate::runs::Run;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the analytics view shows for one run list and reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Reference date for the calendar windows
    pub today: NaiveDate,
    /// Runs supplied
    pub run_count: usize,
    /// Runs left out of load and pace calculations
    pub excluded_count: usize,
    /// Acute:chronic workload ratio
    pub acwr: Acwr,
    /// Coaching hint matching the ratio
    pub insight: String,
    /// Minutes per week, oldest first
    pub weekly_loads: [WeeklyLoad; 5],
    /// Distinct ISO weeks with a run
    pub weekly_streak: usize,
    /// Longest run of consecutive days
    pub longest_streak: usize,
    /// Rolling load per run
    pub rolling_load: Vec<SeriesPoint>,
    /// Pace per run (min/mile)
    pub pace: Vec<SeriesPoint>,
    /// VO2 estimate per run
    pub vo2: Vec<SeriesPoint>,
    /// Predicted pace per run (min/mile)
    pub predicted_pace: Vec<SeriesPoint>,
}

impl AnalyticsSummary {
    /// Compute the summary. The run list is used in the order given.
    pub fn compute(runs: &[Run], today: NaiveDate, calculator: &TrainingLoadCalculator) -> Self {
        let excluded_count = runs.iter().filter(|run| !run.is_valid()).count();
        if excluded_count > 0 {
            tracing::warn!(
                "{} of {} runs excluded from load and pace calculations",
                excluded_count,
                runs.len()
            );
        }

        let acwr = calculator.acwr(runs, today);
        tracing::debug!(
            "ACWR as of {}: acute={:.1} chronic={:.1} ratio={:?}",
            today,
            acwr.acute,
            acwr.chronic,
            acwr.ratio
        );

        Self {
            today,
            run_count: runs.len(),
            excluded_count,
            insight: acwr.insight().to_string(),
            acwr,
            weekly_loads: calculator.weekly_loads(runs, today),
            weekly_streak: weekly_streak(runs),
            longest_streak: longest_streak(runs),
            rolling_load: calculator.rolling_load(runs),
            pace: pace_series(runs),
            vo2: vo2_series(runs),
            predicted_pace: predicted_pace_series(runs),
        }
    }
}
