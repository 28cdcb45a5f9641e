//! Training load calculations (rolling load, ACWR, weekly buckets).
//!
//! Load is measured in minutes of running:
//! - Rolling load: sum over the last 7 entries of the run list
//! - Acute load: minutes logged in the trailing 7 calendar days
//! - Chronic load: minutes logged in the trailing 28 days, averaged per week
//! - ACWR (Acute:Chronic Workload Ratio): acute / chronic

use super::series::SeriesPoint;
use crate::runs::Run;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default acute window in calendar days.
pub const DEFAULT_ACUTE_DAYS: i64 = 7;

/// Default chronic window in calendar days.
pub const DEFAULT_CHRONIC_DAYS: i64 = 28;

/// Default rolling window in runs.
pub const DEFAULT_ROLLING_WINDOW: usize = 7;

/// Labels of the weekly load buckets, oldest first.
pub const WEEKLY_LOAD_LABELS: [&str; 5] = ["4w", "3w", "2w", "1w", "This Week"];

/// Training status derived from the ACWR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcwrStatus {
    /// No ratio could be computed.
    NoData,
    /// ACWR < 0.8
    Detraining,
    /// ACWR 0.8 - 1.3
    Productive,
    /// ACWR 1.3 - 1.6
    HighLoad,
    /// ACWR > 1.6
    Overreaching,
}

impl AcwrStatus {
    /// Classify a ratio. Upper bounds are inclusive.
    pub fn from_ratio(ratio: Option<f64>) -> Self {
        match ratio {
            None => AcwrStatus::NoData,
            Some(r) if r < 0.8 => AcwrStatus::Detraining,
            Some(r) if r <= 1.3 => AcwrStatus::Productive,
            Some(r) if r <= 1.6 => AcwrStatus::HighLoad,
            Some(_) => AcwrStatus::Overreaching,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            AcwrStatus::NoData => "No Data",
            AcwrStatus::Detraining => "Detraining",
            AcwrStatus::Productive => "Productive",
            AcwrStatus::HighLoad => "High Load",
            AcwrStatus::Overreaching => "Overreaching",
        }
    }
}

impl std::fmt::Display for AcwrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coaching hint for a ratio.
///
/// The spike threshold (1.5) sits inside the "High Load" status band
/// rather than on one of its edges.
pub fn insight(ratio: Option<f64>) -> &'static str {
    match ratio {
        None => "Log more runs to generate insight.",
        Some(r) if r > 1.5 => "Load spike detected. Prioritize recovery.",
        Some(r) if r < 0.8 => "Training load low. Gradually increase volume.",
        Some(_) => "Balanced training load. Stay consistent.",
    }
}

/// Acute:Chronic Workload Ratio result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acwr {
    /// Minutes in the acute window.
    pub acute: f64,
    /// Average weekly minutes over the chronic window.
    pub chronic: f64,
    /// acute / chronic, `None` without a chronic base.
    pub ratio: Option<f64>,
    /// Status classification.
    pub status: AcwrStatus,
}

impl Acwr {
    /// Coaching hint for this result.
    pub fn insight(&self) -> &'static str {
        insight(self.ratio)
    }
}

/// Minutes logged in one weekly bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    /// Bucket label ("4w" .. "This Week")
    pub label: String,
    /// Rounded minutes
    pub minutes: u64,
}

/// Training load calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingLoadCalculator {
    /// Acute window (default: 7 days).
    acute_days: i64,
    /// Chronic window (default: 28 days).
    chronic_days: i64,
    /// Rolling window (default: 7 runs).
    rolling_window: usize,
}

impl TrainingLoadCalculator {
    /// Create with default windows (7 days / 28 days / 7 runs).
    pub fn new() -> Self {
        Self {
            acute_days: DEFAULT_ACUTE_DAYS,
            chronic_days: DEFAULT_CHRONIC_DAYS,
            rolling_window: DEFAULT_ROLLING_WINDOW,
        }
    }

    /// Create with custom windows. Each window is at least one unit long.
    pub fn with_windows(acute_days: i64, chronic_days: i64, rolling_window: usize) -> Self {
        Self {
            acute_days: acute_days.max(1),
            chronic_days: chronic_days.max(1),
            rolling_window: rolling_window.max(1),
        }
    }

    /// Acute window in days.
    pub fn acute_days(&self) -> i64 {
        self.acute_days
    }

    /// Chronic window in days.
    pub fn chronic_days(&self) -> i64 {
        self.chronic_days
    }

    /// Rolling window in runs.
    pub fn rolling_window(&self) -> usize {
        self.rolling_window
    }

    /// Rolling load per run, in list order.
    ///
    /// The window counts entries, not days: it equals a 7-day load only when
    /// exactly one run is logged per day.
    pub fn rolling_load(&self, runs: &[Run]) -> Vec<SeriesPoint> {
        let valid: Vec<&Run> = runs.iter().filter(|run| run.is_valid()).collect();
        let minutes: Vec<f64> = valid.iter().map(|run| run.duration_minutes()).collect();

        rolling_sum(&minutes, self.rolling_window)
            .into_iter()
            .zip(valid)
            .map(|(load, run)| SeriesPoint::new(run.date, load))
            .collect()
    }

    /// Acute:chronic workload ratio as of `today`.
    pub fn acwr(&self, runs: &[Run], today: NaiveDate) -> Acwr {
        let acute = self.minutes_within(runs, today, self.acute_days);
        let chronic_weeks = self.chronic_days as f64 / self.acute_days as f64;
        let chronic = self.minutes_within(runs, today, self.chronic_days) / chronic_weeks;

        let ratio = if runs.is_empty() || chronic == 0.0 {
            None
        } else {
            Some(acute / chronic)
        };

        Acwr {
            acute,
            chronic,
            ratio,
            status: AcwrStatus::from_ratio(ratio),
        }
    }

    /// Minutes per week for the last five weeks, oldest first.
    ///
    /// Week `i` (4 down to 0) covers `[today - 7i, today - 7(i-1))`, so the
    /// last bucket starts today.
    pub fn weekly_loads(&self, runs: &[Run], today: NaiveDate) -> [WeeklyLoad; 5] {
        std::array::from_fn(|slot| {
            let weeks_back = (WEEKLY_LOAD_LABELS.len() - 1 - slot) as i64;
            let start = today - Duration::days(7 * weeks_back);
            let end = today - Duration::days(7 * (weeks_back - 1));

            let minutes: f64 = runs
                .iter()
                .filter(|run| run.is_valid() && run.date >= start && run.date < end)
                .map(Run::duration_minutes)
                .sum();

            WeeklyLoad {
                label: WEEKLY_LOAD_LABELS[slot].to_string(),
                minutes: minutes.round() as u64,
            }
        })
    }

    /// Sum of minutes for runs at most `days` days before `today`.
    ///
    /// Runs dated after `today` fall inside every window.
    fn minutes_within(&self, runs: &[Run], today: NaiveDate, days: i64) -> f64 {
        runs.iter()
            .filter(|run| run.is_valid() && (today - run.date).num_days() <= days)
            .map(Run::duration_minutes)
            .sum()
    }
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing sum over up to `window` entries ending at each index.
pub fn rolling_sum(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            values[start..=i].iter().sum()
        })
        .collect()
}
