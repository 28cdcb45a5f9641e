//! Training analytics over a run list.
//!
//! This module provides:
//! - Training Load (rolling load, ACWR, weekly buckets)
//! - Consistency streaks (active ISO weeks, consecutive days)
//! - Per-run chart series (pace, VO2 estimate, predicted pace)
//! - A combined summary for the analytics view
//!
//! Every function is pure: the reference date is passed in and the run list
//! is never modified.

pub mod series;
pub mod streaks;
pub mod summary;
pub mod training_load;

// Re-exports for convenience
pub use series::{pace_series, predicted_pace_series, vo2_series, SeriesPoint};
pub use streaks::{longest_streak, weekly_streak};
pub use summary::AnalyticsSummary;
pub use training_load::{
    insight, rolling_sum, Acwr, AcwrStatus, TrainingLoadCalculator, WeeklyLoad,
    WEEKLY_LOAD_LABELS,
};
