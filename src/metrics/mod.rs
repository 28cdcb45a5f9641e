//! Metrics module for run time, pace and training analytics.

pub mod analytics;
pub mod pace;
pub mod time;

pub use pace::{pace, pace_minutes, predicted_pace, synthetic_splits, vo2_estimate, Split};
pub use time::{to_clock_string, to_minutes, to_mmss};

// Re-export key analytics types for convenience
pub use analytics::{
    Acwr, AcwrStatus, AnalyticsSummary, SeriesPoint, TrainingLoadCalculator, WeeklyLoad,
};
