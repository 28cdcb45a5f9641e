//! RunLog - Training analytics for a personal running log
//!
//! Turns the list of logged runs served by the running-log backend into the
//! values its views display: pace and time formatting, rolling training load,
//! acute:chronic workload ratio, weekly load buckets, streaks, leaderboards
//! and calendar months.

pub mod calendar;
pub mod leaderboard;
pub mod metrics;
pub mod report;
pub mod runs;
pub mod storage;

// Re-export commonly used types
pub use calendar::CalendarMonth;
pub use metrics::analytics::{AnalyticsSummary, TrainingLoadCalculator};
pub use runs::{Run, RunDuration};
pub use storage::config::AppConfig;
