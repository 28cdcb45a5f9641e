//! Consistency streaks.

use crate::runs::{sorted_by_date, Run};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

/// Number of distinct ISO weeks containing at least one run.
///
/// This is a count of active weeks, not a run of consecutive weeks.
pub fn weekly_streak(runs: &[Run]) -> usize {
    runs.iter()
        .map(|run| {
            let week = run.date.iso_week();
            (week.year(), week.week())
        })
        .collect::<HashSet<_>>()
        .len()
}

/// Longest run of back-to-back calendar days with a logged run.
///
/// Runs are walked in date order; a second run on the same day breaks the
/// streak just like a gap does.
pub fn longest_streak(runs: &[Run]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    for run in sorted_by_date(runs) {
        current = match previous {
            Some(prev) if (run.date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(run.date);
    }

    longest
}
