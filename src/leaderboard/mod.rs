//! Per-distance leaderboards of fastest times.

use crate::metrics::time::to_clock_string;
use crate::runs::{distance_options, filter_by_distance, Run};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Name shown when a run carries no username.
pub const UNKNOWN_RUNNER: &str = "Unknown";

/// Leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Rank on leaderboard (1-indexed)
    pub rank: u32,
    /// Display name
    pub user_name: String,
    /// Time in seconds
    pub time_seconds: f64,
    /// Time formatted as M:SS
    pub time: String,
    /// Date of the run
    pub date: NaiveDate,
}

/// Leaderboard for one distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSection {
    /// Distance in miles
    pub distance: f64,
    /// Entries, fastest first
    pub entries: Vec<LeaderboardEntry>,
}

impl LeaderboardSection {
    /// Section title, e.g. "3.1 Leaderboard".
    pub fn title(&self) -> String {
        format!("{} Leaderboard", self.distance)
    }

    /// Get top N entries
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        let end = n.min(self.entries.len());
        &self.entries[..end]
    }
}

/// Build leaderboards, one section per distance in ascending order.
///
/// With a selected distance only that section is produced. Entries are
/// ordered by elapsed time; equal times keep their list order. Runs without
/// a usable distance or a positive duration are left off the board.
pub fn build_leaderboard(runs: &[Run], selected: Option<f64>) -> Vec<LeaderboardSection> {
    let candidates: Vec<Run> = filter_by_distance(runs, selected)
        .into_iter()
        .filter(|run| run.is_valid() && run.duration_minutes() > 0.0)
        .collect();

    distance_options(&candidates)
        .into_iter()
        .map(|distance| section_for(&candidates, distance))
        .collect()
}

fn section_for(runs: &[Run], distance: f64) -> LeaderboardSection {
    let mut entries: Vec<LeaderboardEntry> = runs
        .iter()
        .filter(|run| run.distance == Some(distance))
        .map(|run| {
            let time_seconds = (run.duration_minutes() * 60.0).round();
            LeaderboardEntry {
                rank: 0, // Assigned after sorting
                user_name: run
                    .username
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_RUNNER.to_string()),
                time_seconds,
                time: to_clock_string(time_seconds),
                date: run.date,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
    }

    LeaderboardSection { distance, entries }
}
