//! Plain-text report of the running log.
//!
//! Renders the same views the web dashboard shows: the home table, the
//! leaderboards, a month calendar, the analytics panel and run details.

use crate::calendar::{MonthGrid, WEEKDAY_HEADERS};
use crate::leaderboard::LeaderboardSection;
use crate::metrics::analytics::AnalyticsSummary;
use crate::metrics::pace::{pace, pace_minutes, Split};
use crate::metrics::time::to_mmss;
use crate::runs::Run;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// One row of the home table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeRow {
    /// Server id of the run, if known
    pub id: Option<i64>,
    /// Date of the run
    pub date: NaiveDate,
    /// Distance in miles
    pub distance: f64,
    /// Duration as M:SS
    pub duration: String,
    /// Pace as M:SS per mile
    pub pace: String,
}

/// Home table rows in list order.
pub fn home_rows(runs: &[Run]) -> Vec<HomeRow> {
    runs.iter()
        .map(|run| {
            let minutes = run.duration_minutes();
            HomeRow {
                id: run.id,
                date: run.date,
                distance: run.distance_miles(),
                duration: to_mmss(minutes),
                pace: pace(run.distance_miles(), minutes),
            }
        })
        .collect()
}

/// Write the home table.
pub fn write_home_table(out: &mut impl Write, rows: &[HomeRow]) -> fmt::Result {
    writeln!(out, "{:<6} {:<10} {:>8} {:>9} {:>7}", "ID", "Date", "Miles", "Time", "Pace")?;
    for row in rows {
        writeln!(
            out,
            "{:<6} {:<10} {:>8.2} {:>9} {:>7}",
            row.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
            row.date,
            row.distance,
            row.duration,
            row.pace
        )?;
    }
    Ok(())
}

/// Write the leaderboards, at most `rows` entries per distance.
pub fn write_leaderboard(
    out: &mut impl Write,
    sections: &[LeaderboardSection],
    selected: Option<f64>,
    rows: usize,
) -> fmt::Result {
    if sections.is_empty() {
        let message = if selected.is_some() {
            "No runs for this distance yet."
        } else {
            "No runs recorded yet."
        };
        return writeln!(out, "{}", message);
    }

    for section in sections {
        writeln!(out, "{}", section.title())?;
        writeln!(out, "{:<5} {:<16} {:>8} {:<10}", "Rank", "User", "Time", "Date")?;
        for entry in section.top(rows) {
            writeln!(
                out,
                "{:<5} {:<16} {:>8} {:<10}",
                entry.rank, entry.user_name, entry.time, entry.date
            )?;
        }
    }
    Ok(())
}

/// Write a month grid. Run days are marked with `*`, today with brackets.
pub fn write_calendar(out: &mut impl Write, grid: &MonthGrid) -> fmt::Result {
    writeln!(out, "{}", grid.title)?;
    for header in WEEKDAY_HEADERS {
        write!(out, "{:>5}", header)?;
    }
    writeln!(out)?;

    let mut column = grid.leading_blanks as usize;
    for _ in 0..column {
        write!(out, "{:>5}", "")?;
    }

    for cell in &grid.days {
        let mark = if cell.has_run { "*" } else { "" };
        let label = if cell.is_today {
            format!("[{}{}]", cell.day, mark)
        } else {
            format!("{}{}", cell.day, mark)
        };
        write!(out, "{:>5}", label)?;

        column += 1;
        if column % 7 == 0 {
            writeln!(out)?;
        }
    }
    if column % 7 != 0 {
        writeln!(out)?;
    }
    Ok(())
}

/// Write the analytics panel.
pub fn write_summary(out: &mut impl Write, summary: &AnalyticsSummary) -> fmt::Result {
    let weeks = summary.weekly_streak;
    writeln!(
        out,
        "Weekly Streak: {} week{}",
        weeks,
        if weeks == 1 { "" } else { "s" }
    )?;
    writeln!(out, "Longest Streak: {} days", summary.longest_streak)?;
    writeln!(out, "Training Status: {}", summary.acwr.status)?;
    writeln!(out, "Insight: {}", summary.insight)?;
    match summary.acwr.ratio {
        Some(ratio) => writeln!(
            out,
            "ACWR: {:.2} (acute {:.0} min, chronic {:.0} min/week)",
            ratio, summary.acwr.acute, summary.acwr.chronic
        )?,
        None => writeln!(out, "ACWR: -")?,
    }

    write!(out, "Weekly Load:")?;
    for week in &summary.weekly_loads {
        write!(out, " {}={}", week.label, week.minutes)?;
    }
    writeln!(out)?;

    if let (Some(first), Some(last)) = (summary.rolling_load.first(), summary.rolling_load.last()) {
        writeln!(
            out,
            "Rolling Load: {} points, {} .. {}, latest {:.0} min",
            summary.rolling_load.len(),
            first.date,
            last.date,
            last.value
        )?;
    }
    Ok(())
}

/// Write the detail view of one run with its even splits.
pub fn write_run_detail(out: &mut impl Write, run: &Run, splits: &[Split]) -> fmt::Result {
    let minutes = run.duration_minutes();
    writeln!(
        out,
        "Run on {}: {:.2} mi in {}",
        run.date,
        run.distance_miles(),
        to_mmss(minutes)
    )?;
    let average = pace_minutes(run.distance_miles(), minutes).unwrap_or(0.0);
    writeln!(out, "Average Pace: {} / mile", to_mmss(average))?;
    for split in splits {
        writeln!(out, "  {:<8} {}", split.label, to_mmss(split.pace))?;
    }
    Ok(())
}
