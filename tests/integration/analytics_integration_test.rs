//! Integration tests for the complete analytics pipeline.
//!
//! Tests the end-to-end flow:
//! 1. Parse a runs payload
//! 2. Filter by distance and order by date
//! 3. Compute the analytics summary
//! 4. Build leaderboards and the calendar month

use chrono::{Duration, NaiveDate};
use runlog::calendar::CalendarMonth;
use runlog::leaderboard::build_leaderboard;
use runlog::metrics::analytics::{AcwrStatus, AnalyticsSummary, TrainingLoadCalculator};
use runlog::runs::{filter_by_distance, sorted_by_date, Run};
use runlog::storage::{parse_runs, DistanceUnit};

/// Simulates a training block: a 30-minute run every day, replaced by a long
/// run every seventh day, ending on `end`.
fn simulate_training_block(end: NaiveDate, weeks: i64) -> Vec<Run> {
    (0..weeks * 7)
        .rev()
        .map(|offset| {
            let day = end - Duration::days(offset);
            let run = if offset % 7 == 0 {
                Run::new(day, 10.0, "90:00")
            } else {
                Run::new(day, 3.1, 30.0)
            };
            run.with_id(offset + 1).with_username("ana")
        })
        .collect()
}

#[test]
fn test_full_analytics_pipeline() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let runs = simulate_training_block(today, 6);
    assert!(!runs.is_empty());

    let summary = AnalyticsSummary::compute(&runs, today, &TrainingLoadCalculator::new());

    assert_eq!(summary.run_count, runs.len());
    assert_eq!(summary.excluded_count, 0);
    assert_eq!(summary.rolling_load.len(), runs.len());
    assert_eq!(summary.vo2.len(), runs.len());

    // Uniform weeks give a ratio close to 1
    let ratio = summary.acwr.ratio.expect("ratio defined with recent runs");
    assert!(ratio > 0.8 && ratio < 1.3, "ratio was {}", ratio);
    assert_eq!(summary.acwr.status, AcwrStatus::Productive);

    // 2024-05-20 (Monday) through 2024-06-30 (Sunday)
    assert_eq!(summary.weekly_streak, 6);
    assert_eq!(summary.longest_streak, runs.len());
    assert!(summary.weekly_loads.iter().all(|w| w.minutes > 0));
}

#[test]
fn test_filtered_pipeline() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let runs = simulate_training_block(today, 4);

    let long_runs = sorted_by_date(&filter_by_distance(&runs, Some(10.0)));
    assert_eq!(long_runs.len(), 4);

    let summary = AnalyticsSummary::compute(&long_runs, today, &TrainingLoadCalculator::new());
    assert_eq!(summary.longest_streak, 1);
    assert_eq!(summary.weekly_streak, 4);
    assert!(summary.pace.iter().all(|p| (p.value - 9.0).abs() < 1e-9));

    let board = build_leaderboard(&runs, Some(10.0));
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].entries[0].time, "90:00");
}

#[test]
fn test_payload_to_calendar() {
    let json = r#"[
        {"id": 1, "date": "2024-02-28", "distance": 5000, "duration": "25:00"},
        {"id": 2, "date": "2024-02-29", "distance": 5000, "duration": 24.5},
        {"id": 3, "date": "2024-03-01", "distance": 10000, "duration": null}
    ]"#;
    let runs = parse_runs(json, DistanceUnit::Meters).unwrap();

    let february = CalendarMonth::new(2024, 2).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let grid = february.grid(&runs, today);

    assert_eq!(grid.days.len(), 29);
    assert!(grid.days[27].has_run && grid.days[28].has_run);
    assert!(grid.days.iter().all(|d| !d.is_today));

    let march = february.next().grid(&runs, today);
    assert!(march.days[0].has_run && march.days[0].is_today);

    let summary = AnalyticsSummary::compute(&runs, today, &TrainingLoadCalculator::new());
    // The run without a duration still counts toward the streak
    assert_eq!(summary.longest_streak, 3);
    assert_eq!(summary.excluded_count, 0);
    assert_eq!(summary.pace.len(), 2);
}

#[test]
fn test_summary_serializes() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let runs = simulate_training_block(today, 2);
    let summary = AnalyticsSummary::compute(&runs, today, &TrainingLoadCalculator::new());

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["weekly_loads"].as_array().unwrap().len(), 5);
    assert_eq!(json["weekly_loads"][4]["label"], "This Week");
    assert_eq!(json["today"], "2024-06-30");
}
