//! Unit tests for leaderboard building

use chrono::NaiveDate;
use runlog::leaderboard::{build_leaderboard, UNKNOWN_RUNNER};
use runlog::runs::Run;

fn run(day: u32, distance: f64, duration: &str) -> Run {
    Run::new(NaiveDate::from_ymd_opt(2024, 7, day).unwrap(), distance, duration)
}

/// Ties keep list order and get consecutive ranks
#[test]
fn test_equal_times_keep_order() {
    let runs = vec![
        run(1, 1.0, "7:00").with_username("first"),
        run(2, 1.0, "7:00").with_username("second"),
        run(3, 1.0, "6:59").with_username("fastest"),
    ];

    let board = build_leaderboard(&runs, None);
    let names: Vec<&str> = board[0].entries.iter().map(|e| e.user_name.as_str()).collect();
    let ranks: Vec<u32> = board[0].entries.iter().map(|e| e.rank).collect();

    assert_eq!(names, vec!["fastest", "first", "second"]);
    assert_eq!(ranks, vec![1, 2, 3]);
}

/// Times are rounded to whole seconds
#[test]
fn test_time_rounded_to_seconds() {
    let runs = vec![Run::new(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), 1.0, 7.509)];

    let board = build_leaderboard(&runs, None);
    let entry = &board[0].entries[0];
    assert_eq!(entry.time_seconds, 451.0);
    assert_eq!(entry.time, "7:31");
    assert_eq!(entry.user_name, UNKNOWN_RUNNER);
}

/// Selecting a distance yields a single section
#[test]
fn test_selected_distance() {
    let runs = vec![run(1, 1.0, "7:00"), run(2, 3.1, "25:00"), run(3, 6.2, "55:00")];

    let board = build_leaderboard(&runs, Some(3.1));
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].distance, 3.1);
    assert_eq!(board[0].entries.len(), 1);
}

/// Runs without a duration never outrank real times
#[test]
fn test_missing_duration_left_off() {
    let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
    let mut missing = Run::new(day, 3.1, "").with_username("nodur");
    missing.duration = None;
    let runs = vec![
        missing,
        run(5, 3.1, "junk").with_username("garbled"),
        run(6, 3.1, "25:00").with_username("real"),
    ];

    let board = build_leaderboard(&runs, None);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].entries.len(), 1);
    assert_eq!(board[0].entries[0].user_name, "real");
    assert_eq!(board[0].entries[0].rank, 1);
    assert_eq!(board[0].entries[0].time, "25:00");
}

/// A distance whose only runs lack a duration gets no section
#[test]
fn test_no_section_without_rankable_runs() {
    let runs = vec![run(1, 6.2, ""), run(2, 3.1, "25:00")];

    let board = build_leaderboard(&runs, None);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].distance, 3.1);
    assert!(build_leaderboard(&runs, Some(6.2)).is_empty());
}
