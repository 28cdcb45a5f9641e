//! Unit tests for time and pace formatting

use runlog::metrics::{pace, to_clock_string, to_minutes, to_mmss};
use runlog::runs::RunDuration;

/// Missing durations resolve to zero
#[test]
fn test_to_minutes_missing() {
    assert_eq!(to_minutes(None), 0.0);
    assert_eq!(to_minutes(Some(&RunDuration::from(""))), 0.0);
}

/// Numeric durations pass through untouched
#[test]
fn test_to_minutes_numeric() {
    assert_eq!(to_minutes(Some(&RunDuration::Minutes(42.75))), 42.75);
}

/// "M:SS" text is converted to decimal minutes
#[test]
fn test_to_minutes_clock_text() {
    let minutes = to_minutes(Some(&RunDuration::from("27:45")));
    assert!((minutes - 27.75).abs() < 1e-9);
}

/// Formatting followed by parsing recovers the value within one second
#[test]
fn test_mmss_round_trip() {
    let mut x = 0.0;
    while x < 120.0 {
        let back = to_minutes(Some(&RunDuration::from(to_mmss(x))));
        assert!((back - x).abs() <= 1.0 / 60.0, "{} -> {}", x, back);
        x += 0.37;
    }
}

/// Leaderboard times are given in seconds
#[test]
fn test_clock_string_uses_seconds() {
    assert_eq!(to_clock_string(90.0), "1:30");
    assert_eq!(to_mmss(90.0), "90:00");
}

/// Undefined pace falls back to the sentinel
#[test]
fn test_pace_sentinel() {
    for d in [0.5, 3.0, 26.2] {
        assert_eq!(pace(0.0, d), "0:00");
        assert_eq!(pace(d, 0.0), "0:00");
    }
    assert_eq!(pace(26.2, 240.0), "9:10");
}
