//! Run record types.
//!
//! A run arrives from the running-log server as
//! `{"id": 7, "date": "2024-01-01", "distance": 3.1, "duration": "27:30"}`.
//! Duration may be decimal minutes, a `"M:SS"` string, or missing entirely.

use crate::metrics::time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Elapsed time of a run as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunDuration {
    /// Decimal minutes.
    Minutes(f64),
    /// Text form, either decimal minutes (`"32.5"`) or `"M:SS"`.
    Text(String),
}

impl RunDuration {
    /// Normalize to decimal minutes. Unparseable text yields 0.
    pub fn minutes(&self) -> f64 {
        match self {
            RunDuration::Minutes(minutes) => *minutes,
            RunDuration::Text(text) => time::parse_minutes(text),
        }
    }
}

impl From<f64> for RunDuration {
    fn from(minutes: f64) -> Self {
        RunDuration::Minutes(minutes)
    }
}

impl From<&str> for RunDuration {
    fn from(text: &str) -> Self {
        RunDuration::Text(text.to_string())
    }
}

impl From<String> for RunDuration {
    fn from(text: String) -> Self {
        RunDuration::Text(text)
    }
}

/// A single logged run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Server-side identifier (opaque to analytics)
    #[serde(default)]
    pub id: Option<i64>,
    /// Calendar date of the run
    pub date: NaiveDate,
    /// Distance in miles
    #[serde(default)]
    pub distance: Option<f64>,
    /// Elapsed time
    #[serde(default)]
    pub duration: Option<RunDuration>,
    /// Runner display name, used by the leaderboard
    #[serde(
        default,
        alias = "user",
        alias = "created_by",
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
}

impl Run {
    /// Create a run without an id or username.
    pub fn new(date: NaiveDate, distance: f64, duration: impl Into<RunDuration>) -> Self {
        Self {
            id: None,
            date,
            distance: Some(distance),
            duration: Some(duration.into()),
            username: None,
        }
    }

    /// Set the server-side identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the runner display name.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Distance in miles, 0 when missing.
    pub fn distance_miles(&self) -> f64 {
        self.distance.unwrap_or(0.0)
    }

    /// Duration in decimal minutes, 0 when missing.
    pub fn duration_minutes(&self) -> f64 {
        time::to_minutes(self.duration.as_ref())
    }

    /// Whether the run may take part in load and pace calculations.
    ///
    /// Requires a positive distance and a finite, non-negative duration.
    pub fn is_valid(&self) -> bool {
        let distance = self.distance_miles();
        let minutes = self.duration_minutes();
        distance.is_finite() && distance > 0.0 && minutes.is_finite() && minutes >= 0.0
    }
}
