//! Month calendar view with run days highlighted.
//!
//! The displayed month is a plain value: navigation returns a new
//! `CalendarMonth` instead of mutating shared state.

use crate::runs::Run;
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MonthFields")]
pub struct CalendarMonth {
    /// Calendar year
    year: i32,
    /// Month number (1-12)
    month: u32,
}

/// Serialized form of `CalendarMonth`, checked on the way in.
#[derive(Deserialize)]
struct MonthFields {
    year: i32,
    month: u32,
}

impl TryFrom<MonthFields> for CalendarMonth {
    type Error = String;

    fn try_from(fields: MonthFields) -> Result<Self, Self::Error> {
        CalendarMonth::new(fields.year, fields.month)
            .ok_or_else(|| format!("invalid month {}-{}", fields.year, fields.month))
    }
}

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month (1-31)
    pub day: u32,
    /// At least one run logged on this day
    pub has_run: bool,
    /// This day is the reference date
    pub is_today: bool,
}

/// Grid layout of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// Title, e.g. "October 2026"
    pub title: String,
    /// Empty cells before the 1st (Sunday = 0)
    pub leading_blanks: u32,
    /// One cell per day of the month
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Create a month, `None` if `month` is not 1-12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        (next - self.first_day()).num_days() as u32
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Display title, e.g. "October 2026".
    pub fn title(&self) -> String {
        let name = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name());
        format!("{} {}", name, self.year)
    }

    /// Lay out the month, flagging run days and `today`.
    pub fn grid(&self, runs: &[Run], today: NaiveDate) -> MonthGrid {
        let run_days: HashSet<u32> = runs
            .iter()
            .filter(|run| self.contains(run.date))
            .map(|run| run.date.day())
            .collect();

        let today_day = self.contains(today).then(|| today.day());

        let days = (1..=self.days_in_month())
            .map(|day| CalendarDay {
                day,
                has_run: run_days.contains(&day),
                is_today: today_day == Some(day),
            })
            .collect();

        MonthGrid {
            title: self.title(),
            leading_blanks: self.first_day().weekday().num_days_from_sunday(),
            days,
        }
    }
}
