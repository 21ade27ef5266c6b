//! Day-count arithmetic between calendar dates

use chrono::NaiveDate;
use serde::Serialize;

/// Whole calendar days from `a` to `b`; negative when `b` precedes `a`
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Elapsed/remaining day counts of a semester relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterTimeline {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub today: NaiveDate,
    /// Days from start to end
    pub total_days: i64,
    /// Days from start to today (negative before the semester begins)
    pub days_elapsed: i64,
    /// Days from today to end (negative once the semester is over)
    pub days_remaining: i64,
    /// Share of the semester already elapsed, unclamped
    pub percent_elapsed: f64,
}

impl SemesterTimeline {
    pub fn new(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        let total_days = days_between(start, end);
        let days_elapsed = days_between(start, today);
        Self {
            start,
            end,
            today,
            total_days,
            days_elapsed,
            days_remaining: days_between(today, end),
            percent_elapsed: super::percentage(days_elapsed as f64, total_days as f64),
        }
    }

    /// Whether today is past the end date
    pub fn is_over(&self) -> bool {
        self.days_remaining < 0
    }
}
