//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type returned by the period
//! window calculation.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// A closed billing interval, from 00:00:00 on its first day to 23:59:59
/// on its last day.
///
/// # Example
///
/// ```
/// use shift_earnings::models::PayPeriod;
/// use chrono::NaiveDateTime;
///
/// let period = PayPeriod {
///     start: NaiveDateTime::parse_from_str("2023-12-16 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2024-01-15 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap(),
/// };
///
/// let now = NaiveDateTime::parse_from_str("2024-01-10 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(period.contains(now));
/// assert_eq!(period.days_until_end(now), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first instant of the period (inclusive).
    pub start: NaiveDateTime,
    /// The last second of the period (inclusive).
    pub end: NaiveDateTime,
}

impl PayPeriod {
    /// Checks if a timestamp falls within this period, inclusive of both ends.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }

    /// Whole days from `now` until the end of the period, rounded down.
    ///
    /// A period ending later today yields 0.
    pub fn days_until_end(&self, now: NaiveDateTime) -> i64 {
        (self.end - now).num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// The length of the period.
    pub fn length(&self) -> Duration {
        self.end - self.start
    }
}
