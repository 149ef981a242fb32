//! Shift model and related types.
//!
//! This module defines the [`BreakDuration`], [`ShiftDraft`] and [`Shift`]
//! types. A `Shift` always carries an amount computed from its own times and
//! its employer's terms; there is no way to set the amount directly.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_amount;
use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};

use super::place::PlaceTerms;

/// A break length written as a time of day (`HH:MM`, 00:00 to 23:59).
///
/// Seconds are accepted when parsing (`HH:MM:SS`) but ignored, since
/// breaks are entered in whole minutes.
///
/// # Example
///
/// ```
/// use shift_earnings::models::BreakDuration;
///
/// let lunch: BreakDuration = "01:15".parse().unwrap();
/// assert_eq!(lunch.total_minutes(), 75);
/// assert_eq!(lunch.to_string(), "01:15");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BreakDuration {
    hours: u32,
    minutes: u32,
}

impl BreakDuration {
    /// A zero-length break.
    pub const ZERO: BreakDuration = BreakDuration {
        hours: 0,
        minutes: 0,
    };

    /// Creates a break from hours (0-23) and minutes (0-59).
    pub fn new(hours: u32, minutes: u32) -> EngineResult<Self> {
        if hours > 23 || minutes > 59 {
            return Err(EngineError::InvalidShift {
                shift_id: "break".to_string(),
                message: format!("break must be between 00:00 and 23:59, got {hours}:{minutes:02}"),
            });
        }
        Ok(Self { hours, minutes })
    }

    /// Creates a break from a number of minutes below 24 hours.
    pub fn from_minutes(total: u32) -> EngineResult<Self> {
        Self::new(total / 60, total % 60)
    }

    /// The hour component.
    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The minute component.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// The break length in minutes.
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }

    /// The break length as a [`Duration`].
    pub fn as_duration(&self) -> Duration {
        Duration::minutes(self.total_minutes())
    }
}

impl fmt::Display for BreakDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for BreakDuration {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidShift {
            shift_id: "break".to_string(),
            message: format!("expected HH:MM or HH:MM:SS, got '{}'", s),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let hours = parts[0].parse::<u32>().map_err(|_| invalid())?;
        let minutes = parts[1].parse::<u32>().map_err(|_| invalid())?;
        if let Some(seconds) = parts.get(2) {
            let seconds = seconds.parse::<u32>().map_err(|_| invalid())?;
            if seconds > 59 {
                return Err(invalid());
            }
        }

        Self::new(hours, minutes)
    }
}

impl TryFrom<String> for BreakDuration {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BreakDuration> for String {
    fn from(value: BreakDuration) -> Self {
        value.to_string()
    }
}

/// Checks that a shift interval is well formed.
///
/// The end must come after the start, and the break must be strictly
/// shorter than the time between them.
pub fn validate_interval(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_duration: BreakDuration,
) -> EngineResult<()> {
    if start >= end {
        return Err(EngineError::InvalidInterval { start, end });
    }

    let span = end - start;
    if break_duration.as_duration() >= span {
        return Err(EngineError::InvalidBreak {
            break_minutes: break_duration.total_minutes(),
            span_minutes: span.num_minutes(),
        });
    }

    Ok(())
}

/// A shift as entered by the user, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// The user the shift belongs to.
    pub user_id: u64,
    /// The employer the shift is worked for.
    pub place_id: u64,
    /// The start of the shift.
    pub start: NaiveDateTime,
    /// The end of the shift.
    pub end: NaiveDateTime,
    /// Unpaid break taken during the shift.
    #[serde(default)]
    pub break_duration: BreakDuration,
}

impl ShiftDraft {
    /// Checks the draft's interval and break.
    pub fn validate(&self) -> EngineResult<()> {
        validate_interval(self.start, self.end, self.break_duration)
    }

    /// Returns true if the draft and the given interval share any time.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        end > self.start && start < self.end
    }
}

/// An active shift with its employer's terms flattened onto it.
///
/// # Examples
///
/// ```
/// use shift_earnings::config::PayrollRules;
/// use shift_earnings::models::{BreakDuration, PlaceTerms, Shift, ShiftDraft};
/// use chrono::NaiveDateTime;
///
/// let terms = PlaceTerms {
///     name: "Cafe".to_string(),
///     hourly_wage: 1200,
///     has_night_differential: false,
///     closing_day: 15,
///     pay_day: 25,
/// };
/// let draft = ShiftDraft {
///     user_id: 1,
///     place_id: 7,
///     start: NaiveDateTime::parse_from_str("2024-05-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2024-05-01 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     break_duration: BreakDuration::new(1, 0).unwrap(),
/// };
///
/// let shift = Shift::new(1, &draft, &terms, &PayrollRules::default()).unwrap();
/// assert_eq!(shift.amount(), 8400); // 7 hours x 1200
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: u64,
    /// The user the shift belongs to.
    pub user_id: u64,
    /// The employer the shift is worked for.
    pub place_id: u64,
    /// The employer's display name.
    pub place_name: String,
    /// The start of the shift.
    pub start: NaiveDateTime,
    /// The end of the shift.
    pub end: NaiveDateTime,
    /// Unpaid break taken during the shift.
    pub break_duration: BreakDuration,
    /// The employer's hourly wage.
    pub hourly_wage: u64,
    /// Whether night minutes earn the night differential.
    pub has_night_differential: bool,
    /// The employer's closing day of month.
    pub closing_day: u32,
    /// The employer's pay day of month.
    pub pay_day: u32,
    amount: u64,
}

impl Shift {
    /// Builds a shift from a draft and the employer's terms, computing its amount.
    pub fn new(
        id: u64,
        draft: &ShiftDraft,
        terms: &PlaceTerms,
        rules: &PayrollRules,
    ) -> EngineResult<Self> {
        let breakdown = calculate_amount(
            draft.start,
            draft.end,
            draft.break_duration,
            terms.hourly_wage,
            terms.has_night_differential,
            rules,
        )?;

        Ok(Self {
            id,
            user_id: draft.user_id,
            place_id: draft.place_id,
            place_name: terms.name.clone(),
            start: draft.start,
            end: draft.end,
            break_duration: draft.break_duration,
            hourly_wage: terms.hourly_wage,
            has_night_differential: terms.has_night_differential,
            closing_day: terms.closing_day,
            pay_day: terms.pay_day,
            amount: breakdown.amount,
        })
    }

    /// The expected pay for the shift.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Time worked, excluding the break.
    pub fn worked_duration(&self) -> Duration {
        self.end - self.start - self.break_duration.as_duration()
    }
}
