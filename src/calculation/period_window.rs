//! Closing-day and pay-day window calculation.
//!
//! Given a reference date and a boundary day of month, this module finds
//! the billing period the date falls into. Boundary days past the end of a
//! short month are clamped to that month's last day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::PayPeriod;

/// Number of days in the given month.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 2), 28);
/// assert_eq!(days_in_month(2024, 4), 30);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn day_start(year: i32, month: u32, day: u32) -> EngineResult<NaiveDateTime> {
    at(year, month, day, NaiveTime::MIN)
}

fn day_end(year: i32, month: u32, day: u32) -> EngineResult<NaiveDateTime> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).ok_or_else(|| {
        EngineError::CalculationError {
            message: "23:59:59 is not a valid time".to_string(),
        }
    })?;
    at(year, month, day, last_second)
}

fn at(year: i32, month: u32, day: u32, time: NaiveTime) -> EngineResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.and_time(time))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{:04}-{:02}-{:02} is not a valid date", year, month, day),
        })
}

/// Finds the billing period that `reference` falls into.
///
/// The period ends on `boundary_day` at 23:59:59 and starts the day after
/// the previous boundary at 00:00:00. When the reference day is on or
/// before the boundary, the period ends this month; otherwise it starts
/// this month and ends next month. A boundary past the end of a month is
/// clamped to that month's last day. When the day after the boundary does
/// not exist in the previous month, the period starts on the 1st of the
/// reference month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] if `boundary_day` is not
/// within 1..=31.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::window_for;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
/// let period = window_for(reference, 31).unwrap();
///
/// assert_eq!(period.start.to_string(), "2024-02-01 00:00:00");
/// assert_eq!(period.end.to_string(), "2024-02-29 23:59:59");
/// ```
pub fn window_for(reference: NaiveDate, boundary_day: u32) -> EngineResult<PayPeriod> {
    if !(1..=31).contains(&boundary_day) {
        return Err(EngineError::InvalidConfiguration {
            field: "boundary_day".to_string(),
            message: format!("must be between 1 and 31, got {}", boundary_day),
        });
    }

    let year = reference.year();
    let month = reference.month();
    let last_day_this_month = days_in_month(year, month);

    if reference.day() <= boundary_day {
        let end = day_end(year, month, boundary_day.min(last_day_this_month))?;

        let (prev_year, prev_month) = previous_month(year, month);
        let start = if boundary_day + 1 > days_in_month(prev_year, prev_month) {
            day_start(year, month, 1)?
        } else {
            day_start(prev_year, prev_month, boundary_day + 1)?
        };

        Ok(PayPeriod { start, end })
    } else {
        let start = day_start(year, month, (boundary_day + 1).min(last_day_this_month))?;

        let (next_year, next_month) = next_month(year, month);
        let end = day_end(
            next_year,
            next_month,
            boundary_day.min(days_in_month(next_year, next_month)),
        )?;

        Ok(PayPeriod { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn assert_window(reference: NaiveDate, boundary_day: u32, start: &str, end: &str) {
        let period = window_for(reference, boundary_day).unwrap();
        assert_eq!(
            period.start,
            make_datetime(start),
            "start for {} / {}",
            reference,
            boundary_day
        );
        assert_eq!(
            period.end,
            make_datetime(end),
            "end for {} / {}",
            reference,
            boundary_day
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 6), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_mid_month_boundary_crosses_year_backwards() {
        assert_window(
            date(2024, 1, 10),
            15,
            "2023-12-16 00:00:00",
            "2024-01-15 23:59:59",
        );
    }

    #[test]
    fn test_mid_month_boundary_after_reference_day() {
        assert_window(
            date(2024, 1, 20),
            15,
            "2024-01-16 00:00:00",
            "2024-02-15 23:59:59",
        );
    }

    #[test]
    fn test_reference_on_boundary_day_ends_this_month() {
        assert_window(
            date(2024, 3, 15),
            15,
            "2024-02-16 00:00:00",
            "2024-03-15 23:59:59",
        );
    }

    #[test]
    fn test_end_of_month_boundary_in_leap_february() {
        assert_window(
            date(2024, 2, 5),
            31,
            "2024-02-01 00:00:00",
            "2024-02-29 23:59:59",
        );
    }

    #[test]
    fn test_end_of_month_boundary_in_january() {
        assert_window(
            date(2024, 1, 10),
            31,
            "2024-01-01 00:00:00",
            "2024-01-31 23:59:59",
        );
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        assert_window(
            date(2023, 12, 20),
            10,
            "2023-12-11 00:00:00",
            "2024-01-10 23:59:59",
        );
    }

    #[test]
    fn test_boundary_clamped_in_next_month() {
        // 30th of January with boundary 29: ends on the last day of February.
        assert_window(
            date(2023, 1, 30),
            29,
            "2023-01-30 00:00:00",
            "2023-02-28 23:59:59",
        );
        assert_window(
            date(2024, 1, 30),
            29,
            "2024-01-30 00:00:00",
            "2024-02-29 23:59:59",
        );
    }

    #[test]
    fn test_thirty_day_month_with_boundary_31() {
        assert_window(
            date(2024, 4, 30),
            31,
            "2024-04-01 00:00:00",
            "2024-04-30 23:59:59",
        );
    }

    #[test]
    fn test_march_after_short_february() {
        // February has no 30th, so the period starts on March 1st.
        assert_window(
            date(2023, 3, 10),
            29,
            "2023-03-01 00:00:00",
            "2023-03-29 23:59:59",
        );
        // In a leap year February 29th exists, so the 30th does not.
        assert_window(
            date(2024, 3, 10),
            29,
            "2024-03-01 00:00:00",
            "2024-03-29 23:59:59",
        );
        assert_window(
            date(2024, 3, 10),
            28,
            "2024-02-29 00:00:00",
            "2024-03-28 23:59:59",
        );
        assert_window(
            date(2023, 3, 10),
            28,
            "2023-03-01 00:00:00",
            "2023-03-28 23:59:59",
        );
    }

    #[test]
    fn test_late_boundaries_across_february() {
        for year in [2023, 2024] {
            let feb_days = days_in_month(year, 2);
            for boundary in 28..=31 {
                let reference = date(year, 2, 10);
                let period = window_for(reference, boundary).unwrap();

                assert_eq!(period.end.date(), date(year, 2, boundary.min(feb_days)));
                assert_eq!(period.end.time(), NaiveTime::from_hms_opt(23, 59, 59).unwrap());
                assert_eq!(period.start.time(), NaiveTime::MIN);
                // January has 31 days: boundary + 1 exists only below 31.
                let expected_start = if boundary + 1 > 31 {
                    date(year, 2, 1)
                } else {
                    date(year, 1, boundary + 1)
                };
                assert_eq!(period.start.date(), expected_start);
            }
        }
    }

    #[test]
    fn test_reference_always_inside_window() {
        let mut reference = date(2023, 1, 1);
        let last = date(2025, 1, 1);
        while reference < last {
            for boundary in 1..=31 {
                let period = window_for(reference, boundary).unwrap();
                let noon = reference.and_hms_opt(12, 0, 0).unwrap();
                assert!(
                    period.contains(noon),
                    "{} not in window for boundary {}: {:?}",
                    reference,
                    boundary,
                    period
                );
                assert!(period.start < period.end);
            }
            reference = reference.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_rejects_out_of_range_boundary() {
        for boundary in [0, 32, 100] {
            let result = window_for(date(2024, 5, 1), boundary);
            assert!(matches!(
                result,
                Err(EngineError::InvalidConfiguration { ref field, .. }) if field == "boundary_day"
            ));
        }
    }
}
