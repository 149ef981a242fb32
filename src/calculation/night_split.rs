//! Day/night minute classification and break allocation.
//!
//! This module splits a shift into minutes inside and outside the night
//! window, then takes the unpaid break out of those two buckets according
//! to the configured [`BreakAllocation`] policy.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::config::{BreakAllocation, NightWindow};
use crate::models::MinuteSplit;

const HOURS_PER_DAY: u32 = 24;

/// Classifies every whole minute of `[start, end)` as day or night.
///
/// Minute `k` starts at `start + k` minutes and is a night minute when its
/// hour falls in the night window. A trailing partial minute counts as a
/// whole one.
///
/// Every run of 24 hours holds the same number of night minutes, so whole
/// days are counted directly and only the remainder is walked.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::classify_minutes;
/// use shift_earnings::config::NightWindow;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-05-01 21:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-05-01 23:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let split = classify_minutes(start, end, &NightWindow::default());
/// assert_eq!(split.day_minutes, 60);
/// assert_eq!(split.night_minutes, 60);
/// ```
pub fn classify_minutes(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window: &NightWindow,
) -> MinuteSplit {
    let full_days = (end - start).num_days().max(0);
    let night_hours = (0..HOURS_PER_DAY)
        .filter(|&hour| window.contains_hour(hour))
        .count() as i64;

    let mut split = MinuteSplit {
        day_minutes: full_days * (i64::from(HOURS_PER_DAY) - night_hours) * 60,
        night_minutes: full_days * night_hours * 60,
    };

    // Stays at or before `end`, which is itself representable.
    let mut current = start
        .checked_add_signed(Duration::days(full_days))
        .unwrap_or(end);

    while current < end {
        if window.contains_hour(current.hour()) {
            split.night_minutes += 1;
        } else {
            split.day_minutes += 1;
        }
        // Past the last representable minute means past `end`.
        let Some(next) = current.checked_add_signed(Duration::minutes(1)) else {
            break;
        };
        current = next;
    }

    split
}

/// Takes an unpaid break out of a day/night split.
///
/// The break is charged to the larger bucket; on a tie the night bucket is
/// charged. A break strictly smaller than that bucket is simply subtracted.
/// Otherwise the bucket is emptied and the other bucket absorbs:
///
/// - [`BreakAllocation::Carryover`]: what is left of the break,
/// - [`BreakAllocation::Legacy`]: the whole break.
///
/// Under `Legacy` the other bucket can go negative.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::allocate_break;
/// use shift_earnings::config::BreakAllocation;
/// use shift_earnings::models::MinuteSplit;
///
/// let split = MinuteSplit { day_minutes: 100, night_minutes: 50 };
///
/// let carry = allocate_break(split, 120, BreakAllocation::Carryover);
/// assert_eq!(carry, MinuteSplit { day_minutes: 0, night_minutes: 30 });
///
/// let legacy = allocate_break(split, 120, BreakAllocation::Legacy);
/// assert_eq!(legacy, MinuteSplit { day_minutes: 0, night_minutes: -70 });
/// ```
pub fn allocate_break(split: MinuteSplit, break_minutes: i64, policy: BreakAllocation) -> MinuteSplit {
    if break_minutes <= 0 {
        return split;
    }

    let MinuteSplit {
        mut day_minutes,
        mut night_minutes,
    } = split;

    if day_minutes > night_minutes {
        charge_break(&mut day_minutes, &mut night_minutes, break_minutes, policy);
    } else {
        charge_break(&mut night_minutes, &mut day_minutes, break_minutes, policy);
    }

    MinuteSplit {
        day_minutes,
        night_minutes,
    }
}

fn charge_break(larger: &mut i64, other: &mut i64, break_minutes: i64, policy: BreakAllocation) {
    if break_minutes < *larger {
        *larger -= break_minutes;
        return;
    }

    let spill = match policy {
        BreakAllocation::Carryover => break_minutes - *larger,
        BreakAllocation::Legacy => break_minutes,
    };
    *larger = 0;
    *other -= spill;
}
