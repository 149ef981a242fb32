//! Earnings aggregation over a shift collection.
//!
//! Both functions expect the collection ascending by start time, as
//! returned by [`load_shifts`](crate::models::load_shifts).

use chrono::NaiveDateTime;

use crate::models::Shift;

/// Sums the amounts of shifts ending in `(start, end]`.
///
/// A shift ending exactly at `start` is excluded; one ending exactly at
/// `end` is included. The total saturates at `u64::MAX`.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::sum_in_range;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-05-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-05-31 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(sum_in_range(&[], start, end), 0);
/// ```
pub fn sum_in_range<'a>(
    shifts: impl IntoIterator<Item = &'a Shift>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> u64 {
    shifts
        .into_iter()
        .filter(|shift| start < shift.end && shift.end <= end)
        .map(Shift::amount)
        .fold(0, u64::saturating_add)
}

/// Start of the first shift after `reference`, optionally at one place.
///
/// Returns on the first match.
pub fn next_shift(
    shifts: &[Shift],
    reference: NaiveDateTime,
    place_id: Option<u64>,
) -> Option<NaiveDateTime> {
    shifts
        .iter()
        .find(|shift| shift.start > reference && place_id.is_none_or(|id| shift.place_id == id))
        .map(|shift| shift.start)
}
