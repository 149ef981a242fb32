//! Checks and planning for new shifts and places.
//!
//! A single shift is rejected when it overlaps an active shift at the same
//! place. A weekly repeat instead replaces whatever it overlaps.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Place, PlaceDraft, Shift, ShiftDraft};

const DAYS_PER_WEEK: i64 = 7;

/// The most occurrences a weekly repeat may produce (ten years).
pub const MAX_REPEAT_WEEKS: usize = 522;

/// What to write to storage for a registration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegistrationPlan {
    /// Shifts to insert.
    pub insert: Vec<ShiftDraft>,
    /// Ids of existing shifts to soft-delete first.
    pub replace: Vec<u64>,
}

/// Repeats a draft every seven days while its start date is on or before
/// `repeat_until`.
///
/// # Errors
///
/// Returns the draft's validation error, [`EngineError::InvalidRepeat`]
/// if `repeat_until` is before the draft's start date, or
/// [`EngineError::RepeatTooLong`] if the repeat would produce more than
/// [`MAX_REPEAT_WEEKS`] occurrences.
///
/// The repeat also ends early at the last date the calendar can represent.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::weekly_occurrences;
/// use shift_earnings::models::{BreakDuration, ShiftDraft};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let draft = ShiftDraft {
///     user_id: 1,
///     place_id: 1,
///     start: NaiveDateTime::parse_from_str("2024-05-06 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2024-05-06 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     break_duration: BreakDuration::ZERO,
/// };
///
/// let until = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
/// let drafts = weekly_occurrences(&draft, until).unwrap();
/// assert_eq!(drafts.len(), 3);
/// ```
pub fn weekly_occurrences(draft: &ShiftDraft, repeat_until: NaiveDate) -> EngineResult<Vec<ShiftDraft>> {
    draft.validate()?;

    let first = draft.start.date();
    if first > repeat_until {
        return Err(EngineError::InvalidRepeat {
            first,
            until: repeat_until,
        });
    }

    let weeks = (repeat_until - first).num_days() / DAYS_PER_WEEK;
    if weeks >= MAX_REPEAT_WEEKS as i64 {
        return Err(EngineError::RepeatTooLong {
            first,
            until: repeat_until,
            max_weeks: MAX_REPEAT_WEEKS,
        });
    }

    let week = Duration::days(DAYS_PER_WEEK);
    let mut occurrences = Vec::with_capacity(weeks as usize + 1);
    let mut next = Some(draft.clone());
    while let Some(occurrence) = next.take() {
        if occurrence.start.date() > repeat_until {
            break;
        }
        next = occurrence
            .start
            .checked_add_signed(week)
            .zip(occurrence.end.checked_add_signed(week))
            .map(|(start, end)| ShiftDraft {
                start,
                end,
                ..occurrence.clone()
            });
        occurrences.push(occurrence);
    }

    Ok(occurrences)
}

/// Active shifts of the same user and place that share time with `draft`.
pub fn find_overlaps<'a>(existing: &'a [Shift], draft: &ShiftDraft) -> Vec<&'a Shift> {
    existing
        .iter()
        .filter(|shift| {
            shift.user_id == draft.user_id
                && shift.place_id == draft.place_id
                && draft.overlaps(shift.start, shift.end)
        })
        .collect()
}

/// Rejects a draft that overlaps an existing shift.
///
/// # Errors
///
/// Returns [`EngineError::OverlappingShift`] with the number of conflicts.
pub fn check_overlaps(existing: &[Shift], draft: &ShiftDraft) -> EngineResult<()> {
    let overlaps = find_overlaps(existing, draft);
    if overlaps.is_empty() {
        Ok(())
    } else {
        Err(EngineError::OverlappingShift {
            place_id: draft.place_id,
            count: overlaps.len(),
        })
    }
}

/// Plans the registration of a shift, optionally repeated weekly.
///
/// Without `repeat_until` the draft is validated and must not overlap any
/// existing shift. With it, every weekly occurrence is inserted and the
/// existing shifts it overlaps are listed for replacement.
pub fn plan_registration(
    existing: &[Shift],
    draft: &ShiftDraft,
    repeat_until: Option<NaiveDate>,
) -> EngineResult<RegistrationPlan> {
    let Some(until) = repeat_until else {
        draft.validate()?;
        check_overlaps(existing, draft)?;
        return Ok(RegistrationPlan {
            insert: vec![draft.clone()],
            replace: Vec::new(),
        });
    };

    let insert = weekly_occurrences(draft, until)?;
    let mut replace: Vec<u64> = insert
        .iter()
        .flat_map(|occurrence| find_overlaps(existing, occurrence))
        .map(|shift| shift.id)
        .collect();
    replace.sort_unstable();
    replace.dedup();

    debug!(
        place_id = draft.place_id,
        occurrences = insert.len(),
        replaced = replace.len(),
        "Planned weekly registration"
    );

    Ok(RegistrationPlan { insert, replace })
}

/// Validates a new place and checks its name is not already in use.
///
/// Only active places of the same user count.
///
/// # Errors
///
/// Returns the draft's validation error, or [`EngineError::DuplicatePlace`].
pub fn ensure_unique_place(existing: &[Place], draft: &PlaceDraft) -> EngineResult<()> {
    draft.validate()?;

    let taken = existing.iter().any(|place| {
        place.is_active() && place.user_id == draft.user_id && place.terms.name == draft.terms.name
    });
    if taken {
        return Err(EngineError::DuplicatePlace {
            name: draft.terms.name.clone(),
        });
    }

    Ok(())
}
