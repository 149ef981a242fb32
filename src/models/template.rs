//! Shift templates.
//!
//! A template stores the usual times of a recurring shift so a new shift
//! can be created by picking a date.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::shift::{BreakDuration, ShiftDraft};

/// Longest allowed template name, in characters.
pub const TEMPLATE_NAME_MAX_CHARS: usize = 8;

/// A named set of shift times for one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Unique identifier for the template.
    pub id: u64,
    /// The owning user.
    pub user_id: u64,
    /// The place shifts created from this template belong to.
    pub place_id: u64,
    /// Short display name (1 to 8 characters).
    pub name: String,
    /// Time of day the shift starts.
    pub start_time: NaiveTime,
    /// Time of day the shift ends.
    pub end_time: NaiveTime,
    /// Unpaid break.
    #[serde(default)]
    pub break_duration: BreakDuration,
}

impl ShiftTemplate {
    /// Checks the template name length.
    pub fn validate(&self) -> EngineResult<()> {
        let chars = self.name.chars().count();
        if chars == 0 || chars > TEMPLATE_NAME_MAX_CHARS {
            return Err(EngineError::InvalidTemplate {
                field: "name".to_string(),
                message: format!(
                    "must be 1 to {} characters, got {}",
                    TEMPLATE_NAME_MAX_CHARS, chars
                ),
            });
        }
        Ok(())
    }

    /// Creates a shift draft starting on `date`.
    ///
    /// When the end time is not after the start time the shift runs past
    /// midnight and ends on the following day.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_earnings::models::{BreakDuration, ShiftTemplate};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let template = ShiftTemplate {
    ///     id: 1,
    ///     user_id: 1,
    ///     place_id: 2,
    ///     name: "Late".to_string(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     break_duration: BreakDuration::new(1, 0).unwrap(),
    /// };
    ///
    /// let draft = template.instantiate(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()).unwrap();
    /// assert_eq!(draft.end.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    /// ```
    pub fn instantiate(&self, date: NaiveDate) -> EngineResult<ShiftDraft> {
        self.validate()?;

        let start = date.and_time(self.start_time);
        let mut end = date.and_time(self.end_time);
        if end <= start {
            end += Duration::days(1);
        }

        let draft = ShiftDraft {
            user_id: self.user_id,
            place_id: self.place_id,
            start,
            end,
            break_duration: self.break_duration,
        };
        draft.validate()?;
        Ok(draft)
    }
}
