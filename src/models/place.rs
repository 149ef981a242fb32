//! Employer profile ("place") model.
//!
//! A place carries the wage terms that are flattened onto every shift
//! worked there. Places are never removed; deleting one flips its
//! [`RecordStatus`] so it stops counting toward name uniqueness.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Soft-delete status of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// The record participates in lookups, uniqueness checks and totals.
    #[default]
    Active,
    /// The record was deleted by the user and is kept for history only.
    Deleted,
}

impl RecordStatus {
    /// Maps a storage `is_valid` flag to a status.
    pub fn from_valid_flag(is_valid: bool) -> Self {
        if is_valid {
            RecordStatus::Active
        } else {
            RecordStatus::Deleted
        }
    }
}

/// The wage terms of an employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceTerms {
    /// Display name, unique among the user's active places.
    pub name: String,
    /// Hourly wage in whole currency units.
    pub hourly_wage: u64,
    /// Whether night minutes earn the night differential.
    #[serde(default)]
    pub has_night_differential: bool,
    /// Day of month on which the billing period closes (1-31).
    pub closing_day: u32,
    /// Day of month on which wages are paid (1-31).
    pub pay_day: u32,
}

impl PlaceTerms {
    /// Checks the name and the two day-of-month settings.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidPlace {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        for (field, day) in [("closing_day", self.closing_day), ("pay_day", self.pay_day)] {
            if !(1..=31).contains(&day) {
                return Err(EngineError::InvalidPlace {
                    field: field.to_string(),
                    message: format!("must be between 1 and 31, got {}", day),
                });
            }
        }

        Ok(())
    }
}

/// A place as entered by the user, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDraft {
    /// The user registering the place.
    pub user_id: u64,
    /// The place's wage terms.
    #[serde(flatten)]
    pub terms: PlaceTerms,
}

impl PlaceDraft {
    /// Checks the draft's terms.
    pub fn validate(&self) -> EngineResult<()> {
        self.terms.validate()
    }
}

/// A stored employer profile.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{Place, PlaceTerms, RecordStatus};
///
/// let place = Place {
///     id: 1,
///     user_id: 1,
///     terms: PlaceTerms {
///         name: "Bookshop".to_string(),
///         hourly_wage: 1150,
///         has_night_differential: false,
///         closing_day: 31,
///         pay_day: 15,
///     },
///     status: RecordStatus::Active,
/// };
/// assert!(place.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier for the place.
    pub id: u64,
    /// The owning user.
    pub user_id: u64,
    /// The place's wage terms.
    #[serde(flatten)]
    pub terms: PlaceTerms,
    /// Soft-delete status.
    #[serde(default)]
    pub status: RecordStatus,
}

impl Place {
    /// Returns true if the place has not been deleted.
    pub fn is_active(&self) -> bool {
        self.status == RecordStatus::Active
    }
}
