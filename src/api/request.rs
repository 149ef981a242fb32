//! Request types for the shift earnings API.
//!
//! This module defines the JSON request bodies for every endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{BreakDuration, Place, PlaceDraft, ShiftDraft, ShiftRow};

/// Request body for the `/amount` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountRequest {
    /// The start of the shift.
    pub start: NaiveDateTime,
    /// The end of the shift.
    pub end: NaiveDateTime,
    /// Unpaid break, `HH:MM[:SS]`.
    #[serde(default)]
    pub break_duration: BreakDuration,
    /// Hourly wage in whole currency units.
    pub hourly_wage: u64,
    /// Whether night minutes earn the night differential.
    #[serde(default)]
    pub has_night_differential: bool,
}

/// Request body for the `/period` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The date to find the period for.
    pub reference: NaiveDate,
    /// The closing or pay day of month.
    pub boundary_day: u32,
}

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The moment to build the summary for.
    pub now: NaiveDateTime,
    /// The user's goal for the current period; 0 for none.
    #[serde(default)]
    pub goal_amount: u64,
    /// The user's shift rows, with their employer terms joined.
    pub shifts: Vec<ShiftRow>,
}

/// Request body for the `/shifts/plan` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// The user's stored shift rows.
    #[serde(default)]
    pub existing: Vec<ShiftRow>,
    /// The shift to register.
    pub draft: ShiftDraft,
    /// Last date of a weekly repeat.
    #[serde(default)]
    pub repeat_until: Option<NaiveDate>,
}

/// Request body for the `/places/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCheckRequest {
    /// The user's stored places, including deleted ones.
    #[serde(default)]
    pub existing: Vec<Place>,
    /// The place to register.
    pub draft: PlaceDraft,
}
