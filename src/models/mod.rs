//! Core data models for the shift earnings engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod pay_period;
mod place;
mod record;
mod shift;
mod summary;
mod template;

pub use calculation_result::{AmountBreakdown, AuditStep, MinuteSplit};
pub use pay_period::PayPeriod;
pub use place::{Place, PlaceDraft, PlaceTerms, RecordStatus};
pub use record::{ShiftRow, load_shifts};
pub use shift::{BreakDuration, Shift, ShiftDraft, validate_interval};
pub use summary::{GoalProgress, HomeSummary, IncomeCeiling, PlaceSummary};
pub use template::{ShiftTemplate, TEMPLATE_NAME_MAX_CHARS};
