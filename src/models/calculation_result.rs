//! Calculation result models for the shift earnings engine.
//!
//! This module contains the [`AmountBreakdown`] returned by the amount
//! calculator, the [`MinuteSplit`] it records for night-differential shifts,
//! and the [`AuditStep`] explaining how the amount was reached.

use serde::{Deserialize, Serialize};

/// Minutes of a shift falling inside and outside the night window.
///
/// Before the break is taken out, the two buckets add up to the full
/// length of the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinuteSplit {
    /// Minutes outside the night window.
    pub day_minutes: i64,
    /// Minutes inside the night window.
    pub night_minutes: i64,
}

impl MinuteSplit {
    /// Total minutes across both buckets.
    pub fn total(&self) -> i64 {
        self.day_minutes + self.night_minutes
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The result of computing one shift's amount.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{AmountBreakdown, AuditStep, MinuteSplit};
///
/// let breakdown = AmountBreakdown {
///     amount: 5250,
///     worked_minutes: 300,
///     split: Some(MinuteSplit { day_minutes: 240, night_minutes: 60 }),
///     audit_step: AuditStep {
///         rule_id: "night_differential".to_string(),
///         rule_name: "Night Differential Pay".to_string(),
///         input: serde_json::json!({}),
///         output: serde_json::json!({}),
///         reasoning: String::new(),
///     },
/// };
/// assert_eq!(breakdown.split.unwrap().total(), breakdown.worked_minutes);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBreakdown {
    /// Expected pay in whole currency units.
    pub amount: u64,
    /// Minutes worked after the break.
    pub worked_minutes: i64,
    /// Day/night minutes after the break, for night-differential shifts.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub split: Option<MinuteSplit>,
    /// How the amount was computed.
    pub audit_step: AuditStep,
}
