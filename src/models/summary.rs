//! Home summary models.
//!
//! These types describe the overview shown on the home screen: earnings in
//! the current month, progress toward the user's goal and the annual income
//! ceiling, the next shift, and one line per employer.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Progress toward the annual tax-exempt income ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeCeiling {
    /// The configured ceiling.
    pub limit: u64,
    /// Earned so far this calendar year.
    pub earned: u64,
    /// `limit - earned`; negative once the ceiling is passed.
    pub remaining: i64,
    /// Whether earnings have passed the ceiling.
    pub exceeded: bool,
}

/// Progress toward the user's earnings goal for the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// The user's goal amount.
    pub goal_amount: u64,
    /// Earned so far in the current period.
    pub current_amount: u64,
    /// Percentage of the goal reached, capped at 100. `None` without a goal.
    pub achievement_percent: Option<Decimal>,
}

/// Upcoming-payout line for one employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSummary {
    /// The employer's id.
    pub place_id: u64,
    /// The employer's display name.
    pub place_name: String,
    /// The billing period ending on the employer's closing day.
    pub closing_period: PayPeriod,
    /// Expected pay for shifts ending in the closing period.
    pub expected_amount: u64,
    /// Whole days until the closing day.
    pub days_to_closing_day: i64,
    /// The period ending on the employer's pay day.
    pub pay_period: PayPeriod,
    /// Whole days until the pay day.
    pub days_to_pay_day: i64,
    /// Start of the next shift at this employer.
    pub next_shift: Option<NaiveDateTime>,
}

/// The home screen overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeSummary {
    /// The moment the summary was computed for.
    pub reference: NaiveDateTime,
    /// The overview period containing `reference`.
    pub period: PayPeriod,
    /// Earned from the start of the overview period up to `reference`.
    pub current_amount: u64,
    /// Earned from January 1st up to `reference`.
    pub year_amount: u64,
    /// Goal progress for the overview period.
    pub goal: GoalProgress,
    /// Annual income ceiling progress.
    pub income_ceiling: IncomeCeiling,
    /// Start of the next shift at any employer.
    pub next_shift: Option<NaiveDateTime>,
    /// One line per employer with expected pay in its closing period.
    pub places: Vec<PlaceSummary>,
}
