//! Configuration types for earnings calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rules file.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hour at which the night window opens.
pub const DEFAULT_NIGHT_START_HOUR: u32 = 22;

/// Hour at which the night window closes.
pub const DEFAULT_NIGHT_END_HOUR: u32 = 5;

/// The annual tax-exempt income ceiling, in whole currency units.
pub const DEFAULT_ANNUAL_INCOME_LIMIT: u64 = 1_030_000;

/// Boundary day used for the home overview period (month end).
pub const DEFAULT_OVERVIEW_BOUNDARY_DAY: u32 = 31;

/// The night differential multiplier (1.25x).
pub fn default_night_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

/// The hours of the day that earn the night differential.
///
/// The window is half-open, `[start_hour, end_hour)`, and wraps midnight
/// when `start_hour > end_hour`.
///
/// # Example
///
/// ```
/// use shift_earnings::config::NightWindow;
///
/// let window = NightWindow::default();
/// assert!(window.contains_hour(23));
/// assert!(window.contains_hour(4));
/// assert!(!window.contains_hour(5));
/// assert!(!window.contains_hour(21));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// First night hour (inclusive).
    pub start_hour: u32,
    /// First day hour after the night (exclusive end of the window).
    pub end_hour: u32,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_NIGHT_START_HOUR,
            end_hour: DEFAULT_NIGHT_END_HOUR,
        }
    }
}

impl NightWindow {
    /// Returns true if the given hour of day falls in the night window.
    pub fn contains_hour(&self, hour: u32) -> bool {
        if self.start_hour > self.end_hour {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            hour >= self.start_hour && hour < self.end_hour
        }
    }

    fn validate(&self) -> EngineResult<()> {
        for (field, hour) in [
            ("night_window.start_hour", self.start_hour),
            ("night_window.end_hour", self.end_hour),
        ] {
            if hour > 23 {
                return Err(EngineError::InvalidConfiguration {
                    field: field.to_string(),
                    message: format!("must be between 0 and 23, got {}", hour),
                });
            }
        }
        if self.start_hour == self.end_hour {
            return Err(EngineError::InvalidConfiguration {
                field: "night_window".to_string(),
                message: "start_hour and end_hour must differ".to_string(),
            });
        }
        Ok(())
    }
}

/// How a break is taken out of the day and night minute buckets.
///
/// The break is always charged to the larger bucket first (ties go to the
/// night bucket). The policies differ only when the break does not fit in
/// that bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakAllocation {
    /// Zero the larger bucket and charge the rest of the break to the other one.
    #[default]
    Carryover,
    /// Zero the larger bucket and charge the whole break to the other one.
    ///
    /// Matches amounts recorded by earlier versions of the tracker.
    Legacy,
}

/// How fractional currency amounts are rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Halves round away from zero (2.5 -> 3).
    #[default]
    HalfUp,
    /// Halves round to the nearest even unit (2.5 -> 2, 3.5 -> 4).
    HalfEven,
}

impl RoundingPolicy {
    /// Rounds an amount to whole currency units.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_earnings::config::RoundingPolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let half = Decimal::new(25, 1); // 2.5
    /// assert_eq!(RoundingPolicy::HalfUp.round(half), Decimal::new(3, 0));
    /// assert_eq!(RoundingPolicy::HalfEven.round(half), Decimal::new(2, 0));
    /// ```
    pub fn round(self, amount: Decimal) -> Decimal {
        let strategy = match self {
            RoundingPolicy::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
        };
        amount.round_dp_with_strategy(0, strategy)
    }
}

/// The complete rule set used by the calculators.
///
/// Every field has a default, so a rules file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollRules {
    /// Hours that earn the night differential.
    pub night_window: NightWindow,
    /// Multiplier applied to the hourly wage for night minutes.
    pub night_multiplier: Decimal,
    /// Break allocation policy for night-differential shifts.
    pub break_allocation: BreakAllocation,
    /// Rounding applied to computed amounts.
    pub rounding: RoundingPolicy,
    /// Annual tax-exempt income ceiling.
    pub annual_income_limit: u64,
    /// Boundary day of the home overview period.
    pub overview_boundary_day: u32,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            night_window: NightWindow::default(),
            night_multiplier: default_night_multiplier(),
            break_allocation: BreakAllocation::default(),
            rounding: RoundingPolicy::default(),
            annual_income_limit: DEFAULT_ANNUAL_INCOME_LIMIT,
            overview_boundary_day: DEFAULT_OVERVIEW_BOUNDARY_DAY,
        }
    }
}

impl PayrollRules {
    /// Checks that every configured value is in range.
    pub fn validate(&self) -> EngineResult<()> {
        self.night_window.validate()?;

        if self.night_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidConfiguration {
                field: "night_multiplier".to_string(),
                message: format!("must be at least 1, got {}", self.night_multiplier),
            });
        }

        if !(1..=31).contains(&self.overview_boundary_day) {
            return Err(EngineError::InvalidConfiguration {
                field: "overview_boundary_day".to_string(),
                message: format!(
                    "must be between 1 and 31, got {}",
                    self.overview_boundary_day
                ),
            });
        }

        Ok(())
    }
}
