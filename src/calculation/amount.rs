//! Shift amount calculation.
//!
//! This module computes the expected pay for a single shift. Shifts without
//! a night differential are paid for their worked seconds at the hourly
//! wage. Shifts with a night differential are split into day and night
//! minutes, the break is taken out per the configured policy, and night
//! minutes earn the night multiplier.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AmountBreakdown, AuditStep, BreakDuration, MinuteSplit, validate_interval};

use super::night_split::{allocate_break, classify_minutes};

const SECONDS_PER_HOUR: i64 = 3_600;
const MINUTES_PER_HOUR: i64 = 60;

/// Calculates the expected pay for a shift, with an audit step.
///
/// # Arguments
///
/// * `start` - Start of the shift
/// * `end` - End of the shift
/// * `break_duration` - Unpaid break
/// * `hourly_wage` - Wage per hour in whole currency units
/// * `has_night_differential` - Whether night minutes earn the multiplier
/// * `rules` - Night window, multiplier, break policy and rounding
///
/// # Returns
///
/// Returns an [`AmountBreakdown`], or an error if:
/// - `start` is not before `end` ([`EngineError::InvalidInterval`])
/// - the break is not shorter than the shift ([`EngineError::InvalidBreak`])
/// - the legacy break policy drives the amount below zero
///   ([`EngineError::CalculationError`])
/// - the amount does not fit in a `u64` ([`EngineError::AmountOutOfRange`])
///
/// # Examples
///
/// ```
/// use shift_earnings::calculation::calculate_amount;
/// use shift_earnings::config::PayrollRules;
/// use shift_earnings::models::BreakDuration;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2024-05-01 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-05-02 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = calculate_amount(
///     start,
///     end,
///     BreakDuration::new(1, 0).unwrap(),
///     1000,
///     true,
///     &PayrollRules::default(),
/// )
/// .unwrap();
///
/// // 4h day, 4h night; the hour break comes out of the night bucket (tie).
/// // 4 x 1000 + 3 x 1250 = 7750
/// assert_eq!(result.amount, 7750);
/// ```
pub fn calculate_amount(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_duration: BreakDuration,
    hourly_wage: u64,
    has_night_differential: bool,
    rules: &PayrollRules,
) -> EngineResult<AmountBreakdown> {
    validate_interval(start, end, break_duration)?;

    if has_night_differential {
        night_differential_amount(start, end, break_duration, hourly_wage, rules)
    } else {
        day_rate_amount(start, end, break_duration, hourly_wage, rules)
    }
}

/// Calculates the expected pay for a shift.
///
/// Shorthand for [`calculate_amount`] when only the amount is needed.
pub fn compute_amount(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_duration: BreakDuration,
    hourly_wage: u64,
    has_night_differential: bool,
    rules: &PayrollRules,
) -> EngineResult<u64> {
    calculate_amount(
        start,
        end,
        break_duration,
        hourly_wage,
        has_night_differential,
        rules,
    )
    .map(|breakdown| breakdown.amount)
}

fn day_rate_amount(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_duration: BreakDuration,
    hourly_wage: u64,
    rules: &PayrollRules,
) -> EngineResult<AmountBreakdown> {
    let worked = end - start - break_duration.as_duration();
    let worked_seconds = worked.num_seconds();

    let out_of_range = || EngineError::AmountOutOfRange {
        hourly_wage,
        worked_minutes: worked.num_minutes(),
    };

    let exact = Decimal::from(hourly_wage)
        .checked_mul(Decimal::from(worked_seconds))
        .and_then(|total| total.checked_div(Decimal::from(SECONDS_PER_HOUR)))
        .ok_or_else(out_of_range)?;
    let rounded = rules.rounding.round(exact);
    let amount = to_amount(rounded, out_of_range)?;

    let audit_step = AuditStep {
        rule_id: "day_rate".to_string(),
        rule_name: "Day Rate Pay".to_string(),
        input: serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
            "break": break_duration.to_string(),
            "hourly_wage": hourly_wage,
            "worked_seconds": worked_seconds
        }),
        output: serde_json::json!({
            "exact_amount": exact.normalize().to_string(),
            "amount": amount
        }),
        reasoning: format!(
            "{} worked seconds x {} / 3600 = {}, rounded {:?} to {}",
            worked_seconds,
            hourly_wage,
            exact.normalize(),
            rules.rounding,
            amount
        ),
    };

    Ok(AmountBreakdown {
        amount,
        worked_minutes: worked.num_minutes(),
        split: None,
        audit_step,
    })
}

fn night_differential_amount(
    start: NaiveDateTime,
    end: NaiveDateTime,
    break_duration: BreakDuration,
    hourly_wage: u64,
    rules: &PayrollRules,
) -> EngineResult<AmountBreakdown> {
    let raw = classify_minutes(start, end, &rules.night_window);
    let break_minutes = break_duration.total_minutes();
    let split = allocate_break(raw, break_minutes, rules.break_allocation);

    let out_of_range = || EngineError::AmountOutOfRange {
        hourly_wage,
        worked_minutes: split.total(),
    };

    let exact = rules
        .night_multiplier
        .checked_mul(Decimal::from(split.night_minutes))
        .and_then(|night| night.checked_add(Decimal::from(split.day_minutes)))
        .and_then(|weighted| weighted.checked_mul(Decimal::from(hourly_wage)))
        .and_then(|total| total.checked_div(Decimal::from(MINUTES_PER_HOUR)))
        .ok_or_else(out_of_range)?;
    let rounded = rules.rounding.round(exact);

    let amount = to_amount(rounded, out_of_range).inspect_err(|error| {
        warn!(
            error = %error,
            start = %start,
            end = %end,
            break_minutes,
            day_minutes = split.day_minutes,
            night_minutes = split.night_minutes,
            policy = ?rules.break_allocation,
            "Night differential amount rejected"
        );
    })?;

    let audit_step = AuditStep {
        rule_id: "night_differential".to_string(),
        rule_name: "Night Differential Pay".to_string(),
        input: serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
            "break": break_duration.to_string(),
            "hourly_wage": hourly_wage,
            "night_multiplier": rules.night_multiplier.normalize().to_string(),
            "night_window": {
                "start_hour": rules.night_window.start_hour,
                "end_hour": rules.night_window.end_hour
            },
            "break_allocation": format!("{:?}", rules.break_allocation)
        }),
        output: serde_json::json!({
            "raw_day_minutes": raw.day_minutes,
            "raw_night_minutes": raw.night_minutes,
            "day_minutes": split.day_minutes,
            "night_minutes": split.night_minutes,
            "exact_amount": exact.normalize().to_string(),
            "amount": amount
        }),
        reasoning: format!(
            "{} day min x {} / 60 + {} night min x {} x {} / 60 = {}, rounded {:?} to {}",
            split.day_minutes,
            hourly_wage,
            split.night_minutes,
            hourly_wage,
            rules.night_multiplier.normalize(),
            exact.normalize(),
            rules.rounding,
            amount
        ),
    };

    Ok(AmountBreakdown {
        amount,
        worked_minutes: split.total(),
        split: Some(MinuteSplit {
            day_minutes: split.day_minutes,
            night_minutes: split.night_minutes,
        }),
        audit_step,
    })
}

fn to_amount(
    rounded: Decimal,
    out_of_range: impl FnOnce() -> EngineError,
) -> EngineResult<u64> {
    if rounded.is_zero() {
        return Ok(0);
    }
    if rounded.is_sign_negative() {
        return Err(EngineError::CalculationError {
            message: format!("amount {} is negative", rounded),
        });
    }
    rounded.to_u64().ok_or_else(out_of_range)
}
