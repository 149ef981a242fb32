//! Home screen summary.
//!
//! Combines the period window, the earnings aggregation and the next-shift
//! lookup into the overview shown on the home screen.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{GoalProgress, HomeSummary, IncomeCeiling, PlaceSummary, Shift};

use super::earnings::{next_shift, sum_in_range};
use super::period_window::window_for;

/// Builds the home screen overview for `now`.
///
/// `shifts` must be ascending by start time. `goal_amount` of 0 means the
/// user has no goal.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] if the overview boundary
/// day or a shift's closing or pay day is outside 1..=31.
pub fn build_home_summary(
    shifts: &[Shift],
    now: NaiveDateTime,
    goal_amount: u64,
    rules: &PayrollRules,
) -> EngineResult<HomeSummary> {
    let period = window_for(now.date(), rules.overview_boundary_day)?;
    let current_amount = sum_in_range(shifts, period.start, now);

    let year_start = NaiveDate::from_yo_opt(now.year(), 1)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no January 1st in year {}", now.year()),
        })?;
    let year_amount = sum_in_range(shifts, year_start, now);

    let places = place_summaries(shifts, now)?;

    debug!(
        now = %now,
        shifts = shifts.len(),
        current_amount,
        year_amount,
        places = places.len(),
        "Built home summary"
    );

    Ok(HomeSummary {
        reference: now,
        period,
        current_amount,
        year_amount,
        goal: goal_progress(goal_amount, current_amount),
        income_ceiling: income_ceiling(rules.annual_income_limit, year_amount),
        next_shift: next_shift(shifts, now, None),
        places,
    })
}

fn goal_progress(goal_amount: u64, current_amount: u64) -> GoalProgress {
    let achievement_percent = (goal_amount > 0).then(|| {
        let percent = Decimal::from(current_amount) * Decimal::ONE_HUNDRED
            / Decimal::from(goal_amount);
        percent.min(Decimal::ONE_HUNDRED).round_dp(1)
    });

    GoalProgress {
        goal_amount,
        current_amount,
        achievement_percent,
    }
}

fn income_ceiling(limit: u64, earned: u64) -> IncomeCeiling {
    let remaining = i64::try_from(limit)
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(earned).unwrap_or(i64::MAX));

    IncomeCeiling {
        limit,
        earned,
        remaining,
        exceeded: earned > limit,
    }
}

fn place_summaries(shifts: &[Shift], now: NaiveDateTime) -> EngineResult<Vec<PlaceSummary>> {
    let mut by_place: BTreeMap<u64, &Shift> = BTreeMap::new();
    for shift in shifts {
        by_place.entry(shift.place_id).or_insert(shift);
    }

    let mut summaries = Vec::new();
    for (place_id, shift) in by_place {
        let closing_period = window_for(now.date(), shift.closing_day)?;
        let expected_amount = sum_in_range(
            shifts.iter().filter(|s| s.place_id == place_id),
            closing_period.start,
            closing_period.end,
        );
        if expected_amount == 0 {
            continue;
        }

        let pay_period = window_for(now.date(), shift.pay_day)?;

        summaries.push(PlaceSummary {
            place_id,
            place_name: shift.place_name.clone(),
            closing_period,
            expected_amount,
            days_to_closing_day: closing_period.days_until_end(now),
            pay_period,
            days_to_pay_day: pay_period.days_until_end(now),
            next_shift: next_shift(shifts, now, Some(place_id)),
        });
    }

    summaries.sort_by(|a, b| a.place_name.cmp(&b.place_name));
    Ok(summaries)
}
