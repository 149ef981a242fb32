//! Calculation logic for the shift earnings engine.
//!
//! This module contains the pay calculation for a single shift (day/night
//! minute split and break allocation), the closing-day and pay-day window
//! arithmetic, earnings aggregation over a shift collection, the home
//! summary, and the checks run before a shift or place is registered.

mod amount;
mod earnings;
mod night_split;
mod period_window;
mod shift_entry;
mod summary;

pub use amount::{calculate_amount, compute_amount};
pub use earnings::{next_shift, sum_in_range};
pub use night_split::{allocate_break, classify_minutes};
pub use period_window::{days_in_month, window_for};
pub use shift_entry::{
    MAX_REPEAT_WEEKS, RegistrationPlan, check_overlaps, ensure_unique_place, find_overlaps, plan_registration,
    weekly_occurrences,
};
pub use summary::build_home_summary;
