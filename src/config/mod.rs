//! Configuration loading and management for the shift earnings engine.
//!
//! This module loads the payroll rules (night window, night multiplier,
//! break allocation, rounding and the annual income ceiling) from a YAML file,
//! and the server binary's settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use shift_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Night multiplier: {}", config.rules().night_multiplier);
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::{ADDR_VAR, CONFIG_VAR, ServerSettings};
pub use types::{
    BreakAllocation, DEFAULT_ANNUAL_INCOME_LIMIT, DEFAULT_NIGHT_END_HOUR,
    DEFAULT_NIGHT_START_HOUR, DEFAULT_OVERVIEW_BOUNDARY_DAY, NightWindow, PayrollRules,
    RoundingPolicy, default_night_multiplier,
};
