//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! rules from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollRules;

/// Loads and provides access to the payroll rules.
///
/// # File Format
///
/// ```text
/// night_window:
///   start_hour: 22
///   end_hour: 5
/// night_multiplier: 1.25
/// break_allocation: carryover   # or: legacy
/// rounding: half_up             # or: half_even
/// annual_income_limit: 1030000
/// overview_boundary_day: 31
/// ```
///
/// Omitted keys fall back to [`PayrollRules::default`].
///
/// # Example
///
/// ```no_run
/// use shift_earnings::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Income limit: {}", loader.rules().annual_income_limit);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: PayrollRules,
}

impl ConfigLoader {
    /// Loads the rules from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A configured value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let rules = Self::load_yaml::<PayrollRules>(path)?;
        rules.validate()?;

        debug!(
            path = %path.display(),
            break_allocation = ?rules.break_allocation,
            rounding = ?rules.rounding,
            "Loaded payroll rules"
        );

        Ok(Self { rules })
    }

    /// Wraps an already-built rule set after validating it.
    pub fn from_rules(rules: PayrollRules) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.rules
    }
}
