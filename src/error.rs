//! Error types for the shift earnings engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// The main error type for the shift earnings engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_earnings::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift interval does not end after it starts.
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        /// The start of the interval.
        start: NaiveDateTime,
        /// The end of the interval.
        end: NaiveDateTime,
    },

    /// A break is not shorter than the shift it belongs to.
    #[error("Invalid break: {break_minutes} minute break does not fit in a {span_minutes} minute shift")]
    InvalidBreak {
        /// The break length in minutes.
        break_minutes: i64,
        /// The shift length in minutes.
        span_minutes: i64,
    },

    /// A configured value is out of its allowed range.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfiguration {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A weekly repeat ends before its first occurrence.
    #[error("Invalid repeat: last date {until} is before first date {first}")]
    InvalidRepeat {
        /// The date of the first occurrence.
        first: NaiveDate,
        /// The requested last date.
        until: NaiveDate,
    },

    /// A weekly repeat covers more weeks than allowed.
    #[error("Invalid repeat: {first} to {until} exceeds {max_weeks} weeks")]
    RepeatTooLong {
        /// The date of the first occurrence.
        first: NaiveDate,
        /// The requested last date.
        until: NaiveDate,
        /// The allowed number of occurrences.
        max_weeks: usize,
    },

    /// A shift's pay does not fit in an amount.
    #[error("Amount out of range: {worked_minutes} minutes at {hourly_wage} per hour")]
    AmountOutOfRange {
        /// The hourly wage.
        hourly_wage: u64,
        /// The paid minutes of the shift.
        worked_minutes: i64,
    },

    /// An employer profile was invalid.
    #[error("Invalid place field '{field}': {message}")]
    InvalidPlace {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A shift template was invalid.
    #[error("Invalid template field '{field}': {message}")]
    InvalidTemplate {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An active employer profile with the same name already exists.
    #[error("Place '{name}' already exists")]
    DuplicatePlace {
        /// The conflicting name.
        name: String,
    },

    /// A new shift overlaps active shifts at the same place.
    #[error("Shift overlaps {count} existing shift(s) at place {place_id}")]
    OverlappingShift {
        /// The place the shifts belong to.
        place_id: u64,
        /// How many existing shifts overlap.
        count: usize,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
