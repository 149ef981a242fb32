//! Raw storage rows and their mapping into typed shifts.
//!
//! The storage collaborator returns one row per shift with the employer's
//! terms joined on. [`load_shifts`] is the single place where those rows
//! become [`Shift`] values: inactive rows are dropped, the rest are
//! validated, annotated with their amount and sorted by start time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PayrollRules;
use crate::error::{EngineError, EngineResult};

use super::place::{PlaceTerms, RecordStatus};
use super::shift::{BreakDuration, Shift, ShiftDraft};

fn default_valid() -> bool {
    true
}

/// A shift row as read from storage, with its place's terms joined on.
///
/// # Example
///
/// ```
/// use shift_earnings::models::ShiftRow;
///
/// let row: ShiftRow = serde_json::from_str(r#"{
///     "id": 12,
///     "user_id": 1,
///     "place_id": 3,
///     "start_datetime": "2024-05-01T22:00:00",
///     "end_datetime": "2024-05-02T06:00:00",
///     "break_time": "01:00:00",
///     "is_valid": true,
///     "place": {
///         "name": "Warehouse",
///         "hourly_wage": 1200,
///         "has_night_differential": true,
///         "closing_day": 25,
///         "pay_day": 10
///     }
/// }"#).unwrap();
/// assert_eq!(row.break_time.total_minutes(), 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// Unique identifier for the shift.
    pub id: u64,
    /// The owning user.
    pub user_id: u64,
    /// The employer the shift is worked for.
    pub place_id: u64,
    /// The start of the shift.
    pub start_datetime: NaiveDateTime,
    /// The end of the shift.
    pub end_datetime: NaiveDateTime,
    /// Unpaid break, `HH:MM[:SS]`.
    #[serde(default)]
    pub break_time: BreakDuration,
    /// Soft-delete flag; `false` once the user deleted the shift.
    #[serde(default = "default_valid")]
    pub is_valid: bool,
    /// The joined employer terms.
    pub place: PlaceTerms,
}

impl ShiftRow {
    /// The soft-delete status of the row.
    pub fn status(&self) -> RecordStatus {
        RecordStatus::from_valid_flag(self.is_valid)
    }

    fn draft(&self) -> ShiftDraft {
        ShiftDraft {
            user_id: self.user_id,
            place_id: self.place_id,
            start: self.start_datetime,
            end: self.end_datetime,
            break_duration: self.break_time,
        }
    }
}

impl Shift {
    /// Maps one storage row into a shift, computing its amount.
    ///
    /// Validation failures are reported as [`EngineError::InvalidShift`]
    /// carrying the row id.
    pub fn from_row(row: &ShiftRow, rules: &PayrollRules) -> EngineResult<Self> {
        let wrap = |err: EngineError| EngineError::InvalidShift {
            shift_id: row.id.to_string(),
            message: err.to_string(),
        };

        row.place.validate().map_err(wrap)?;
        Shift::new(row.id, &row.draft(), &row.place, rules).map_err(wrap)
    }
}

/// Builds the in-memory shift collection from storage rows.
///
/// Deleted rows are skipped. The result is sorted ascending by start time,
/// which the aggregation functions rely on.
pub fn load_shifts(rows: &[ShiftRow], rules: &PayrollRules) -> EngineResult<Vec<Shift>> {
    let mut shifts = rows
        .iter()
        .filter(|row| row.status() == RecordStatus::Active)
        .map(|row| Shift::from_row(row, rules))
        .collect::<EngineResult<Vec<_>>>()?;

    shifts.sort_by_key(|shift| shift.start);

    debug!(
        rows = rows.len(),
        active = shifts.len(),
        "Loaded shift collection"
    );

    Ok(shifts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn create_row(id: u64, start: NaiveDateTime, end: NaiveDateTime, is_valid: bool) -> ShiftRow {
        ShiftRow {
            id,
            user_id: 1,
            place_id: 3,
            start_datetime: start,
            end_datetime: end,
            break_time: BreakDuration::ZERO,
            is_valid,
            place: PlaceTerms {
                name: "Warehouse".to_string(),
                hourly_wage: 1200,
                has_night_differential: false,
                closing_day: 25,
                pay_day: 10,
            },
        }
    }

    #[test]
    fn test_from_row_maps_all_fields() {
        let row = create_row(
            5,
            make_datetime("2024-05-01", "09:00:00"),
            make_datetime("2024-05-01", "13:00:00"),
            true,
        );
        let shift = Shift::from_row(&row, &PayrollRules::default()).unwrap();

        assert_eq!(shift.id, 5);
        assert_eq!(shift.place_id, 3);
        assert_eq!(shift.place_name, "Warehouse");
        assert_eq!(shift.hourly_wage, 1200);
        assert_eq!(shift.closing_day, 25);
        assert_eq!(shift.pay_day, 10);
        assert_eq!(shift.amount(), 4800);
    }

    #[test]
    fn test_from_row_reports_row_id_on_error() {
        let row = create_row(
            9,
            make_datetime("2024-05-01", "13:00:00"),
            make_datetime("2024-05-01", "09:00:00"),
            true,
        );

        match Shift::from_row(&row, &PayrollRules::default()) {
            Err(EngineError::InvalidShift { shift_id, message }) => {
                assert_eq!(shift_id, "9");
                assert!(message.contains("Invalid interval"));
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_from_row_rejects_invalid_place_terms() {
        let mut row = create_row(
            2,
            make_datetime("2024-05-01", "09:00:00"),
            make_datetime("2024-05-01", "10:00:00"),
            true,
        );
        row.place.closing_day = 0;

        assert!(matches!(
            Shift::from_row(&row, &PayrollRules::default()),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_load_shifts_skips_deleted_and_sorts() {
        let rows = vec![
            create_row(
                1,
                make_datetime("2024-05-03", "09:00:00"),
                make_datetime("2024-05-03", "10:00:00"),
                true,
            ),
            create_row(
                2,
                make_datetime("2024-05-01", "09:00:00"),
                make_datetime("2024-05-01", "10:00:00"),
                false,
            ),
            create_row(
                3,
                make_datetime("2024-05-02", "09:00:00"),
                make_datetime("2024-05-02", "10:00:00"),
                true,
            ),
        ];

        let shifts = load_shifts(&rows, &PayrollRules::default()).unwrap();
        let ids: Vec<u64> = shifts.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_load_shifts_ignores_invalid_deleted_rows() {
        // A deleted row is never mapped, so bad data in it cannot fail the load.
        let rows = vec![create_row(
            1,
            make_datetime("2024-05-03", "10:00:00"),
            make_datetime("2024-05-03", "09:00:00"),
            false,
        )];

        let shifts = load_shifts(&rows, &PayrollRules::default()).unwrap();
        assert!(shifts.is_empty());
    }

    #[test]
    fn test_row_defaults_to_valid_and_zero_break() {
        let json = r#"{
            "id": 1,
            "user_id": 1,
            "place_id": 3,
            "start_datetime": "2024-05-01T09:00:00",
            "end_datetime": "2024-05-01T10:00:00",
            "place": {
                "name": "Warehouse",
                "hourly_wage": 1200,
                "closing_day": 25,
                "pay_day": 10
            }
        }"#;

        let row: ShiftRow = serde_json::from_str(json).unwrap();
        assert!(row.is_valid);
        assert_eq!(row.break_time, BreakDuration::ZERO);
        assert!(!row.place.has_night_differential);
    }
}
