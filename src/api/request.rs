//! Request types for the timesheet API.
//!
//! This module defines the JSON body for record edits and the query string
//! for period totals.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyPunchRecord, DayType};

/// Request body for `PUT /employees/:employee_id/records/:date`.
///
/// The body replaces the whole record. Omitted or blank punches are stored
/// as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Morning arrival, "HH:MM".
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Departure for lunch.
    #[serde(default)]
    pub lunch_out: Option<String>,
    /// Return from lunch.
    #[serde(default)]
    pub lunch_in: Option<String>,
    /// End of day departure.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// How the day is accounted for.
    #[serde(default)]
    pub day_type: DayType,
}

impl RecordRequest {
    /// Validates the punches and builds the record to store.
    ///
    /// Each present punch must be a wall-clock time (`HH:MM` or `HH:MM:SS`).
    pub fn into_record(self, employee_id: &str, date: NaiveDate) -> EngineResult<DailyPunchRecord> {
        for (field, value) in [
            ("clock_in", &self.clock_in),
            ("lunch_out", &self.lunch_out),
            ("lunch_in", &self.lunch_in),
            ("clock_out", &self.clock_out),
        ] {
            validate_punch(field, value.as_deref())?;
        }

        Ok(DailyPunchRecord::new(employee_id, date)
            .with_punches(
                self.clock_in.as_deref(),
                self.lunch_out.as_deref(),
                self.lunch_in.as_deref(),
                self.clock_out.as_deref(),
            )
            .with_day_type(self.day_type))
    }
}

fn validate_punch(field: &str, value: Option<&str>) -> EngineResult<()> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(());
    };

    let parsed = NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"));

    parsed.map(|_| ()).map_err(|_| EngineError::InvalidRecord {
        field: field.to_string(),
        message: format!("'{}' is not a valid HH:MM time", value),
    })
}

/// Query string for `GET /employees/:employee_id/hour-bank`.
///
/// Months are zero-based. Both ends are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodQuery {
    /// First year of the range.
    pub from_year: i32,
    /// First zero-based month of the range.
    pub from_month: u32,
    /// Last year of the range.
    pub to_year: i32,
    /// Last zero-based month of the range.
    pub to_month: u32,
}

impl PeriodQuery {
    /// Checks both months and returns the range as period pairs.
    pub fn bounds(&self) -> EngineResult<((i32, u32), (i32, u32))> {
        validate_month(self.from_year, self.from_month)?;
        validate_month(self.to_year, self.to_month)?;
        Ok(((self.from_year, self.from_month), (self.to_year, self.to_month)))
    }
}

/// Rejects month indexes outside `0..=11`.
pub fn validate_month(year: i32, month: u32) -> EngineResult<()> {
    if month > 11 {
        return Err(EngineError::InvalidPeriod { year, month });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_into_record_keeps_punches() {
        let request = RecordRequest {
            clock_in: Some("08:00".to_string()),
            lunch_out: Some("12:00".to_string()),
            lunch_in: Some("".to_string()),
            clock_out: None,
            day_type: DayType::Normal,
        };

        let record = request.into_record("emp_001", make_date("2026-03-02")).unwrap();
        assert_eq!(record.employee_id, "emp_001");
        assert_eq!(record.clock_in.as_deref(), Some("08:00"));
        assert_eq!(record.lunch_out.as_deref(), Some("12:00"));
        assert_eq!(record.lunch_in, None);
        assert_eq!(record.clock_out, None);
    }

    #[test]
    fn test_seconds_are_accepted() {
        let request = RecordRequest {
            clock_in: Some("08:00:00".to_string()),
            ..RecordRequest::default()
        };
        assert!(request.into_record("emp_001", make_date("2026-03-02")).is_ok());
    }

    #[test]
    fn test_invalid_punch_names_field() {
        let request = RecordRequest {
            clock_out: Some("25:00".to_string()),
            ..RecordRequest::default()
        };

        match request.into_record("emp_001", make_date("2026-03-02")) {
            Err(EngineError::InvalidRecord { field, message }) => {
                assert_eq!(field, "clock_out");
                assert!(message.contains("25:00"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_day_type_defaults_to_normal() {
        let request: RecordRequest = serde_json::from_str(r#"{"clock_in": "08:00"}"#).unwrap();
        assert_eq!(request.day_type, DayType::Normal);

        let legacy: RecordRequest = serde_json::from_str(r#"{"day_type": "falta"}"#).unwrap();
        assert_eq!(legacy.day_type, DayType::Absence);
    }

    #[test]
    fn test_period_query_bounds() {
        let query = PeriodQuery {
            from_year: 2025,
            from_month: 6,
            to_year: 2026,
            to_month: 1,
        };
        assert_eq!(query.bounds().unwrap(), ((2025, 6), (2026, 1)));

        let invalid = PeriodQuery { to_month: 12, ..query };
        assert!(matches!(
            invalid.bounds(),
            Err(EngineError::InvalidPeriod { year: 2026, month: 12 })
        ));
    }
}
