//! Daily punch record model and the day type classification.
//!
//! A [`DailyPunchRecord`] holds the four clock punches captured for one
//! employee on one calendar date, exactly as they were typed ("HH:MM").

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Classification of a calendar day controlling which accounting rules apply.
///
/// Stored in snake_case. The legacy dashboard tags
/// (`feriado`, `folga`, `falta`) are still accepted when reading.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::DayType;
///
/// let day_type: DayType = serde_json::from_str("\"folga\"").unwrap();
/// assert_eq!(day_type, DayType::DayOff);
/// assert_eq!(serde_json::to_string(&day_type).unwrap(), "\"day_off\"");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// A regular working day (weekday, Saturday or Sunday).
    #[default]
    Normal,
    /// Public holiday: hours worked are tracked apart and never affect the balance.
    #[serde(alias = "feriado")]
    Holiday,
    /// Day off: no expectation on the day itself, penalized in the month totals.
    #[serde(alias = "folga")]
    DayOff,
    /// Unjustified absence: keeps the normal expectation and is penalized.
    #[serde(alias = "falta")]
    Absence,
}

impl DayType {
    /// Returns true for the day types that are fully charged as delay.
    pub fn is_penalized(self) -> bool {
        matches!(self, DayType::DayOff | DayType::Absence)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Normal => write!(f, "normal"),
            DayType::Holiday => write!(f, "holiday"),
            DayType::DayOff => write!(f, "day_off"),
            DayType::Absence => write!(f, "absence"),
        }
    }
}

/// One employee's punches for one calendar date.
///
/// Records are keyed by `(employee_id, date)` and replaced wholesale on every
/// edit. Punches are independent: no ordering between them is validated.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DailyPunchRecord, DayType};
/// use chrono::NaiveDate;
///
/// let record = DailyPunchRecord::new("emp_001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_punches(Some("08:00"), Some("12:00"), Some("13:00"), Some("17:00"));
///
/// assert_eq!(record.clock_in.as_deref(), Some("08:00"));
/// assert_eq!(record.day_type, DayType::Normal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPunchRecord {
    /// The employee the punches belong to.
    pub employee_id: String,
    /// The calendar date of the punches.
    pub date: NaiveDate,
    /// Morning arrival.
    #[serde(default, deserialize_with = "deserialize_punch")]
    pub clock_in: Option<String>,
    /// Departure for lunch.
    #[serde(default, deserialize_with = "deserialize_punch")]
    pub lunch_out: Option<String>,
    /// Return from lunch.
    #[serde(default, deserialize_with = "deserialize_punch")]
    pub lunch_in: Option<String>,
    /// End of day departure.
    #[serde(default, deserialize_with = "deserialize_punch")]
    pub clock_out: Option<String>,
    /// How the day is accounted for.
    #[serde(default)]
    pub day_type: DayType,
}

impl DailyPunchRecord {
    /// Creates an empty Normal record for the given employee and date.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            clock_in: None,
            lunch_out: None,
            lunch_in: None,
            clock_out: None,
            day_type: DayType::Normal,
        }
    }

    /// Replaces all four punches. Empty strings are stored as absent.
    pub fn with_punches(
        mut self,
        clock_in: Option<&str>,
        lunch_out: Option<&str>,
        lunch_in: Option<&str>,
        clock_out: Option<&str>,
    ) -> Self {
        self.clock_in = normalize_punch(clock_in);
        self.lunch_out = normalize_punch(lunch_out);
        self.lunch_in = normalize_punch(lunch_in);
        self.clock_out = normalize_punch(clock_out);
        self
    }

    /// Sets the day type.
    pub fn with_day_type(mut self, day_type: DayType) -> Self {
        self.day_type = day_type;
        self
    }
}

fn normalize_punch(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// The backend hands back `""` or `null` for an unset punch.
fn deserialize_punch<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_punch(value.as_deref()))
}
