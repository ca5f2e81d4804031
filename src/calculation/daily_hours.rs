//! Daily hours calculation.
//!
//! Turns one day's punches into worked, expected, delay and overtime minutes.
//! Worked time follows a strict pattern match on which punches are present;
//! punch sets that match none of the known patterns count as zero.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{DailyPunchRecord, DayType};

use super::overtime::{OvertimeSplit, calculate_overtime};
use super::time_codec::parse_time;

/// Minutes expected on a regular weekday.
pub const WEEKDAY_EXPECTED_MINUTES: i64 = 480;

/// Minutes expected on a Saturday.
pub const SATURDAY_EXPECTED_MINUTES: i64 = 240;

/// Which punch combination a record carries.
///
/// [`PunchPattern::Irregular`] is the diagnostic for partial punch sets that
/// yield zero worked minutes (for example a forgotten clock-out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchPattern {
    /// No punches at all.
    Empty,
    /// Clock-in and lunch-out only: worked the morning.
    MorningOnly,
    /// Clock-in and clock-out only: no lunch break.
    Continuous,
    /// All four punches.
    Split,
    /// Any other combination; counts as zero worked minutes.
    Irregular,
}

/// The computed figures for one calendar day.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{calculate_daily_hours, PunchPattern};
/// use timesheet_engine::models::DailyPunchRecord;
/// use chrono::NaiveDate;
///
/// let record = DailyPunchRecord::new("emp_001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_punches(Some("08:00"), Some("12:00"), Some("13:00"), Some("17:00"));
///
/// let day = calculate_daily_hours(Some(&record), false, false);
/// assert_eq!(day.worked_minutes, 480);
/// assert_eq!(day.delay_minutes, 0);
/// assert_eq!(day.punch_pattern, PunchPattern::Split);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyComputation {
    /// Minutes worked (may be negative when punches run backwards).
    pub worked_minutes: i64,
    /// Minutes the employee was expected to work.
    pub expected_minutes: i64,
    /// Shortfall against the expectation, never negative.
    pub delay_minutes: i64,
    /// First tier of overtime (at most 120 minutes).
    pub overtime_tier1_minutes: i64,
    /// Second tier of overtime.
    pub overtime_tier2_minutes: i64,
    /// The punch combination the worked minutes were derived from.
    pub punch_pattern: PunchPattern,
}

impl DailyComputation {
    /// Tier 1 plus tier 2 overtime.
    pub fn overtime_minutes(&self) -> i64 {
        self.overtime_tier1_minutes + self.overtime_tier2_minutes
    }
}

/// Minutes expected on a day.
///
/// Sundays, days off and holidays expect nothing. Saturdays expect 240
/// minutes and every other day 480. Absences keep the regular expectation so
/// that they are charged in full.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::expected_minutes;
/// use timesheet_engine::models::DayType;
///
/// assert_eq!(expected_minutes(false, false, DayType::Normal), 480);
/// assert_eq!(expected_minutes(true, false, DayType::Normal), 240);
/// assert_eq!(expected_minutes(false, true, DayType::Absence), 0);
/// assert_eq!(expected_minutes(false, false, DayType::Holiday), 0);
/// ```
pub fn expected_minutes(is_saturday: bool, is_sunday: bool, day_type: DayType) -> i64 {
    if is_sunday {
        return 0;
    }
    match day_type {
        DayType::DayOff | DayType::Holiday => 0,
        DayType::Normal | DayType::Absence => scheduled_minutes(is_saturday, is_sunday),
    }
}

/// Minutes a day is scheduled for, ignoring its day type.
///
/// This is the amount charged as delay when a day is marked as a day off or
/// an absence.
pub fn scheduled_minutes(is_saturday: bool, is_sunday: bool) -> i64 {
    if is_sunday {
        0
    } else if is_saturday {
        SATURDAY_EXPECTED_MINUTES
    } else {
        WEEKDAY_EXPECTED_MINUTES
    }
}

/// Reads a punch as minutes after midnight.
///
/// A blank or unreadable punch reads as zero and is then treated as missing.
fn punch_minutes(punch: &Option<String>) -> Option<i64> {
    Some(parse_time(punch.as_deref())).filter(|minutes| *minutes != 0)
}

/// Classifies which punch combination a record carries.
pub fn classify_punches(record: &DailyPunchRecord) -> PunchPattern {
    let punches = (
        punch_minutes(&record.clock_in),
        punch_minutes(&record.lunch_out),
        punch_minutes(&record.lunch_in),
        punch_minutes(&record.clock_out),
    );

    match punches {
        (None, None, None, None) => PunchPattern::Empty,
        (Some(_), Some(_), None, None) => PunchPattern::MorningOnly,
        (Some(_), None, None, Some(_)) => PunchPattern::Continuous,
        (Some(_), Some(_), Some(_), Some(_)) => PunchPattern::Split,
        _ => PunchPattern::Irregular,
    }
}

/// Minutes worked according to a record's punches.
///
/// Days off and missing records count as zero. Otherwise:
/// - clock-in + lunch-out only: `lunch_out - clock_in`
/// - clock-in + clock-out only: `clock_out - clock_in`
/// - all four punches: `(lunch_out - clock_in) + (clock_out - lunch_in)`
/// - anything else: zero
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::worked_minutes;
/// use timesheet_engine::models::DailyPunchRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
/// let record = DailyPunchRecord::new("emp_001", date)
///     .with_punches(Some("08:00"), None, None, Some("12:00"));
/// assert_eq!(worked_minutes(Some(&record)), 240);
///
/// // Lunch punched back in but no clock-out: not a recognized pattern.
/// let partial = DailyPunchRecord::new("emp_001", date)
///     .with_punches(Some("08:00"), Some("12:00"), Some("13:00"), None);
/// assert_eq!(worked_minutes(Some(&partial)), 0);
/// ```
pub fn worked_minutes(record: Option<&DailyPunchRecord>) -> i64 {
    let Some(record) = record else {
        return 0;
    };
    if record.day_type == DayType::DayOff {
        return 0;
    }

    let clock_in = parse_time(record.clock_in.as_deref());
    let lunch_out = parse_time(record.lunch_out.as_deref());
    let lunch_in = parse_time(record.lunch_in.as_deref());
    let clock_out = parse_time(record.clock_out.as_deref());

    match classify_punches(record) {
        PunchPattern::MorningOnly => lunch_out - clock_in,
        PunchPattern::Continuous => clock_out - clock_in,
        PunchPattern::Split => (lunch_out - clock_in) + (clock_out - lunch_in),
        PunchPattern::Empty => 0,
        PunchPattern::Irregular => {
            warn!(
                employee_id = %record.employee_id,
                date = %record.date,
                clock_in = ?record.clock_in,
                lunch_out = ?record.lunch_out,
                lunch_in = ?record.lunch_in,
                clock_out = ?record.clock_out,
                "Unrecognized punch pattern, counting zero worked minutes"
            );
            0
        }
    }
}

/// Shortfall of worked minutes against the expectation, never negative.
pub fn delay_minutes(worked_minutes: i64, expected_minutes: i64) -> i64 {
    (expected_minutes - worked_minutes).max(0)
}

/// Computes all daily figures for one day.
///
/// A missing record is treated as an empty Normal day; the weekday flags
/// still decide the expectation. Holiday overtime is not suppressed here:
/// the monthly aggregation applies that override.
///
/// # Arguments
///
/// * `record` - The day's punches, if any were recorded
/// * `is_saturday` - Whether the day is a Saturday
/// * `is_sunday` - Whether the day is a Sunday
pub fn calculate_daily_hours(
    record: Option<&DailyPunchRecord>,
    is_saturday: bool,
    is_sunday: bool,
) -> DailyComputation {
    let day_type = record.map(|r| r.day_type).unwrap_or_default();
    let punch_pattern = record.map_or(PunchPattern::Empty, classify_punches);

    let worked = worked_minutes(record);
    let expected = expected_minutes(is_saturday, is_sunday, day_type);
    let OvertimeSplit {
        tier1_minutes,
        tier2_minutes,
    } = calculate_overtime(worked, is_saturday);

    DailyComputation {
        worked_minutes: worked,
        expected_minutes: expected,
        delay_minutes: delay_minutes(worked, expected),
        overtime_tier1_minutes: tier1_minutes,
        overtime_tier2_minutes: tier2_minutes,
        punch_pattern,
    }
}
