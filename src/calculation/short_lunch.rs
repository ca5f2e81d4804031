//! Short lunch break detection.

use crate::models::DailyPunchRecord;

use super::time_codec::parse_time;

/// Lunch breaks shorter than this are flagged.
pub const MINIMUM_LUNCH_MINUTES: i64 = 60;

/// Returns true if the record's lunch break is shorter than one hour.
///
/// Both lunch punches must be present and the break must be positive; a
/// zero or negative interval is treated as a data-entry slip, not a short
/// lunch.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::has_short_lunch;
/// use timesheet_engine::models::DailyPunchRecord;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let short = DailyPunchRecord::new("emp_001", date)
///     .with_punches(Some("08:00"), Some("12:00"), Some("12:30"), Some("17:00"));
/// assert!(has_short_lunch(Some(&short)));
///
/// let full = DailyPunchRecord::new("emp_001", date)
///     .with_punches(Some("08:00"), Some("12:00"), Some("13:00"), Some("17:00"));
/// assert!(!has_short_lunch(Some(&full)));
/// ```
pub fn has_short_lunch(record: Option<&DailyPunchRecord>) -> bool {
    let Some(record) = record else {
        return false;
    };
    let (Some(lunch_out), Some(lunch_in)) = (record.lunch_out.as_deref(), record.lunch_in.as_deref())
    else {
        return false;
    };

    let interval = parse_time(Some(lunch_in)) - parse_time(Some(lunch_out));
    interval > 0 && interval < MINIMUM_LUNCH_MINUTES
}
