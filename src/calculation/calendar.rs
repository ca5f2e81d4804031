//! Month calendar generation.
//!
//! Months are addressed with a zero-based index (0 = January), matching how
//! timesheets and hour bank balances are keyed.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One day of a generated month.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::CalendarDay;
/// use chrono::{NaiveDate, Weekday};
///
/// let day = CalendarDay::from_date(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
/// assert_eq!(day.day, 7);
/// assert_eq!(day.weekday, Weekday::Sat);
/// assert!(day.is_saturday);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of the month, starting at 1.
    pub day: u32,
    /// Day of the week.
    pub weekday: Weekday,
    /// Full English weekday name.
    pub weekday_name: String,
    /// Whether the day is a Saturday.
    pub is_saturday: bool,
    /// Whether the day is a Sunday.
    pub is_sunday: bool,
    /// The calendar date, used as the day's key.
    pub date: NaiveDate,
}

impl CalendarDay {
    /// Builds the calendar entry for a date.
    pub fn from_date(date: NaiveDate) -> Self {
        let weekday = date.weekday();
        Self {
            day: date.day(),
            weekday,
            weekday_name: weekday_name(weekday).to_string(),
            is_saturday: weekday == Weekday::Sat,
            is_sunday: weekday == Weekday::Sun,
            date,
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Number of days in a month, or 0 for a month index outside `0..=11` or a
/// year chrono cannot represent.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1), 29);
/// assert_eq!(days_in_month(2025, 1), 28);
/// assert_eq!(days_in_month(2025, 11), 31);
/// assert_eq!(days_in_month(2025, 12), 0);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month > 11 {
        return 0;
    }
    let next = if month == 11 {
        year.checked_add(1).map(|next_year| (next_year, 1))
    } else {
        Some((year, month + 2))
    };
    next.and_then(|(next_year, next_month)| NaiveDate::from_ymd_opt(next_year, next_month, 1))
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Generates every day of a month in order.
///
/// # Arguments
///
/// * `year` - Calendar year
/// * `month` - Zero-based month (0 = January)
///
/// # Returns
///
/// One [`CalendarDay`] per day from the 1st to the last day of the month,
/// leap years included. An out-of-range month yields an empty sequence.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::generate_month_days;
///
/// let february = generate_month_days(2024, 1);
/// assert_eq!(february.len(), 29);
/// assert_eq!(february[0].day, 1);
/// assert_eq!(february[28].day, 29);
/// ```
pub fn generate_month_days(year: i32, month: u32) -> Vec<CalendarDay> {
    let count = days_in_month(year, month);
    if count == 0 {
        debug!(year, month, "Month outside calendar range, no days generated");
        return Vec::new();
    }

    (1..=count)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month + 1, day))
        .map(CalendarDay::from_date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_february_has_29_days() {
        assert_eq!(generate_month_days(2024, 1).len(), 29);
        assert_eq!(generate_month_days(2000, 1).len(), 29);
    }

    #[test]
    fn test_regular_february_has_28_days() {
        assert_eq!(generate_month_days(2025, 1).len(), 28);
        assert_eq!(generate_month_days(1900, 1).len(), 28);
    }

    #[test]
    fn test_month_lengths_across_year() {
        let lengths: Vec<usize> = (0..12)
            .map(|month| generate_month_days(2026, month).len())
            .collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn test_days_are_ordered_and_contiguous() {
        let days = generate_month_days(2026, 2);
        for (index, day) in days.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
            assert_eq!(day.date.month(), 3);
        }
    }

    #[test]
    fn test_weekday_classification() {
        // March 2026 starts on a Sunday
        let days = generate_month_days(2026, 2);
        assert!(days[0].is_sunday);
        assert_eq!(days[0].weekday_name, "Sunday");
        assert!(days[6].is_saturday);
        assert_eq!(days[6].weekday, Weekday::Sat);

        let monday = &days[1];
        assert!(!monday.is_saturday);
        assert!(!monday.is_sunday);
        assert_eq!(monday.weekday_name, "Monday");
    }

    #[test]
    fn test_weekends_per_month() {
        let days = generate_month_days(2026, 2);
        let saturdays = days.iter().filter(|d| d.is_saturday).count();
        let sundays = days.iter().filter(|d| d.is_sunday).count();
        assert_eq!(saturdays, 4);
        assert_eq!(sundays, 5);
    }

    #[test]
    fn test_out_of_range_month_is_empty() {
        assert!(generate_month_days(2026, 12).is_empty());
        assert_eq!(days_in_month(2026, 99), 0);
    }

    #[test]
    fn test_unrepresentable_year_is_empty() {
        assert_eq!(days_in_month(i32::MAX, 11), 0);
        assert_eq!(days_in_month(i32::MAX, 0), 0);
        assert_eq!(days_in_month(i32::MIN, 0), 0);
        assert!(generate_month_days(i32::MAX, 11).is_empty());
    }

    #[test]
    fn test_generation_is_repeatable() {
        assert_eq!(generate_month_days(2026, 9), generate_month_days(2026, 9));
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let days = generate_month_days(2025, 11);
        assert_eq!(days.len(), 31);
        assert_eq!(days[30].date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }
}
