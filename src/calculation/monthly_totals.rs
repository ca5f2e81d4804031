//! Monthly aggregation of daily figures.
//!
//! Every calendar day of the month is evaluated, whether or not a record
//! exists for it, and folded into [`MonthlyTotals`] according to its day type:
//!
//! - Holiday: worked minutes go to `holiday_worked_minutes` only
//! - Day off / absence: the day's scheduled minutes are charged to both delay
//!   and expected, punches are ignored
//! - Normal (Saturday and Sunday included): everything is accumulated

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DailyPunchRecord, DayType};

use super::calendar::{CalendarDay, generate_month_days};
use super::daily_hours::{DailyComputation, calculate_daily_hours, scheduled_minutes};
use super::hour_bank::{
    BalanceResult, TIER_1_MULTIPLIER, TIER_2_MULTIPLIER, calculate_balance, scale_minutes,
};
use super::short_lunch::has_short_lunch;

/// Aggregated minutes for one employee and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Worked minutes on Normal days.
    pub total_worked_minutes: i64,
    /// Delay on Normal days plus the full charge for days off and absences.
    pub total_delay_minutes: i64,
    /// Expected minutes, including the charge for days off and absences.
    pub total_expected_minutes: i64,
    /// Tier 1 overtime on Normal days.
    pub total_tier1_minutes: i64,
    /// Tier 2 overtime on Normal days.
    pub total_tier2_minutes: i64,
    /// Minutes worked on holidays, kept out of every other total.
    pub holiday_worked_minutes: i64,
    /// `round(total_tier1_minutes * 1.5)`.
    pub tier1_scaled_minutes: i64,
    /// `round(total_tier2_minutes * 2)`.
    pub tier2_scaled_minutes: i64,
}

impl MonthlyTotals {
    fn add_day(&mut self, day: &TimesheetDay) {
        let computation = &day.computation;
        match day.day_type {
            DayType::Holiday => {
                self.holiday_worked_minutes += computation.worked_minutes;
            }
            day_type if day_type.is_penalized() => {
                self.total_delay_minutes += day.charged_delay_minutes;
                self.total_expected_minutes += day.charged_delay_minutes;
            }
            _ => {
                self.total_worked_minutes += computation.worked_minutes;
                self.total_delay_minutes += computation.delay_minutes;
                self.total_expected_minutes += computation.expected_minutes;
                self.total_tier1_minutes += computation.overtime_tier1_minutes;
                self.total_tier2_minutes += computation.overtime_tier2_minutes;
            }
        }
    }

    fn apply_scaling(&mut self) {
        self.tier1_scaled_minutes = scale_minutes(self.total_tier1_minutes, TIER_1_MULTIPLIER);
        self.tier2_scaled_minutes = scale_minutes(self.total_tier2_minutes, TIER_2_MULTIPLIER);
    }

    /// Total overtime before weighting.
    pub fn total_overtime_minutes(&self) -> i64 {
        self.total_tier1_minutes + self.total_tier2_minutes
    }
}

/// One row of a monthly timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetDay {
    /// The calendar day.
    pub calendar_day: CalendarDay,
    /// The stored record, if the day has one.
    pub record: Option<DailyPunchRecord>,
    /// The day type in effect (Normal when there is no record).
    pub day_type: DayType,
    /// Daily figures, with overtime zeroed on holidays.
    pub computation: DailyComputation,
    /// Whether the lunch break was under one hour.
    pub short_lunch: bool,
    /// Delay this day contributes to the month total.
    pub charged_delay_minutes: i64,
}

/// Evaluates one calendar day against its record.
///
/// # Arguments
///
/// * `calendar_day` - The day being evaluated
/// * `record` - The day's record; `None` is an empty Normal day
pub fn evaluate_day(calendar_day: &CalendarDay, record: Option<&DailyPunchRecord>) -> TimesheetDay {
    let day_type = record.map(|r| r.day_type).unwrap_or_default();
    let mut computation =
        calculate_daily_hours(record, calendar_day.is_saturday, calendar_day.is_sunday);

    let charged_delay_minutes = match day_type {
        DayType::Holiday => {
            computation.overtime_tier1_minutes = 0;
            computation.overtime_tier2_minutes = 0;
            0
        }
        day_type if day_type.is_penalized() => {
            scheduled_minutes(calendar_day.is_saturday, calendar_day.is_sunday)
        }
        _ => computation.delay_minutes,
    };

    TimesheetDay {
        calendar_day: calendar_day.clone(),
        record: record.cloned(),
        day_type,
        computation,
        short_lunch: has_short_lunch(record),
        charged_delay_minutes,
    }
}

fn index_by_date(records: &[DailyPunchRecord]) -> HashMap<NaiveDate, &DailyPunchRecord> {
    records.iter().map(|record| (record.date, record)).collect()
}

fn evaluate_month(year: i32, month: u32, records: &[DailyPunchRecord]) -> Vec<TimesheetDay> {
    let by_date = index_by_date(records);
    generate_month_days(year, month)
        .iter()
        .map(|day| evaluate_day(day, by_date.get(&day.date).copied()))
        .collect()
}

fn sum_days(days: &[TimesheetDay]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();
    for day in days {
        totals.add_day(day);
    }
    totals.apply_scaling();
    totals
}

/// Aggregates one employee's records over a month.
///
/// Records outside the month are ignored. When two records share a date the
/// later one wins.
///
/// # Arguments
///
/// * `year` - Calendar year
/// * `month` - Zero-based month (0 = January)
/// * `records` - The employee's punch records
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_monthly_totals;
/// use timesheet_engine::models::{DailyPunchRecord, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-03-02 is a Monday
/// let day_off = DailyPunchRecord::new("emp_001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_day_type(DayType::DayOff);
///
/// let with_day_off = calculate_monthly_totals(2026, 2, &[day_off]);
/// let without = calculate_monthly_totals(2026, 2, &[]);
/// assert_eq!(with_day_off.total_delay_minutes, without.total_delay_minutes);
/// assert_eq!(with_day_off.total_expected_minutes, without.total_expected_minutes);
/// ```
pub fn calculate_monthly_totals(year: i32, month: u32, records: &[DailyPunchRecord]) -> MonthlyTotals {
    sum_days(&evaluate_month(year, month, records))
}

/// A month of timesheet rows with its totals and balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTimesheet {
    /// The employee the timesheet belongs to.
    pub employee_id: String,
    /// Calendar year.
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    /// One row per calendar day.
    pub days: Vec<TimesheetDay>,
    /// Aggregated minutes.
    pub totals: MonthlyTotals,
    /// The balance the totals produce.
    pub balance: BalanceResult,
}

/// Builds the full timesheet for one employee and month.
pub fn build_monthly_timesheet(
    employee_id: &str,
    year: i32,
    month: u32,
    records: &[DailyPunchRecord],
) -> MonthlyTimesheet {
    let days = evaluate_month(year, month, records);
    let totals = sum_days(&days);

    MonthlyTimesheet {
        employee_id: employee_id.to_string(),
        year,
        month,
        days,
        totals,
        balance: calculate_balance(&totals),
    }
}
