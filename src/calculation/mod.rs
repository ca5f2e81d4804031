//! Timesheet arithmetic.
//!
//! Pure functions that turn clock punches into worked, expected, delay and
//! overtime minutes, fold them into monthly totals and apply the hour bank
//! balance rule. Nothing in this module performs I/O.

mod calendar;
mod daily_hours;
mod hour_bank;
mod monthly_totals;
mod overtime;
mod short_lunch;
mod time_codec;

pub use calendar::{CalendarDay, days_in_month, generate_month_days};
pub use daily_hours::{
    DailyComputation, PunchPattern, SATURDAY_EXPECTED_MINUTES, WEEKDAY_EXPECTED_MINUTES,
    calculate_daily_hours, classify_punches, delay_minutes, expected_minutes, scheduled_minutes,
    worked_minutes,
};
pub use hour_bank::{
    BalanceBranch, BalanceResult, TIER_1_MULTIPLIER, TIER_2_MULTIPLIER, YearlyOverview,
    annual_total, calculate_balance, combine_overviews, hour_bank_entry, period_total,
    round_minutes, scale_minutes, yearly_overview,
};
pub use monthly_totals::{
    MonthlyTimesheet, MonthlyTotals, TimesheetDay, build_monthly_timesheet,
    calculate_monthly_totals, evaluate_day,
};
pub use overtime::{
    OVERTIME_TIER_1_CAP_MINUTES, OvertimeSplit, SATURDAY_OVERTIME_THRESHOLD_MINUTES,
    WEEKDAY_OVERTIME_THRESHOLD_MINUTES, calculate_overtime,
};
pub use short_lunch::{MINIMUM_LUNCH_MINUTES, has_short_lunch};
pub use time_codec::{ZERO_SENTINEL, format_clock, format_minutes, parse_time};
