//! Hour bank balance rule and balance totals.
//!
//! At the end of a month the overtime and delay totals are folded into one
//! signed balance that is persisted per employee and month. Yearly and
//! period totals are plain sums of those persisted balances.
//!
//! ## Balance rule
//!
//! - Tier 1 overtime exceeds delay: `round((tier1 - delay) * 1.5) + tier2_scaled`
//! - Otherwise: `round(tier1 - delay)`, tier 2 overtime is not credited

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::HourBankEntry;

use super::monthly_totals::MonthlyTotals;

/// Weight applied to tier 1 overtime.
pub const TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Weight applied to tier 2 overtime.
pub const TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds to the nearest whole minute, halves rounding up.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::round_minutes;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_minutes(Decimal::from_str("1.5").unwrap()), 2);
/// assert_eq!(round_minutes(Decimal::from_str("-1.5").unwrap()), -1);
/// assert_eq!(round_minutes(Decimal::from_str("224.4").unwrap()), 224);
/// ```
pub fn round_minutes(value: Decimal) -> i64 {
    (value + HALF).floor().to_i64().unwrap_or_default()
}

/// Multiplies a minute count by a weight and rounds to whole minutes.
pub fn scale_minutes(minutes: i64, multiplier: Decimal) -> i64 {
    round_minutes(Decimal::from(minutes) * multiplier)
}

/// Which side of the balance rule was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceBranch {
    /// Tier 1 overtime exceeded delay: weighted credit plus tier 2.
    OvertimeCredit,
    /// Delay matched or exceeded tier 1 overtime: unweighted difference.
    DelayDebit,
}

/// The outcome of the balance rule for one month.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{calculate_balance, BalanceBranch, MonthlyTotals};
///
/// let totals = MonthlyTotals {
///     total_tier1_minutes: 200,
///     total_delay_minutes: 50,
///     ..MonthlyTotals::default()
/// };
/// let result = calculate_balance(&totals);
/// assert_eq!(result.balance_minutes, 225);
/// assert_eq!(result.branch, BalanceBranch::OvertimeCredit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// Signed minutes to persist as the month's hour bank balance.
    pub balance_minutes: i64,
    /// `tier1 - delay` before any weighting.
    pub net_tier1_minutes: i64,
    /// Tier 2 credit included in the balance (0 on the debit side).
    pub tier2_credit_minutes: i64,
    /// Which side of the rule produced the balance.
    pub branch: BalanceBranch,
}

/// Applies the hour bank balance rule to a month's totals.
///
/// When tier 1 overtime exceeds the delay total, the difference is weighted
/// by 1.5 and the scaled tier 2 overtime is added. Otherwise the balance is
/// the plain difference and tier 2 overtime is dropped, which makes the
/// balance jump by the full tier 2 credit when the delay crosses tier 1.
///
/// # Arguments
///
/// * `totals` - The month's aggregated totals
pub fn calculate_balance(totals: &MonthlyTotals) -> BalanceResult {
    let net_tier1_minutes = totals.total_tier1_minutes - totals.total_delay_minutes;

    if totals.total_tier1_minutes > totals.total_delay_minutes {
        let credit = scale_minutes(net_tier1_minutes, TIER_1_MULTIPLIER);
        BalanceResult {
            balance_minutes: credit + totals.tier2_scaled_minutes,
            net_tier1_minutes,
            tier2_credit_minutes: totals.tier2_scaled_minutes,
            branch: BalanceBranch::OvertimeCredit,
        }
    } else {
        BalanceResult {
            balance_minutes: round_minutes(Decimal::from(net_tier1_minutes)),
            net_tier1_minutes,
            tier2_credit_minutes: 0,
            branch: BalanceBranch::DelayDebit,
        }
    }
}

/// Builds the entry to persist for a month's balance.
pub fn hour_bank_entry(
    employee_id: &str,
    year: i32,
    month: u32,
    totals: &MonthlyTotals,
) -> HourBankEntry {
    HourBankEntry {
        employee_id: employee_id.to_string(),
        year,
        month,
        balance_minutes: calculate_balance(totals).balance_minutes,
    }
}

/// Sum of the balances persisted for one year.
pub fn annual_total(entries: &[HourBankEntry], year: i32) -> i64 {
    entries
        .iter()
        .filter(|entry| entry.year == year)
        .map(|entry| entry.balance_minutes)
        .sum()
}

/// Sum of the balances from `from` to `to`, both inclusive.
///
/// Periods are `(year, zero_based_month)` pairs and may span several years.
/// An inverted range sums to zero.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::period_total;
/// use timesheet_engine::models::HourBankEntry;
///
/// let entry = |year, month, balance_minutes| HourBankEntry {
///     employee_id: "emp_001".to_string(),
///     year,
///     month,
///     balance_minutes,
/// };
/// let entries = vec![entry(2025, 10, 60), entry(2025, 11, -30), entry(2026, 0, 90)];
///
/// assert_eq!(period_total(&entries, (2025, 11), (2026, 0)), 60);
/// assert_eq!(period_total(&entries, (2026, 0), (2025, 0)), 0);
/// ```
pub fn period_total(entries: &[HourBankEntry], from: (i32, u32), to: (i32, u32)) -> i64 {
    entries
        .iter()
        .filter(|entry| entry.period() >= from && entry.period() <= to)
        .map(|entry| entry.balance_minutes)
        .sum()
}

/// Twelve months of balances for one employee and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyOverview {
    /// Calendar year.
    pub year: i32,
    /// Balance per zero-based month; `None` where nothing was saved.
    pub months: Vec<Option<i64>>,
    /// Sum of the saved balances.
    pub annual_total_minutes: i64,
}

/// Lays out a year's persisted balances month by month.
pub fn yearly_overview(entries: &[HourBankEntry], year: i32) -> YearlyOverview {
    let mut months = vec![None; 12];
    for entry in entries.iter().filter(|entry| entry.year == year) {
        if let Some(slot) = months.get_mut(entry.month as usize) {
            *slot = Some(entry.balance_minutes);
        }
    }

    YearlyOverview {
        year,
        months,
        annual_total_minutes: annual_total(entries, year),
    }
}

/// Adds several employees' overviews of the same year month by month.
///
/// A month is `None` only when no overview has a balance for it.
pub fn combine_overviews(year: i32, overviews: &[YearlyOverview]) -> YearlyOverview {
    let mut months: Vec<Option<i64>> = vec![None; 12];
    for overview in overviews.iter().filter(|overview| overview.year == year) {
        for (slot, balance) in months.iter_mut().zip(&overview.months) {
            if let Some(balance) = balance {
                *slot = Some(slot.unwrap_or(0) + balance);
            }
        }
    }

    YearlyOverview {
        year,
        annual_total_minutes: months.iter().flatten().sum(),
        months,
    }
}
