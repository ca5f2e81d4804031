//! Persisted hour bank balance.

use serde::{Deserialize, Serialize};

/// One month's hour bank balance for one employee.
///
/// Keyed by `(employee_id, year, month)` where `month` is zero-based
/// (0 = January), the convention the balances were always stored with.
/// Each save overwrites the previous value; no history is kept.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::HourBankEntry;
///
/// let entry = HourBankEntry {
///     employee_id: "emp_001".to_string(),
///     year: 2026,
///     month: 0,
///     balance_minutes: -150,
/// };
/// assert!(entry.is_deficit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBankEntry {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// Calendar year.
    pub year: i32,
    /// Zero-based month (0 = January).
    pub month: u32,
    /// Signed balance in minutes.
    pub balance_minutes: i64,
}

impl HourBankEntry {
    /// Returns true if the balance is negative.
    pub fn is_deficit(&self) -> bool {
        self.balance_minutes < 0
    }

    /// Ordering key used for period sums.
    pub fn period(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}
