//! Persistence collaborator.
//!
//! The arithmetic core never touches storage. Handlers read and write punch
//! records and hour bank balances through the [`TimesheetStore`] trait, so
//! the hosted backend can be swapped for [`InMemoryStore`] in tests and local
//! runs.

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{DailyPunchRecord, HourBankEntry};

mod memory;

pub use memory::InMemoryStore;

/// Record and balance persistence.
///
/// Writes are last-write-wins upserts: records are keyed by
/// `(employee_id, date)` and balances by `(employee_id, year, month)`.
#[async_trait]
pub trait TimesheetStore: Send + Sync + 'static {
    /// Short name of the backend, used in logs.
    fn backend_tag(&self) -> &'static str;

    /// Records of one employee within a zero-based month, ordered by date.
    async fn fetch_month_records(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<DailyPunchRecord>>;

    /// Inserts or replaces the record for `(employee_id, date)`.
    async fn upsert_record(&self, record: DailyPunchRecord) -> EngineResult<DailyPunchRecord>;

    /// Inserts or replaces the balance for `(employee_id, year, month)`.
    async fn upsert_balance(&self, entry: HourBankEntry) -> EngineResult<HourBankEntry>;

    /// Balances of one employee for one year, ordered by month.
    async fn fetch_balances(&self, employee_id: &str, year: i32) -> EngineResult<Vec<HourBankEntry>>;

    /// Every balance of one employee, ordered by period.
    async fn fetch_all_balances(&self, employee_id: &str) -> EngineResult<Vec<HourBankEntry>>;

    /// Every stored record.
    async fn all_records(&self) -> EngineResult<Vec<DailyPunchRecord>>;

    /// Every stored balance.
    async fn all_balances(&self) -> EngineResult<Vec<HourBankEntry>>;
}
