//! In-memory [`TimesheetStore`] backed by ordered maps.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::calculation::days_in_month;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyPunchRecord, HourBankEntry};

use super::TimesheetStore;

type RecordKey = (String, NaiveDate);
type BalanceKey = (String, i32, u32);

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<BTreeMap<RecordKey, DailyPunchRecord>>,
    balances: RwLock<BTreeMap<BalanceKey, HourBankEntry>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn month_bounds(year: i32, month: u32) -> EngineResult<(NaiveDate, NaiveDate)> {
        let last_day = days_in_month(year, month);
        if last_day == 0 {
            return Err(EngineError::InvalidPeriod { year, month });
        }
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1);
        let last = NaiveDate::from_ymd_opt(year, month + 1, last_day);
        match (first, last) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => Err(EngineError::InvalidPeriod { year, month }),
        }
    }
}

#[async_trait]
impl TimesheetStore for InMemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn fetch_month_records(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> EngineResult<Vec<DailyPunchRecord>> {
        let (first, last) = Self::month_bounds(year, month)?;
        let start = (employee_id.to_string(), first);
        let end = (employee_id.to_string(), last);

        Ok(self
            .records
            .read()
            .await
            .range(start..=end)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn upsert_record(&self, record: DailyPunchRecord) -> EngineResult<DailyPunchRecord> {
        let key = (record.employee_id.clone(), record.date);
        self.records.write().await.insert(key, record.clone());
        Ok(record)
    }

    async fn upsert_balance(&self, entry: HourBankEntry) -> EngineResult<HourBankEntry> {
        if entry.month > 11 {
            return Err(EngineError::InvalidPeriod {
                year: entry.year,
                month: entry.month,
            });
        }
        let key = (entry.employee_id.clone(), entry.year, entry.month);
        self.balances.write().await.insert(key, entry.clone());
        Ok(entry)
    }

    async fn fetch_balances(&self, employee_id: &str, year: i32) -> EngineResult<Vec<HourBankEntry>> {
        let start = (employee_id.to_string(), year, 0);
        let end = (employee_id.to_string(), year, 11);

        Ok(self
            .balances
            .read()
            .await
            .range(start..=end)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    async fn fetch_all_balances(&self, employee_id: &str) -> EngineResult<Vec<HourBankEntry>> {
        Ok(self
            .balances
            .read()
            .await
            .values()
            .filter(|entry| entry.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn all_records(&self) -> EngineResult<Vec<DailyPunchRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn all_balances(&self) -> EngineResult<Vec<HourBankEntry>> {
        Ok(self.balances.read().await.values().cloned().collect())
    }
}
