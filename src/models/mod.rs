//! Core data models for the Timesheet Engine.
//!
//! This module contains the persisted and configured domain models. Derived
//! values (calendar days, daily computations, monthly totals) live next to
//! the calculations that produce them.

mod employee;
mod hour_bank;
mod punch_record;

pub use employee::{Category, Employee, Role};
pub use hour_bank::HourBankEntry;
pub use punch_record::{DailyPunchRecord, DayType};
