//! Timesheet engine for punch-clock records.
//!
//! This crate converts raw clock punches into worked, delay and overtime
//! minutes, aggregates them per month and applies the hour bank balance
//! rule. An HTTP API, a persistence trait and CSV backups sit around that
//! arithmetic core.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
