//! HTTP API module for the timesheet engine.
//!
//! This module provides the REST API endpoints for editing punch records,
//! reading monthly timesheets, saving hour bank balances and downloading
//! CSV backups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PeriodQuery, RecordRequest};
pub use response::{
    ApiError, ApiErrorResponse, CategoryEmployeeRow, CategoryHourBankResponse, PeriodTotalResponse,
    SavedBalanceResponse, YearlyHourBankResponse,
};
pub use state::AppState;
