//! HTTP request handlers for the timesheet API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    MonthlyTimesheet, build_monthly_timesheet, format_minutes, hour_bank_entry, period_total,
    yearly_overview,
};
use crate::error::EngineError;
use crate::export::{employees_to_csv, hour_bank_to_csv, records_to_csv};
use crate::models::{DailyPunchRecord, Employee};

use super::request::{PeriodQuery, RecordRequest, validate_month};
use super::response::{
    ApiError, ApiErrorResponse, CategoryEmployeeRow, CategoryHourBankResponse, PeriodTotalResponse,
    SavedBalanceResponse, YearlyHourBankResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route(
            "/employees/:employee_id/timesheets/:year/:month",
            get(timesheet_handler),
        )
        .route("/employees/:employee_id/records/:date", put(upsert_record_handler))
        .route("/employees/:employee_id/hour-bank", get(period_total_handler))
        .route(
            "/employees/:employee_id/hour-bank/:year",
            get(yearly_hour_bank_handler),
        )
        .route(
            "/employees/:employee_id/hour-bank/:year/:month",
            post(save_balance_handler),
        )
        .route(
            "/categories/:category_id/hour-bank/:year",
            get(category_hour_bank_handler),
        )
        .route("/backup/records.csv", get(records_backup_handler))
        .route("/backup/hour-bank.csv", get(hour_bank_backup_handler))
        .route("/backup/employees.csv", get(employees_backup_handler))
        .with_state(state)
}

/// Logs a failed request and converts the error into a response.
fn reject(correlation_id: Uuid, error: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    error.into()
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the bad field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for GET /employees.
///
/// Returns the roster sorted by name.
async fn list_employees_handler(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.config().employees().to_vec())
}

/// Handler for GET /employees/:employee_id/timesheets/:year/:month.
///
/// Builds the month's timesheet: one row per calendar day, the totals and
/// the balance those totals would produce.
async fn timesheet_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<MonthlyTimesheet>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year,
        month,
        "Building monthly timesheet"
    );

    state
        .config()
        .get_employee(&employee_id)
        .map_err(|e| reject(correlation_id, e))?;
    validate_month(year, month).map_err(|e| reject(correlation_id, e))?;

    let start_time = Instant::now();
    let records = state
        .store()
        .fetch_month_records(&employee_id, year, month)
        .await
        .map_err(|e| reject(correlation_id, e))?;
    let timesheet = build_monthly_timesheet(&employee_id, year, month, &records);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        records = records.len(),
        overtime_minutes = timesheet.totals.total_overtime_minutes(),
        balance_minutes = timesheet.balance.balance_minutes,
        duration_us = start_time.elapsed().as_micros() as u64,
        "Timesheet built"
    );
    Ok(Json(timesheet))
}

/// Handler for PUT /employees/:employee_id/records/:date.
///
/// Replaces the employee's record for the date.
async fn upsert_record_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, NaiveDate)>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<Json<DailyPunchRecord>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        "Saving punch record"
    );

    let Json(request) = payload.map_err(|r| json_rejection_error(correlation_id, r))?;
    state
        .config()
        .get_employee(&employee_id)
        .map_err(|e| reject(correlation_id, e))?;

    let record = request
        .into_record(&employee_id, date)
        .map_err(|e| reject(correlation_id, e))?;
    let saved = state
        .store()
        .upsert_record(record)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        date = %date,
        day_type = %saved.day_type,
        "Punch record saved"
    );
    Ok(Json(saved))
}

/// Handler for POST /employees/:employee_id/hour-bank/:year/:month.
///
/// Computes the month's balance from the stored records and persists it,
/// overwriting any earlier value.
async fn save_balance_handler(
    State(state): State<AppState>,
    Path((employee_id, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<SavedBalanceResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year,
        month,
        "Saving hour bank balance"
    );

    state
        .config()
        .get_employee(&employee_id)
        .map_err(|e| reject(correlation_id, e))?;
    validate_month(year, month).map_err(|e| reject(correlation_id, e))?;

    let records = state
        .store()
        .fetch_month_records(&employee_id, year, month)
        .await
        .map_err(|e| reject(correlation_id, e))?;
    let timesheet = build_monthly_timesheet(&employee_id, year, month, &records);
    let entry = state
        .store()
        .upsert_balance(hour_bank_entry(&employee_id, year, month, &timesheet.totals))
        .await
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year,
        month,
        balance_minutes = entry.balance_minutes,
        deficit = entry.is_deficit(),
        "Hour bank balance saved"
    );
    Ok(Json(SavedBalanceResponse {
        entry,
        balance: timesheet.balance,
        totals: timesheet.totals,
    }))
}

/// Handler for GET /employees/:employee_id/hour-bank/:year.
async fn yearly_hour_bank_handler(
    State(state): State<AppState>,
    Path((employee_id, year)): Path<(String, i32)>,
) -> Result<Json<YearlyHourBankResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        year,
        "Loading yearly hour bank"
    );

    state
        .config()
        .get_employee(&employee_id)
        .map_err(|e| reject(correlation_id, e))?;
    let entries = state
        .store()
        .fetch_balances(&employee_id, year)
        .await
        .map_err(|e| reject(correlation_id, e))?;

    Ok(Json(YearlyHourBankResponse::new(
        employee_id,
        yearly_overview(&entries, year),
    )))
}

/// Handler for GET /categories/:category_id/hour-bank/:year.
///
/// Lays out every employee of the category month by month, with the
/// category's monthly and annual sums.
async fn category_hour_bank_handler(
    State(state): State<AppState>,
    Path((category_id, year)): Path<(String, i32)>,
) -> Result<Json<CategoryHourBankResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        category_id = %category_id,
        year,
        "Loading category hour bank"
    );

    let config = state.config();
    let category = config
        .get_category(&category_id)
        .ok_or_else(|| EngineError::CategoryNotFound {
            id: category_id.clone(),
        })
        .map_err(|e| reject(correlation_id, e))?;

    let mut rows = Vec::new();
    for employee in config.employees_in_category(&category.id) {
        let entries = state
            .store()
            .fetch_balances(&employee.id, year)
            .await
            .map_err(|e| reject(correlation_id, e))?;
        rows.push(CategoryEmployeeRow::new(employee, &entries, year));
    }

    let response = CategoryHourBankResponse::new(category, year, rows);
    info!(
        correlation_id = %correlation_id,
        category_id = %category_id,
        employees = response.employees.len(),
        annual_total_minutes = response.totals.annual_total_minutes,
        "Category hour bank loaded"
    );
    Ok(Json(response))
}

/// Handler for GET /employees/:employee_id/hour-bank.
///
/// Sums the saved balances between two zero-based months, inclusive.
async fn period_total_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<PeriodTotalResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Query(query) = query.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Query string rejected"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })?;
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        from_year = query.from_year,
        from_month = query.from_month,
        to_year = query.to_year,
        to_month = query.to_month,
        "Summing hour bank period"
    );

    state
        .config()
        .get_employee(&employee_id)
        .map_err(|e| reject(correlation_id, e))?;
    let (from, to) = query.bounds().map_err(|e| reject(correlation_id, e))?;

    let entries = state
        .store()
        .fetch_all_balances(&employee_id)
        .await
        .map_err(|e| reject(correlation_id, e))?;
    let total_minutes = period_total(&entries, from, to);

    Ok(Json(PeriodTotalResponse {
        employee_id,
        from,
        to,
        total_minutes,
        total_display: format_minutes(total_minutes),
    }))
}

fn csv_attachment(name: &str, body: String) -> Response {
    let filename = format!("backup_{}_{}.csv", name, Utc::now().date_naive());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Handler for GET /backup/records.csv.
async fn records_backup_handler(State(state): State<AppState>) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let config = state.config();

    let records = state
        .store()
        .all_records()
        .await
        .map_err(|e| reject(correlation_id, e))?;
    let csv = records_to_csv(&records, config.employees(), config.config().categories())
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        rows = records.len(),
        "Records backup exported"
    );
    Ok(csv_attachment("records", csv))
}

/// Handler for GET /backup/hour-bank.csv.
async fn hour_bank_backup_handler(
    State(state): State<AppState>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let entries = state
        .store()
        .all_balances()
        .await
        .map_err(|e| reject(correlation_id, e))?;
    let csv = hour_bank_to_csv(&entries, state.config().employees())
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        rows = entries.len(),
        "Hour bank backup exported"
    );
    Ok(csv_attachment("hour_bank", csv))
}

/// Handler for GET /backup/employees.csv.
async fn employees_backup_handler(
    State(state): State<AppState>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let config = state.config();

    let csv = employees_to_csv(config.employees(), config.config().categories())
        .map_err(|e| reject(correlation_id, e))?;

    info!(
        correlation_id = %correlation_id,
        rows = config.employees().len(),
        "Roster backup exported"
    );
    Ok(csv_attachment("employees", csv))
}
