//! Response types for the timesheet API.
//!
//! This module defines the response bodies, the error response structures
//! and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{
    BalanceResult, MonthlyTotals, YearlyOverview, combine_overviews, format_minutes,
    yearly_overview,
};
use crate::error::EngineError;
use crate::models::{Category, Employee, HourBankEntry};

/// Response body for a saved monthly balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedBalanceResponse {
    /// The persisted entry.
    pub entry: HourBankEntry,
    /// How the balance was derived.
    pub balance: BalanceResult,
    /// The totals the balance was computed from.
    pub totals: MonthlyTotals,
}

/// Response body for a year of balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyHourBankResponse {
    /// The employee the balances belong to.
    pub employee_id: String,
    /// Month-by-month balances.
    #[serde(flatten)]
    pub overview: YearlyOverview,
    /// The annual total as `[-]HH:MM`, or `-` when zero.
    pub annual_total_display: String,
}

impl YearlyHourBankResponse {
    /// Wraps an overview for one employee.
    pub fn new(employee_id: impl Into<String>, overview: YearlyOverview) -> Self {
        let annual_total_display = format_minutes(overview.annual_total_minutes);
        Self {
            employee_id: employee_id.into(),
            overview,
            annual_total_display,
        }
    }
}

/// One employee's line in a category's yearly hour bank report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEmployeeRow {
    /// The employee's id.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// Month-by-month balances.
    #[serde(flatten)]
    pub overview: YearlyOverview,
    /// How many saved months ended in deficit.
    pub deficit_months: usize,
    /// The annual total as `[-]HH:MM`, or `-` when zero.
    pub annual_total_display: String,
}

impl CategoryEmployeeRow {
    /// Lays out one employee's saved balances for the year.
    pub fn new(employee: &Employee, entries: &[HourBankEntry], year: i32) -> Self {
        let overview = yearly_overview(entries, year);
        Self {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            deficit_months: entries
                .iter()
                .filter(|entry| entry.year == year && entry.is_deficit())
                .count(),
            annual_total_display: format_minutes(overview.annual_total_minutes),
            overview,
        }
    }
}

/// Response body for a category's yearly hour bank report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryHourBankResponse {
    /// The category's id.
    pub category_id: String,
    /// The category's display name.
    pub category_name: String,
    /// Calendar year.
    pub year: i32,
    /// One row per employee in the category, by name.
    pub employees: Vec<CategoryEmployeeRow>,
    /// Month-by-month sums across the category.
    pub totals: YearlyOverview,
    /// The category total as `[-]HH:MM`, or `-` when zero.
    pub annual_total_display: String,
}

impl CategoryHourBankResponse {
    /// Sums the employee rows into the category report.
    pub fn new(category: &Category, year: i32, employees: Vec<CategoryEmployeeRow>) -> Self {
        let overviews: Vec<YearlyOverview> =
            employees.iter().map(|row| row.overview.clone()).collect();
        let totals = combine_overviews(year, &overviews);
        Self {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            year,
            employees,
            annual_total_display: format_minutes(totals.annual_total_minutes),
            totals,
        }
    }
}

/// Response body for a balance sum over a range of months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodTotalResponse {
    /// The employee the balances belong to.
    pub employee_id: String,
    /// First period, as `(year, zero_based_month)`.
    pub from: (i32, u32),
    /// Last period, inclusive.
    pub to: (i32, u32),
    /// Sum of the saved balances in the range.
    pub total_minutes: i64,
    /// The total as `[-]HH:MM`, or `-` when zero.
    pub total_display: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("The employee id '{}' is not on the roster", id),
        )
    }

    /// Creates a category not found error response.
    pub fn category_not_found(id: &str) -> Self {
        Self::with_details(
            "CATEGORY_NOT_FOUND",
            format!("Category not found: {}", id),
            format!("The category id '{}' is not on the roster", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&id),
            },
            EngineError::CategoryNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::category_not_found(&id),
            },
            EngineError::InvalidRecord { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid record field '{}': {}", field, message),
                    "Punches must be written as HH:MM",
                ))
            }
            EngineError::InvalidPeriod { year, month } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid period {}-{}", year, month),
                    "Months are zero-based (0 to 11) and the year must be a calendar year",
                ))
            }
            EngineError::StoreError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Storage failed", message),
            },
            EngineError::ExportError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_ERROR", "Backup export failed", message),
            },
        }
    }
}
