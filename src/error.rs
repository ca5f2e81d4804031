//! Error types for the Timesheet Engine.
//!
//! The arithmetic core never fails: malformed punch text degrades to zero
//! minutes. These errors belong to the adapter layer (configuration,
//! persistence, export and request validation).

use thiserror::Error;

/// The main error type for the Timesheet Engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Employee id is not part of the configured roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// Category id is not part of the configured roster.
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// The category id that was not found.
        id: String,
    },

    /// A punch record contained a value that cannot be stored.
    #[error("Invalid record field '{field}': {message}")]
    InvalidRecord {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A year/month pair outside the calendar.
    #[error("Invalid period {year}-{month}: not a calendar month")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested zero-based month.
        month: u32,
    },

    /// The persistence collaborator failed.
    #[error("Store error: {message}")]
    StoreError {
        /// A description of the failure.
        message: String,
    },

    /// Writing a CSV backup failed.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/server.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/server.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/roster.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/roster.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_category_not_found_displays_id() {
        let error = EngineError::CategoryNotFound {
            id: "night_shift".to_string(),
        };
        assert_eq!(error.to_string(), "Category not found: night_shift");
    }

    #[test]
    fn test_invalid_record_displays_field_and_message() {
        let error = EngineError::InvalidRecord {
            field: "clock_in".to_string(),
            message: "expected HH:MM, got '25:99'".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record field 'clock_in': expected HH:MM, got '25:99'"
        );
    }

    #[test]
    fn test_invalid_period_displays_year_and_month() {
        let error = EngineError::InvalidPeriod {
            year: 2026,
            month: 12,
        };
        assert_eq!(
            error.to_string(),
            "Invalid period 2026-12: not a calendar month"
        );
    }

    #[test]
    fn test_store_and_export_errors_display_message() {
        let store = EngineError::StoreError {
            message: "connection reset".to_string(),
        };
        assert_eq!(store.to_string(), "Store error: connection reset");

        let export = EngineError::ExportError {
            message: "buffer closed".to_string(),
        };
        assert_eq!(export.to_string(), "Export error: buffer closed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_employee_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "nobody".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_employee_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
