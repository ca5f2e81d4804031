//! Writers for the three backup CSV files.

use std::collections::HashMap;

use crate::calculation::{format_clock, worked_minutes};
use crate::error::{EngineError, EngineResult};
use crate::models::{Category, DailyPunchRecord, Employee, HourBankEntry};

/// Columns of the punch records backup.
pub const RECORDS_HEADER: [&str; 9] = [
    "Date",
    "Employee",
    "Category",
    "Clock In",
    "Lunch Out",
    "Lunch In",
    "Clock Out",
    "Worked Hours",
    "Day Type",
];

/// Columns of the hour bank backup.
pub const HOUR_BANK_HEADER: [&str; 5] = [
    "Employee",
    "Year",
    "Month",
    "Balance (minutes)",
    "Balance (hours)",
];

/// Columns of the roster backup.
pub const EMPLOYEES_HEADER: [&str; 5] = ["Name", "Email", "Category", "Role", "Active"];

const UNKNOWN: &str = "N/A";

fn export_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::ExportError {
        message: format!("CSV write error: {e}"),
    }
}

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(csv: csv::Writer<Vec<u8>>) -> EngineResult<String> {
    let bytes = csv.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}

struct Roster<'a> {
    employees: HashMap<&'a str, &'a Employee>,
    categories: HashMap<&'a str, &'a str>,
}

impl<'a> Roster<'a> {
    fn new(employees: &'a [Employee], categories: &'a [Category]) -> Self {
        Self {
            employees: employees.iter().map(|e| (e.id.as_str(), e)).collect(),
            categories: categories
                .iter()
                .map(|c| (c.id.as_str(), c.name.as_str()))
                .collect(),
        }
    }

    fn employee_name(&self, id: &str) -> &'a str {
        self.employees.get(id).map_or(UNKNOWN, |e| e.name.as_str())
    }

    fn category_name(&self, category_id: &str) -> &'a str {
        self.categories.get(category_id).copied().unwrap_or(UNKNOWN)
    }

    fn employee_category(&self, id: &str) -> &'a str {
        self.employees
            .get(id)
            .map_or(UNKNOWN, |e| self.category_name(&e.category_id))
    }
}

/// Writes the punch records backup, newest date first.
///
/// Employee and category names are resolved from the roster; unknown ids
/// are written as `N/A`. An empty slice produces the header row only.
///
/// # Example
///
/// ```
/// use timesheet_engine::export::records_to_csv;
/// use timesheet_engine::models::DailyPunchRecord;
/// use chrono::NaiveDate;
///
/// let record = DailyPunchRecord::new("emp_001", NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
///     .with_punches(Some("08:00"), None, None, Some("12:00"));
///
/// let csv = records_to_csv(&[record], &[], &[]).unwrap();
/// assert!(csv.contains(r#""2026-03-02","N/A","N/A","08:00","","","12:00","04:00","normal""#));
/// ```
pub fn records_to_csv(
    records: &[DailyPunchRecord],
    employees: &[Employee],
    categories: &[Category],
) -> EngineResult<String> {
    let roster = Roster::new(employees, categories);

    let mut sorted: Vec<&DailyPunchRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.date.cmp(&a.date).then_with(|| {
            roster
                .employee_name(&a.employee_id)
                .cmp(&roster.employee_name(&b.employee_id))
        })
    });

    let mut csv = writer();
    csv.write_record(RECORDS_HEADER).map_err(export_error)?;

    for record in sorted {
        csv.write_record([
            record.date.format("%Y-%m-%d").to_string().as_str(),
            roster.employee_name(&record.employee_id),
            roster.employee_category(&record.employee_id),
            record.clock_in.as_deref().unwrap_or(""),
            record.lunch_out.as_deref().unwrap_or(""),
            record.lunch_in.as_deref().unwrap_or(""),
            record.clock_out.as_deref().unwrap_or(""),
            format_clock(worked_minutes(Some(record))).as_str(),
            record.day_type.to_string().as_str(),
        ])
        .map_err(export_error)?;
    }

    finish(csv)
}

/// Writes the hour bank backup, most recent period first.
///
/// Months are written zero-based, as stored.
pub fn hour_bank_to_csv(entries: &[HourBankEntry], employees: &[Employee]) -> EngineResult<String> {
    let roster = Roster::new(employees, &[]);

    let mut sorted: Vec<&HourBankEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        b.period().cmp(&a.period()).then_with(|| {
            roster
                .employee_name(&a.employee_id)
                .cmp(&roster.employee_name(&b.employee_id))
        })
    });

    let mut csv = writer();
    csv.write_record(HOUR_BANK_HEADER).map_err(export_error)?;

    for entry in sorted {
        csv.write_record([
            roster.employee_name(&entry.employee_id).to_string(),
            entry.year.to_string(),
            entry.month.to_string(),
            entry.balance_minutes.to_string(),
            format_clock(entry.balance_minutes),
        ])
        .map_err(export_error)?;
    }

    finish(csv)
}

/// Writes the roster backup, ordered by name.
pub fn employees_to_csv(employees: &[Employee], categories: &[Category]) -> EngineResult<String> {
    let roster = Roster::new(employees, categories);

    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut csv = writer();
    csv.write_record(EMPLOYEES_HEADER).map_err(export_error)?;

    for employee in sorted {
        csv.write_record([
            employee.name.as_str(),
            employee.email.as_deref().unwrap_or(""),
            roster.category_name(&employee.category_id),
            employee.role.to_string().as_str(),
            if employee.active { "Yes" } else { "No" },
        ])
        .map_err(export_error)?;
    }

    finish(csv)
}
