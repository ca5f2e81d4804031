//! CSV backup export.
//!
//! Three backup files are produced: punch records, hour bank balances and
//! the employee roster. Every field is quoted so spreadsheet tools never
//! reinterpret punch text such as `08:00`.

mod csv_backup;

pub use csv_backup::{
    EMPLOYEES_HEADER, HOUR_BANK_HEADER, RECORDS_HEADER, employees_to_csv, hour_bank_to_csv,
    records_to_csv,
};
