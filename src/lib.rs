//! # Payout Report
//!
//! Reads employee timesheet CSV files, groups employees by department and
//! renders per-department payout reports.
//!
//! ## Design Principles
//!
//! - **Permissive rows, strict files**: malformed rows are logged and skipped;
//!   unreadable files or a missing rate column abort the whole read
//! - **Integer money**: payouts are exact `hours × rate` products
//! - **Deterministic output**: departments and employees keep input order
//! - **Pluggable reports**: report kinds are selected by name from a registry
//!
//! ## Example
//!
//! ```no_run
//! use payout_report::{format_report, read_employees_from_files, ReportRegistry, ReaderConfig};
//!
//! let outcome = read_employees_from_files(&["timesheets.csv"], &ReaderConfig::default()).unwrap();
//! let registry = ReportRegistry::builtin();
//! let kind = registry.resolve("payout").unwrap();
//! let report = (kind.generate)(&outcome.employees);
//! println!("{}", format_report("payout", &report).unwrap());
//! ```

pub mod employee;
pub mod error;
pub mod formatter;
pub mod money;
pub mod payout;
pub mod reader;
pub mod reports;

pub use employee::{parse_row, EmployeeRecord};
pub use error::{ReportError, Result, RowError};
pub use formatter::{format_payout_report, format_report};
pub use money::Money;
pub use payout::{generate_payout_report, DepartmentAggregate, EmployeePayout, PayoutReport};
pub use reader::{
    read_employees, read_employees_from_files, ReadOutcome, ReaderConfig, SkippedRow,
    DEFAULT_RATE_FIELDS,
};
pub use reports::{get_report_generator, Report, ReportKind, ReportRegistry};
