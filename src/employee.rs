//! Employee records and row-level validation.

use crate::error::RowError;
use std::collections::HashMap;
use std::num::ParseIntError;
use std::str::FromStr;

/// A validated timesheet row.
///
/// Hours and rate are expected to be non-negative but only integer
/// conversion is checked; a row that fails conversion is dropped, never
/// repaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    /// Employee ID. Not unique: duplicates across or within files are kept.
    pub id: i64,

    pub email: String,

    pub name: String,

    /// Grouping key for reports. Compared exactly, case-sensitive.
    pub department: String,

    pub hours_worked: i32,

    pub hourly_rate: i32,
}

/// A data line zipped with its file's header, field name to trimmed value.
pub type RawRow<'a> = HashMap<&'a str, &'a str>;

/// Builds an [`EmployeeRecord`] from a header-mapped row.
///
/// `rate_field` is the header column resolved as the hourly rate for the
/// file the row came from.
pub fn parse_row(row: &RawRow<'_>, rate_field: &str) -> Result<EmployeeRecord, RowError> {
    Ok(EmployeeRecord {
        id: parse_int(row, "id")?,
        email: field(row, "email")?.to_string(),
        name: field(row, "name")?.to_string(),
        department: field(row, "department")?.to_string(),
        hours_worked: parse_int(row, "hours_worked")?,
        hourly_rate: parse_int(row, rate_field)?,
    })
}

fn field<'a>(row: &RawRow<'a>, key: &str) -> Result<&'a str, RowError> {
    row.get(key)
        .copied()
        .ok_or_else(|| RowError::MissingField(key.to_string()))
}

fn parse_int<T>(row: &RawRow<'_>, key: &str) -> Result<T, RowError>
where
    T: FromStr<Err = ParseIntError>,
{
    let value = field(row, key)?;
    value.parse().map_err(|source| RowError::InvalidInteger {
        field: key.to_string(),
        value: value.to_string(),
        source,
    })
}
