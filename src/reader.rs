//! Timesheet ingestion.
//!
//! Reads one or more comma-separated files into [`EmployeeRecord`]s. Each
//! file's header is resolved independently, so files from different sources
//! may name their rate column differently. Malformed rows are logged at warn
//! level and skipped; only file-level problems abort a read.

use crate::employee::{parse_row, EmployeeRecord, RawRow};
use crate::error::{ReportError, Result, RowError};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Header names accepted for the hourly rate column when none are configured.
pub const DEFAULT_RATE_FIELDS: &[&str] = &["hourly_rate", "rate", "salary"];

/// Options controlling how input files are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Accepted header names for the hourly rate column.
    pub rate_fields: Vec<String>,
}

impl ReaderConfig {
    pub fn with_rate_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReaderConfig {
            rate_fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the first header column (in header order) that is an accepted
    /// rate alias.
    pub fn resolve_rate_field<'h>(&self, header: &'h StringRecord) -> Option<&'h str> {
        header
            .iter()
            .find(|name| self.rate_fields.iter().any(|alias| alias.as_str() == *name))
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::with_rate_fields(DEFAULT_RATE_FIELDS.iter().copied())
    }
}

/// A data line that was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub source: PathBuf,

    /// 1-indexed line number in the source, header included.
    pub line: u64,

    /// The line as it appeared in the source, without its line terminator.
    pub raw: String,

    pub error: RowError,
}

/// Accepted records plus diagnostics for every skipped row.
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    /// Records in file order, then line order.
    pub employees: Vec<EmployeeRecord>,

    pub skipped: Vec<SkippedRow>,
}

impl ReadOutcome {
    /// Appends another outcome, keeping `self`'s records first.
    pub fn merge(&mut self, other: ReadOutcome) {
        self.employees.extend(other.employees);
        self.skipped.extend(other.skipped);
    }
}

/// Reads every file in order and concatenates their records.
///
/// Fails on the first file that cannot be opened or has no rate column;
/// nothing is returned from files read before it.
pub fn read_employees_from_files<P: AsRef<Path>>(
    paths: &[P],
    config: &ReaderConfig,
) -> Result<ReadOutcome> {
    let mut outcome = ReadOutcome::default();

    for path in paths {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReportError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = read_employees(file, path, config)?;
        debug!(
            "Read {} records from {} ({} skipped)",
            parsed.employees.len(),
            path.display(),
            parsed.skipped.len()
        );
        outcome.merge(parsed);
    }

    Ok(outcome)
}

/// Reads records from a single source. `source` names the input in errors
/// and log lines.
///
/// The first physical line is always the header; a blank first line leaves
/// the file without a rate column.
pub fn read_employees<R: Read>(
    reader: R,
    source: &Path,
    config: &ReaderConfig,
) -> Result<ReadOutcome> {
    let csv_error = |e: csv::Error| ReportError::Csv {
        path: source.to_path_buf(),
        source: e,
    };
    let missing_rate = || ReportError::MissingRateColumn {
        path: source.to_path_buf(),
    };

    // csv skips empty lines before the header, so the first line is taken
    // off the stream here and handed back once it is known to be non-blank.
    let mut reader = BufReader::new(reader);
    let mut first_line = String::new();
    reader
        .read_line(&mut first_line)
        .map_err(|e| csv_error(e.into()))?;
    if first_line.trim().is_empty() {
        return Err(missing_rate());
    }

    // Raw comma splitting: quote characters carry no meaning in this format.
    // Fields are trimmed by hand so skipped rows can be reported verbatim.
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .quoting(false)
        .from_reader(Cursor::new(first_line.into_bytes()).chain(reader));

    let header: StringRecord = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::trim)
        .collect();
    debug!(
        "Parsed header from {}: {:?}",
        source.display(),
        header.iter().collect::<Vec<_>>()
    );

    let rate_field = config.resolve_rate_field(&header).ok_or_else(missing_rate)?;
    debug!("Using '{}' as rate column in {}", rate_field, source.display());

    let mut outcome = ReadOutcome::default();

    for result in csv_reader.records() {
        let record = result.map_err(csv_error)?;
        if is_blank(&record) {
            continue;
        }

        let row: RawRow<'_> = header.iter().zip(record.iter().map(str::trim)).collect();
        match parse_row(&row, rate_field) {
            Ok(employee) => outcome.employees.push(employee),
            Err(error) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                let raw = record.iter().collect::<Vec<_>>().join(",");
                warn!(
                    "Skipping malformed row in {} at line {}: {} ({})",
                    source.display(),
                    line,
                    raw,
                    error
                );
                outcome.skipped.push(SkippedRow {
                    source: source.to_path_buf(),
                    line,
                    raw,
                    error,
                });
            }
        }
    }

    Ok(outcome)
}

/// A line holding only whitespace.
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
}
