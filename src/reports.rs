//! Report kinds and the name-keyed registry that selects them.
//!
//! A report kind pairs an aggregation step with the renderer for its output,
//! so adding a kind means adding a [`Report`] variant and registering one
//! [`ReportKind`]; the reader and the CLI stay untouched.

use crate::employee::EmployeeRecord;
use crate::error::{ReportError, Result};
use crate::formatter::format_payout_report;
use crate::payout::{generate_payout_report, PayoutReport};
use std::collections::HashMap;
use std::fmt;

/// Aggregated output of a report kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Payout(PayoutReport),
}

/// Builds a report from the full set of parsed records.
pub type Generator = fn(&[EmployeeRecord]) -> Report;

/// Renders a report into display text.
pub type Renderer = fn(&Report) -> String;

/// A named report strategy.
#[derive(Clone, Copy)]
pub struct ReportKind {
    pub name: &'static str,
    pub generate: Generator,
    pub render: Renderer,
}

impl fmt::Debug for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportKind")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Name used to select the payout report.
pub const PAYOUT: &str = "payout";

/// The payout report: hours and pay per employee, grouped by department.
pub const PAYOUT_REPORT: ReportKind = ReportKind {
    name: PAYOUT,
    generate: generate_payout,
    render: render_payout,
};

fn generate_payout(employees: &[EmployeeRecord]) -> Report {
    Report::Payout(generate_payout_report(employees))
}

fn render_payout(report: &Report) -> String {
    match report {
        Report::Payout(payout) => format_payout_report(payout),
    }
}

/// Maps report-type names to report kinds.
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    kinds: HashMap<&'static str, ReportKind>,
}

impl ReportRegistry {
    /// Creates a registry with no report kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in report kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(PAYOUT_REPORT);
        registry
    }

    /// Registers `kind` under its name, replacing any kind of the same name.
    pub fn register(&mut self, kind: ReportKind) {
        self.kinds.insert(kind.name, kind);
    }

    pub fn resolve(&self, name: &str) -> Result<&ReportKind> {
        self.kinds
            .get(name)
            .ok_or_else(|| ReportError::UnknownReportType(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.kinds.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Looks up the aggregation step for `name` among the built-in kinds.
pub fn get_report_generator(name: &str) -> Result<Generator> {
    ReportRegistry::builtin().resolve(name).map(|kind| kind.generate)
}
