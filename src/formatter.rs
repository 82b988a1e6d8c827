//! Plain-text rendering of reports.

use crate::error::Result;
use crate::payout::PayoutReport;
use crate::reports::{Report, ReportRegistry};

const DEPARTMENT_WIDTH: usize = 20;
const NAME_WIDTH: usize = 20;
const HOURS_WIDTH: usize = 12;
const RATE_WIDTH: usize = 12;
const PAYOUT_WIDTH: usize = 10;

/// Renders `report` with the renderer registered for `report_type`.
///
/// Fails with [`ReportError::UnknownReportType`](crate::ReportError::UnknownReportType)
/// if no built-in kind has that name.
pub fn format_report(report_type: &str, report: &Report) -> Result<String> {
    let registry = ReportRegistry::builtin();
    let kind = registry.resolve(report_type)?;
    Ok((kind.render)(report))
}

/// Renders a payout report as a left-aligned table.
///
/// Each department gets a heading line, one line per employee, and a totals
/// line, followed by a blank separator.
pub fn format_payout_report(report: &PayoutReport) -> String {
    let mut lines = vec![
        format!(
            "{:<dw$} {:<nw$} {:<hw$} {:<rw$} {:<pw$}",
            "Department",
            "Name",
            "Hours Worked",
            "Hourly Rate",
            "Payout",
            dw = DEPARTMENT_WIDTH,
            nw = NAME_WIDTH,
            hw = HOURS_WIDTH,
            rw = RATE_WIDTH,
            pw = PAYOUT_WIDTH,
        ),
        [DEPARTMENT_WIDTH, NAME_WIDTH, HOURS_WIDTH, RATE_WIDTH, PAYOUT_WIDTH]
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join(" "),
    ];

    for department in report.departments() {
        lines.push(format!("{:<dw$}", department.department, dw = DEPARTMENT_WIDTH));

        for employee in &department.employees {
            lines.push(format!(
                "{:<dw$} {:<nw$} {:<hw$} {:<rw$} {:<pw$}",
                "",
                employee.name,
                employee.hours_worked,
                employee.hourly_rate,
                employee.payout,
                dw = DEPARTMENT_WIDTH,
                nw = NAME_WIDTH,
                hw = HOURS_WIDTH,
                rw = RATE_WIDTH,
                pw = PAYOUT_WIDTH + 1,
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "{:<dw$} {:<10} {:<hw$} {:<10} {:<pw$}",
            "",
            "Total hours:",
            department.total_hours,
            "Total payment:",
            department.total_payout,
            dw = DEPARTMENT_WIDTH,
            hw = HOURS_WIDTH,
            pw = PAYOUT_WIDTH + 1,
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}
