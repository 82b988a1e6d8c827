//! Payout Report CLI
//!
//! Reads employee timesheet CSV files and prints the selected report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- january.csv february.csv --report payout
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity (default `info`)

use clap::Parser;
use log::{error, info, warn};
use payout_report::{
    format_report, read_employees_from_files, ReaderConfig, ReportError, ReportRegistry, Result,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// Generate employee reports from CSV files
#[derive(Parser, Debug)]
#[command(name = "payout-report", version)]
struct Cli {
    /// CSV files with employee data
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Type of report to generate (e.g. payout)
    #[arg(long)]
    report: String,

    /// Accepted header name for the hourly rate column; repeat to allow several
    /// [default: hourly_rate, rate, salary]
    #[arg(long = "rate-field", value_name = "NAME")]
    rate_fields: Vec<String>,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        if self.rate_fields.is_empty() {
            ReaderConfig::default()
        } else {
            ReaderConfig::with_rate_fields(self.rate_fields.iter().cloned())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let files = existing_files(&cli.files);
    if files.is_empty() {
        return Err(ReportError::NoInputFiles);
    }

    let outcome = read_employees_from_files(&files, &cli.reader_config())?;

    let registry = ReportRegistry::builtin();
    let kind = registry.resolve(&cli.report)?;

    let report = (kind.generate)(&outcome.employees);
    info!("Report '{}' generated successfully", cli.report);

    let text = format_report(&cli.report, &report)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text)?;
    handle.flush()?;

    Ok(())
}

/// Drops paths that are not regular files, warning for each one.
fn existing_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| {
            let keep = path.is_file();
            if !keep {
                warn!("File not found or is not a file: {}", path.display());
            }
            keep
        })
        .cloned()
        .collect()
}
