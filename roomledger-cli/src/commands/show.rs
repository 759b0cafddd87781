//! Show command implementation.
//!
//! This module implements the `show` command, which displays the
//! reservations filed under a date in various formats (table, JSON, CSV).

use crate::error::CliError;
use crate::utils::{format_money, report_load, GlobalOptions, OpenLedger};
use clap::{Args, ValueEnum};
use roomledger::Reservation;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "guest",
    "room",
    "room_type",
    "stay_date",
    "nights",
    "check_in_hour",
    "price_per_night",
    "total_cost",
];

/// Show reservations for a date.
#[derive(Args)]
pub struct ShowCommand {
    /// Stay date to show (default: the active date)
    #[arg(long, value_name = "DATE")]
    pub stay_date: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for report commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        let stay_date = self.stay_date.unwrap_or_else(|| ledger.date().to_string());
        let reservations = ledger.engine().reservations_on_date(&stay_date);

        if reservations.is_empty() {
            if !global.quiet {
                eprintln!("No reservations found for {stay_date}");
            }
            if matches!(self.format, OutputFormat::Table) {
                return Ok(());
            }
        }

        match self.format {
            OutputFormat::Table => format_as_table(&reservations)?,
            OutputFormat::Json => write_json(&reservations)?,
            OutputFormat::Csv => format_as_csv(&reservations)?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for r in reservations {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.guest_name(),
            r.room_number(),
            r.room_type(),
            r.stay_date(),
            r.nights(),
            r.check_in_hour(),
            format_money(r.price_per_night()),
            format_money(r.total_cost()),
        )?;
    }

    Ok(())
}

/// Write any serializable value as pretty JSON to stdout.
pub fn write_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, value)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
pub fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as CSV.
fn format_as_csv(reservations: &[&Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::Writer::from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for r in reservations {
        writer
            .write_record(&[
                r.guest_name().to_string(),
                r.room_number().to_string(),
                r.room_type().to_string(),
                r.stay_date().to_string(),
                r.nights().to_string(),
                r.check_in_hour().to_string(),
                r.price_per_night().to_string(),
                r.total_cost().to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
