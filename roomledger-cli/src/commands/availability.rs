//! Availability command implementation.
//!
//! This module implements the `availability` command, which lists every room
//! type with its menu option, price, and free/occupied counts.

use super::show::{csv_error, write_json, OutputFormat};
use crate::error::CliError;
use crate::utils::{format_money, report_load, GlobalOptions, OpenLedger};
use clap::Args;
use std::io::Write;

/// Show free and occupied rooms per type.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);
        let entries = ledger.engine().availability_report();

        match self.format {
            OutputFormat::Table => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{} - {}", ledger.engine().catalog().hotel_name(), ledger.date())?;
                for e in &entries {
                    writeln!(
                        handle,
                        "{}. {} ({}) - {} available of {} - {} per night",
                        e.option,
                        e.room_type,
                        e.rooms,
                        e.available,
                        e.total,
                        format_money(e.price_per_night)
                    )?;
                }
            }
            OutputFormat::Json => write_json(&entries)?,
            OutputFormat::Csv => {
                let stdout = std::io::stdout();
                let mut writer = csv::Writer::from_writer(stdout.lock());
                writer
                    .write_record(["option", "room_type", "rooms", "price_per_night", "available", "occupied", "total"])
                    .map_err(csv_error)?;
                for e in &entries {
                    writer
                        .write_record(&[
                            e.option.to_string(),
                            e.room_type.clone(),
                            e.rooms.clone(),
                            e.price_per_night.to_string(),
                            e.available.to_string(),
                            e.occupied.to_string(),
                            e.total.to_string(),
                        ])
                        .map_err(csv_error)?;
                }
                writer.flush()?;
            }
        }

        Ok(())
    }
}
