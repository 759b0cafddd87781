//! Total command implementation.
//!
//! This module implements the `total` command, which reports the active
//! date's revenue, its bookings in order, and the occupied rooms.

use super::show::{write_json, OutputFormat};
use crate::error::CliError;
use crate::utils::{format_money, report_load, GlobalOptions, OpenLedger};
use clap::Args;
use roomledger::{BookingEngine, Decimal, RoomNumber};
use serde::Serialize;
use std::io::Write;

/// Show revenue and bookings for the active date.
#[derive(Args)]
pub struct TotalCommand {
    /// Output format (CSV is not supported for this report)
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Booking<'a> {
    guest: &'a str,
    room: RoomNumber,
}

#[derive(Serialize)]
struct TotalReport<'a> {
    date: &'a str,
    revenue: Decimal,
    bookings: Vec<Booking<'a>>,
    occupied_rooms: Vec<RoomNumber>,
}

impl<'a> TotalReport<'a> {
    fn build(engine: &'a BookingEngine, date: &'a str) -> Self {
        Self {
            date,
            revenue: engine.total_revenue(),
            bookings: engine
                .reservations()
                .iter()
                .map(|r| Booking {
                    guest: r.guest_name(),
                    room: r.room_number(),
                })
                .collect(),
            occupied_rooms: engine.occupied_rooms_in_order(),
        }
    }
}

impl TotalCommand {
    /// Execute the total command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);
        let total = TotalReport::build(&ledger.engine(), &ledger.date());

        match self.format {
            OutputFormat::Table => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "Total revenue for {}: {}", total.date, format_money(total.revenue))?;
                for booking in &total.bookings {
                    writeln!(handle, "{}\t{}", booking.guest, booking.room)?;
                }
                let rooms: Vec<String> = total.occupied_rooms.iter().map(ToString::to_string).collect();
                writeln!(handle, "Occupied rooms: {}", rooms.join(" "))?;
            }
            OutputFormat::Json => write_json(&total)?,
            OutputFormat::Csv => {
                return Err(CliError::InvalidArguments(
                    "the total report supports table and json formats".to_string(),
                ));
            }
        }

        Ok(())
    }
}
