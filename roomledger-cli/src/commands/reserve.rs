//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books the lowest free
//! room of a type for the active date and saves the date's record file.

use crate::error::CliError;
use crate::utils::{format_money, report_load, validate_guest_name, GlobalOptions, OpenLedger};
use clap::Args;
use roomledger::RoomTypeSelector;

/// Book a room for a guest.
#[derive(Args)]
pub struct ReserveCommand {
    /// Room type: 1-based option from `availability`, or the exact name
    #[arg(value_name = "ROOM_TYPE")]
    pub room_type: String,

    /// Guest name
    #[arg(long, value_name = "NAME")]
    pub guest: String,

    /// Number of nights
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub nights: u32,

    /// Check-in hour (0-23)
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u8).range(0..=23))]
    pub check_in_hour: u8,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Validate input before touching any state
        let guest = validate_guest_name(&self.guest)?;
        let selector: RoomTypeSelector = self
            .room_type
            .parse()
            .map_err(|_| CliError::InvalidArguments(format!("bad room type '{}'", self.room_type)))?;

        // 2. Load the active date
        let (mut ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        // 3. Book
        let reservation = ledger.reserve(&selector, &guest, self.nights, self.check_in_hour)?;

        // 4. Persist
        ledger.persist()?;

        // 5. Output just the room number (shell-friendly) to stdout
        println!("{}", reservation.room_number());

        if !global.quiet {
            eprintln!(
                "Reserved {} room {} for {} on {}: {} night(s) at {} = {}",
                reservation.room_type(),
                reservation.room_number(),
                reservation.guest_name(),
                reservation.stay_date(),
                reservation.nights(),
                format_money(reservation.price_per_night()),
                format_money(reservation.total_cost())
            );
        }

        Ok(())
    }
}
