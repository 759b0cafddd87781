//! Occupied command implementation.
//!
//! This module implements the `occupied` command, which lists the occupied
//! rooms of the active date in ascending order.

use crate::error::CliError;
use crate::utils::{report_load, GlobalOptions, OpenLedger};
use clap::Args;
use std::io::Write;

/// List occupied rooms in order.
#[derive(Args)]
pub struct OccupiedCommand {
    /// Also print each room's guest
    #[arg(long)]
    pub with_guests: bool,
}

impl OccupiedCommand {
    /// Execute the occupied command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        let rooms = ledger.engine().occupied_rooms_in_order();
        if rooms.is_empty() && !global.quiet {
            eprintln!("No rooms are occupied on {}", ledger.date());
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for room in rooms {
            if self.with_guests {
                let guest = ledger.engine().occupant(room).unwrap_or("-");
                writeln!(handle, "{room}\t{guest}")?;
            } else {
                writeln!(handle, "{room}")?;
            }
        }

        Ok(())
    }
}
