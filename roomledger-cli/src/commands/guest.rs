//! Guest command implementation.
//!
//! This module implements the `guest` command, which prints the rooms a
//! guest holds on the active date.

use crate::error::CliError;
use crate::utils::{report_load, GlobalOptions, OpenLedger};
use clap::Args;

/// Look up a guest's rooms.
#[derive(Args)]
pub struct GuestCommand {
    /// Guest name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl GuestCommand {
    /// Execute the guest command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        let name = self.name.trim();
        let rooms = ledger.engine().guest_rooms(name);
        if rooms.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "No rooms found for guest {name} on {}",
                ledger.date()
            )));
        }

        for room in rooms {
            println!("{room}");
        }
        Ok(())
    }
}
