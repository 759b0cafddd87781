//! Undo command implementation.
//!
//! This module implements the `undo` command, which reverses the most recent
//! booking of the active date and saves the result.

use crate::error::CliError;
use crate::utils::{report_load, GlobalOptions, OpenLedger, SaveOutcome};
use clap::Args;

/// Reverse the most recent booking.
#[derive(Args)]
pub struct UndoCommand {}

impl UndoCommand {
    /// Execute the undo command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (mut ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        let Some(action) = ledger.undo()? else {
            if !global.quiet {
                eprintln!("Nothing to undo for {}", ledger.date());
            }
            return Ok(());
        };

        let outcome = ledger.persist()?;

        println!("{}", action.room_number);
        if !global.quiet {
            eprintln!(
                "Undid booking of room {} for {}",
                action.room_number, action.guest_name
            );
            if matches!(outcome, SaveOutcome::Cleared) {
                eprintln!("No reservations remain for {}", ledger.date());
            }
        }

        Ok(())
    }
}
