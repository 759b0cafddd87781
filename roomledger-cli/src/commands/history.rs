//! History command implementation.
//!
//! This module implements the `history` command, which prints the guest of
//! every active booking of the active date, oldest first.

use crate::error::CliError;
use crate::utils::{report_load, GlobalOptions, OpenLedger};
use clap::Args;

/// Show the chronological guest history.
#[derive(Args)]
pub struct HistoryCommand {}

impl HistoryCommand {
    /// Execute the history command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (ledger, report) = OpenLedger::open(global)?;
        report_load(&report, global);

        let history = ledger.engine().guest_history();
        if history.is_empty() && !global.quiet {
            eprintln!("No guest history for {}", ledger.date());
        }
        for guest in history {
            println!("{guest}");
        }
        Ok(())
    }
}
