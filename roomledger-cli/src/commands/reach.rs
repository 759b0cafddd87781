//! Reach command implementation.
//!
//! This module implements the `reach` command, which prints every room
//! reachable from a starting room in breadth-first order.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use roomledger::{RoomGraph, RoomNumber, RoomTypeCatalog};

/// Show rooms reachable from a room.
#[derive(Args)]
pub struct ReachCommand {
    /// Starting room number
    #[arg(value_name = "ROOM")]
    pub room: u32,
}

impl ReachCommand {
    /// Execute the reach command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = RoomTypeCatalog::from_config(&config).map_err(|e| CliError::Config(e.to_string()))?;
        let start = RoomNumber::try_from(self.room)
            .map_err(|e| CliError::InvalidArguments(e.reason))?;

        let order = RoomGraph::from_catalog(&catalog).reachable_from(start)?;
        let rendered: Vec<String> = order.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
        Ok(())
    }
}
