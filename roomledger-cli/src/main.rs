//! Main entry point for the roomledger CLI.
//!
//! This is the command-line interface for the hotel booking ledger.
//! It provides commands for working with one date's bookings:
//! - `reserve`: Book a room for a guest
//! - `undo`: Reverse the most recent booking
//! - `availability`, `occupied`, `guest`, `history`, `show`, `total`: Reports
//! - `session`: Interactive front desk

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = roomledger::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        records_dir: cli.records_dir,
        date: cli.date,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Undo(cmd) => cmd.execute(&global),
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::Occupied(cmd) => cmd.execute(&global),
        cli::Command::Guest(cmd) => cmd.execute(&global),
        cli::Command::History(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Total(cmd) => cmd.execute(&global),
        cli::Command::Reach(cmd) => cmd.execute(&global),
        cli::Command::Session(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
