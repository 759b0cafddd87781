//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AvailabilityCommand, CompletionsCommand, GuestCommand, HistoryCommand, OccupiedCommand,
    ReachCommand, ReserveCommand, SessionCommand, ShowCommand, TotalCommand, UndoCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking hotel rooms and keeping the daily ledger.
#[derive(Parser)]
#[command(name = "roomledger")]
#[command(version, about = "Book hotel rooms and keep the daily reservation ledger", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Hotel configuration file (YAML)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the per-date record files
    #[arg(long, value_name = "PATH", global = true)]
    pub records_dir: Option<PathBuf>,

    /// Active date label (default: today, as MM-DD-YYYY)
    #[arg(long, value_name = "DATE", global = true)]
    pub date: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Book the lowest free room of a type
    Reserve(ReserveCommand),

    /// Reverse the most recent booking
    Undo(UndoCommand),

    /// Show free and occupied rooms per type
    Availability(AvailabilityCommand),

    /// List occupied rooms in ascending order
    Occupied(OccupiedCommand),

    /// Look up a guest's rooms
    Guest(GuestCommand),

    /// Show guests in booking order
    History(HistoryCommand),

    /// List a date's reservations
    Show(ShowCommand),

    /// Show revenue and bookings for the active date
    Total(TotalCommand),

    /// Show rooms reachable from a room
    Reach(ReachCommand),

    /// Run an interactive booking session
    Session(SessionCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
