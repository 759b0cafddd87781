//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `reserve`: Book the lowest free room of a type
//! - `undo`: Reverse the most recent booking
//! - `availability`: Show free and occupied rooms per type
//! - `occupied`: List occupied rooms in order
//! - `guest`: Look up a guest's rooms
//! - `history`: Show guests in booking order
//! - `show`: List a date's reservations
//! - `total`: Show revenue and bookings
//! - `reach`: Show rooms reachable from a room
//! - `session`: Interactive front desk
//! - `completions`: Generate shell completion scripts

pub mod availability;
pub mod completions;
pub mod guest;
pub mod history;
pub mod occupied;
pub mod reach;
pub mod reserve;
pub mod session;
pub mod show;
pub mod total;
pub mod undo;

pub use availability::AvailabilityCommand;
pub use completions::CompletionsCommand;
pub use guest::GuestCommand;
pub use history::HistoryCommand;
pub use occupied::OccupiedCommand;
pub use reach::ReachCommand;
pub use reserve::ReserveCommand;
pub use session::SessionCommand;
pub use show::ShowCommand;
pub use total::TotalCommand;
pub use undo::UndoCommand;
