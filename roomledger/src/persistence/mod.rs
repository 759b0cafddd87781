//! Persistence of a date's reservations to plain-text record files.
//!
//! This module provides:
//! - The record line formats, full and legacy (`record`)
//! - The directory of date-keyed files (`store`)
//! - Save and load against a [`BookingEngine`](crate::BookingEngine) (`coordinator`)

pub mod coordinator;
pub mod record;
pub mod store;

#[cfg(test)]
mod proptests;

pub use coordinator::{LoadReport, PersistenceCoordinator, SaveReport, SkippedLine, UnrestorableRecord};
pub use record::RecordLine;
pub use store::RecordStore;
