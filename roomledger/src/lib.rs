#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roomledger
//!
//! A library for managing a single hotel's room inventory and its daily
//! booking ledger.
//!
//! The library keeps a set of mutually consistent indexes (per-type
//! availability, an ordered tree of occupied rooms, a guest index, the
//! guest history and an undo stack) in sync across every booking and
//! reversal, and persists each day's reservations to a plain-text record
//! file that can be replayed to rebuild that state.
//!
//! ## Core Types
//!
//! - [`RoomNumber`] and [`RoomRange`]: Room number types with validation
//! - [`RoomType`] and [`RoomTypeCatalog`]: The facility's room categories
//! - [`BookingEngine`] and [`DayLedger`]: Booking, undo and reporting
//! - [`Reservation`] and [`UndoAction`]: Booking records
//! - [`PersistenceCoordinator`]: Date-scoped save and load
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roomledger::{BookingEngine, Decimal, HotelConfig, RoomTypeSelector};
//!
//! let mut engine = BookingEngine::from_config(&HotelConfig::default()).unwrap();
//! let reservation = engine
//!     .reserve(&RoomTypeSelector::name("Deluxe Suite"), "Alice", "07-01-2025", 2, 15)
//!     .unwrap();
//!
//! assert_eq!(reservation.room_number().value(), 236);
//! assert_eq!(reservation.total_cost(), Decimal::from(700));
//! ```

pub mod adjacency;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod persistence;
pub mod reservation;
pub mod room;

// Re-export key types at crate root for convenience
pub use adjacency::RoomGraph;
pub use catalog::{RoomType, RoomTypeCatalog, RoomTypeSelector};
pub use config::{ConfigLoader, ConfigValidator, HotelConfig, RoomNumbersConfig, RoomTypeConfig};
pub use engine::{AvailabilityEntry, BookingEngine};
pub use error::{Error, Result};
pub use ledger::DayLedger;
pub use logging::{init_logger, LogLevel, Logger};
pub use persistence::{LoadReport, PersistenceCoordinator, RecordStore, SaveReport};
pub use reservation::{Reservation, UndoAction, ValidationError, DEFAULT_CHECK_IN_HOUR};
pub use room::{RoomNumber, RoomRange};
pub use rust_decimal::Decimal;
