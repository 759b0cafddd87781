//! Error types for the roomledger library.
//!
//! This module provides the error hierarchy for all booking, configuration
//! and persistence operations, using `thiserror` for ergonomic error handling.
//!
//! None of these errors is fatal to a running process: every variant maps to
//! a reported outcome after which the caller can keep operating, including on
//! other dates.

use std::path::PathBuf;

use thiserror::Error;

use crate::room::RoomNumber;

/// Result type alias for operations that may fail with a roomledger error.
///
/// # Examples
///
/// ```
/// use roomledger::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(236)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roomledger library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid room number was provided.
    #[error("invalid room number {value}: {reason}")]
    InvalidRoomNumber {
        /// The invalid room number.
        value: u32,
        /// The reason the room number is invalid.
        reason: String,
    },

    /// An invalid room range was specified.
    #[error("invalid room range {low}-{high}: {reason}")]
    InvalidRoomRange {
        /// The lowest room number in the range.
        low: u32,
        /// The highest room number in the range.
        high: u32,
        /// The reason the range is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be read or written.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be used.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// The room type selector does not name a configured room type.
    #[error("no such room type: {selector}")]
    NoSuchRoomType {
        /// The selector as given by the caller.
        selector: String,
    },

    /// The room number does not belong to any configured room type.
    #[error("room {room} is not part of any room type")]
    RoomNotFound {
        /// The unknown room number.
        room: RoomNumber,
    },

    /// Every room of the requested type is occupied.
    #[error("no available rooms of type '{room_type}'")]
    RoomsExhausted {
        /// The exhausted room type.
        room_type: String,
    },

    /// The room is already occupied.
    #[error("room {room} is already occupied by {guest}")]
    AlreadyOccupied {
        /// The occupied room.
        room: RoomNumber,
        /// The guest currently holding the room.
        guest: String,
    },

    /// The ledger's indexes disagree with each other or with an undo action.
    #[error("ledger integrity violation: {details}")]
    IntegrityViolation {
        /// Details about the violation.
        details: String,
    },

    /// A save was requested for a date with no reservations.
    #[error("no reservations to save for {date}")]
    NothingToSave {
        /// The date that was requested.
        date: String,
    },
}

impl From<crate::room::InvalidRoomNumberError> for Error {
    fn from(err: crate::room::InvalidRoomNumberError) -> Self {
        Self::InvalidRoomNumber {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::room::InvalidRoomRangeError> for Error {
    fn from(err: crate::room::InvalidRoomRangeError) -> Self {
        Self::InvalidRoomRange {
            low: err.low.value(),
            high: err.high.value(),
            reason: err.reason,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates an unknown room type or room number.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomledger::Error;
    ///
    /// let err = Error::NoSuchRoomType { selector: "7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoSuchRoomType { .. } | Self::RoomNotFound { .. })
    }

    /// Check if error indicates the requested room type is fully booked.
    ///
    /// Callers may retry with another room type.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::RoomsExhausted { .. })
    }

    /// Check if error indicates a data-integrity problem.
    #[must_use]
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Self::IntegrityViolation { .. } | Self::AlreadyOccupied { .. }
        )
    }
}
