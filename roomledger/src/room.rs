//! Room number and room range types.
//!
//! This module provides the validated numeric types used to address rooms,
//! including inclusive ranges used to seed room types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A valid room number (1 or greater).
///
/// Room 0 is rejected so that a zero left behind by a failed parse can
/// never address a real room.
///
/// # Examples
///
/// ```
/// use roomledger::RoomNumber;
///
/// let room = RoomNumber::try_from(236).unwrap();
/// assert_eq!(room.value(), 236);
///
/// assert!(RoomNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Returns the underlying room number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RoomNumber {
    type Error = InvalidRoomNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidRoomNumberError {
                value,
                reason: "room 0 is invalid".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<RoomNumber> for u32 {
    fn from(room: RoomNumber) -> Self {
        room.0
    }
}

impl FromStr for RoomNumber {
    type Err = InvalidRoomNumberError;

    /// Parses a room number, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| InvalidRoomNumberError {
            value: 0,
            reason: format!("'{s}' is not a room number"),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomNumberError {
    /// The invalid room value (0 when the input was not numeric).
    pub value: u32,
    /// The reason the room number is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomNumberError {}

/// An inclusive range of room numbers.
///
/// # Examples
///
/// ```
/// use roomledger::{RoomNumber, RoomRange};
///
/// let low = RoomNumber::try_from(236).unwrap();
/// let high = RoomNumber::try_from(250).unwrap();
/// let range = RoomRange::new(low, high).unwrap();
///
/// assert_eq!(range.len(), 15);
/// assert!(range.contains(RoomNumber::try_from(240).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRange {
    low: RoomNumber,
    high: RoomNumber,
}

impl RoomRange {
    /// Creates a new room range.
    ///
    /// # Errors
    ///
    /// Returns an error if `high` is less than `low`.
    pub fn new(low: RoomNumber, high: RoomNumber) -> Result<Self, InvalidRoomRangeError> {
        if high < low {
            Err(InvalidRoomRangeError {
                low,
                high,
                reason: "high must be greater than or equal to low".into(),
            })
        } else {
            Ok(Self { low, high })
        }
    }

    /// Returns the lowest room in the range.
    #[must_use]
    pub const fn low(&self) -> RoomNumber {
        self.low
    }

    /// Returns the highest room in the range.
    #[must_use]
    pub const fn high(&self) -> RoomNumber {
        self.high
    }

    /// Returns `true` if the range contains the given room.
    #[must_use]
    pub const fn contains(&self, room: RoomNumber) -> bool {
        room.value() >= self.low.value() && room.value() <= self.high.value()
    }

    /// Returns the number of rooms in the range (inclusive).
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.high.value() - self.low.value() + 1
    }

    /// Always `false`; a valid range holds at least one room.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over all rooms in ascending order.
    #[must_use]
    pub fn iter(self) -> RoomRangeIter {
        RoomRangeIter {
            next: Some(self.low.value()),
            high: self.high.value(),
        }
    }
}

impl fmt::Display for RoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} thru {}", self.low, self.high)
    }
}

impl IntoIterator for RoomRange {
    type Item = RoomNumber;
    type IntoIter = RoomRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over rooms in a `RoomRange`.
#[derive(Debug)]
pub struct RoomRangeIter {
    next: Option<u32>,
    high: u32,
}

impl Iterator for RoomRangeIter {
    type Item = RoomNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.high {
            Some(current + 1)
        } else {
            None
        };
        Some(RoomNumber(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |current| (self.high - current + 1) as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RoomRangeIter {}

/// Error type for invalid room ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomRangeError {
    /// The requested lowest room.
    pub low: RoomNumber,
    /// The requested highest room.
    pub high: RoomNumber,
    /// The reason the range is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid room range {}-{}: {}",
            self.low, self.high, self.reason
        )
    }
}

impl std::error::Error for InvalidRoomRangeError {}
