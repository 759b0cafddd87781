//! Configuration schema definitions.
//!
//! This module defines the YAML structure describing a facility: its name,
//! where its record files live, and its room types.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use roomledger::config::{HotelConfig, RoomNumbersConfig, RoomTypeConfig};
/// use roomledger::Decimal;
///
/// let config = HotelConfig {
///     name: "Seaside".to_string(),
///     records_dir: None,
///     room_types: vec![RoomTypeConfig {
///         name: "Cabin".to_string(),
///         price_per_night: Decimal::from(90),
///         rooms: RoomNumbersConfig::Range { low: 1, high: 8 },
///     }],
/// };
/// assert_eq!(config.room_types[0].rooms.len(), 8);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HotelConfig {
    /// Display name of the facility.
    pub name: String,

    /// Directory holding the per-date record files (default: working directory).
    #[serde(default)]
    pub records_dir: Option<PathBuf>,

    /// Room categories offered by the facility.
    pub room_types: Vec<RoomTypeConfig>,
}

/// A single room category.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoomTypeConfig {
    /// Unique name of the room type.
    pub name: String,

    /// Price charged per night.
    pub price_per_night: Decimal,

    /// Room numbers belonging to this type.
    pub rooms: RoomNumbersConfig,
}

/// Room numbers of a type: an inclusive range or an explicit list.
///
/// # Examples
///
/// ```
/// use roomledger::config::RoomNumbersConfig;
///
/// let range = RoomNumbersConfig::Range { low: 236, high: 250 };
/// let list = RoomNumbersConfig::List(vec![301, 302]);
///
/// assert_eq!(range.numbers().first(), Some(&236));
/// assert_eq!(list.numbers(), vec![301, 302]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RoomNumbersConfig {
    /// An inclusive range of room numbers.
    Range {
        /// Lowest room number (inclusive).
        low: u32,
        /// Highest room number (inclusive).
        high: u32,
    },
    /// An explicit list of room numbers.
    List(Vec<u32>),
}

impl RoomNumbersConfig {
    /// Returns the configured room numbers in seeding order.
    ///
    /// An inverted range yields no rooms; the validator rejects it.
    #[must_use]
    pub fn numbers(&self) -> Vec<u32> {
        match self {
            Self::Range { low, high } => (*low..=*high).collect(),
            Self::List(rooms) => rooms.clone(),
        }
    }

    /// Returns the number of configured rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Range { low, high } if high >= low => (high - low) as usize + 1,
            Self::Range { .. } => 0,
            Self::List(rooms) => rooms.len(),
        }
    }

    /// Returns `true` if no rooms are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: "Hilton".to_string(),
            records_dir: None,
            room_types: vec![
                RoomTypeConfig {
                    name: "Standard Rooms, Courtyard".to_string(),
                    price_per_night: Decimal::from(125),
                    rooms: RoomNumbersConfig::Range { low: 101, high: 170 },
                },
                RoomTypeConfig {
                    name: "Standard Room, Scenic".to_string(),
                    price_per_night: Decimal::from(145),
                    rooms: RoomNumbersConfig::Range { low: 201, high: 235 },
                },
                RoomTypeConfig {
                    name: "Deluxe Suite".to_string(),
                    price_per_night: Decimal::from(350),
                    rooms: RoomNumbersConfig::Range { low: 236, high: 250 },
                },
                RoomTypeConfig {
                    name: "Penthouse".to_string(),
                    price_per_night: Decimal::from(1135),
                    rooms: RoomNumbersConfig::List(vec![301, 302]),
                },
            ],
        }
    }
}
