//! Configuration validation.
//!
//! Checks a [`HotelConfig`] before a catalog is built from it, most
//! importantly that room numbers partition globally: no room may belong to
//! two room types.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::config::schema::{HotelConfig, RoomNumbersConfig};
use crate::error::{Error, Result};

/// Upper bound on the rooms a single type may declare.
pub const MAX_ROOMS_PER_TYPE: usize = 10_000;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use roomledger::config::{ConfigValidator, HotelConfig};
///
/// assert!(ConfigValidator::validate(&HotelConfig::default()).is_ok());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` describing the first problem found.
    pub fn validate(config: &HotelConfig) -> Result<()> {
        if config.name.trim().is_empty() {
            return Err(invalid("name", "hotel name must be non-empty"));
        }
        if config.room_types.is_empty() {
            return Err(invalid("room_types", "at least one room type is required"));
        }

        let mut names = HashSet::new();
        let mut owners: HashMap<u32, &str> = HashMap::new();

        for room_type in &config.room_types {
            let name = room_type.name.as_str();
            if name.trim().is_empty() {
                return Err(invalid("room_types.name", "room type name must be non-empty"));
            }
            if !names.insert(name) {
                return Err(invalid(
                    "room_types.name",
                    &format!("duplicate room type '{name}'"),
                ));
            }
            if room_type.price_per_night <= Decimal::ZERO {
                return Err(invalid(
                    "room_types.price_per_night",
                    &format!("price for '{name}' must be positive"),
                ));
            }

            Self::validate_rooms(name, &room_type.rooms)?;

            for number in room_type.rooms.numbers() {
                if let Some(other) = owners.insert(number, name) {
                    if other == name {
                        return Err(invalid(
                            "room_types.rooms",
                            &format!("room {number} listed twice in '{name}'"),
                        ));
                    }
                    return Err(invalid(
                        "room_types.rooms",
                        &format!("room {number} belongs to both '{other}' and '{name}'"),
                    ));
                }
            }
        }

        Ok(())
    }

    fn validate_rooms(name: &str, rooms: &RoomNumbersConfig) -> Result<()> {
        match rooms {
            RoomNumbersConfig::Range { low, high } => {
                if *low == 0 {
                    return Err(invalid(
                        "room_types.rooms",
                        &format!("'{name}' range must start at room 1 or above"),
                    ));
                }
                if high < low {
                    return Err(Error::InvalidRoomRange {
                        low: *low,
                        high: *high,
                        reason: format!("inverted range for '{name}'"),
                    });
                }
            }
            RoomNumbersConfig::List(list) => {
                if list.is_empty() {
                    return Err(invalid(
                        "room_types.rooms",
                        &format!("'{name}' has no rooms"),
                    ));
                }
                if list.contains(&0) {
                    return Err(invalid(
                        "room_types.rooms",
                        &format!("'{name}' lists room 0"),
                    ));
                }
            }
        }

        if rooms.len() > MAX_ROOMS_PER_TYPE {
            return Err(invalid(
                "room_types.rooms",
                &format!("'{name}' declares more than {MAX_ROOMS_PER_TYPE} rooms"),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}
