//! The facility's catalog of room types.
//!
//! A catalog is built once from a validated [`HotelConfig`] and is read-only
//! afterwards. Room types are kept sorted by name, and 1-based menu options
//! index that order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::{ConfigValidator, HotelConfig, RoomNumbersConfig};
use crate::error::{Error, Result};
use crate::room::{RoomNumber, RoomRange};

/// How a room type's rooms were declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomNumbers {
    /// A contiguous inclusive range.
    Range(RoomRange),
    /// An explicit list.
    List(Vec<RoomNumber>),
}

impl fmt::Display for RoomNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(range) => write!(f, "{range}"),
            Self::List(rooms) => {
                let rendered: Vec<String> = rooms.iter().map(ToString::to_string).collect();
                match rendered.split_last() {
                    Some((last, rest)) if !rest.is_empty() => {
                        write!(f, "{} and {last}", rest.join(", "))
                    }
                    _ => write!(f, "{}", rendered.join("")),
                }
            }
        }
    }
}

/// A category of rooms sharing a price and a fixed set of room numbers.
///
/// # Examples
///
/// ```
/// use roomledger::{RoomTypeCatalog, HotelConfig, RoomNumber};
///
/// let catalog = RoomTypeCatalog::from_config(&HotelConfig::default()).unwrap();
/// let (_, suite) = catalog.find_room_type(RoomNumber::try_from(240).unwrap()).unwrap();
///
/// assert_eq!(suite.name(), "Deluxe Suite");
/// assert_eq!(suite.total_rooms(), 15);
/// assert_eq!(suite.rooms().to_string(), "236 thru 250");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomType {
    name: String,
    price_per_night: Decimal,
    rooms: RoomNumbers,
    all_room_numbers: Vec<RoomNumber>,
}

impl RoomType {
    /// Creates a room type from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a room number is 0 or a range is inverted.
    pub fn from_config(name: &str, price_per_night: Decimal, rooms: &RoomNumbersConfig) -> Result<Self> {
        let rooms = match rooms {
            RoomNumbersConfig::Range { low, high } => RoomNumbers::Range(RoomRange::new(
                RoomNumber::try_from(*low)?,
                RoomNumber::try_from(*high)?,
            )?),
            RoomNumbersConfig::List(list) => RoomNumbers::List(
                list.iter()
                    .map(|n| RoomNumber::try_from(*n))
                    .collect::<std::result::Result<_, _>>()?,
            ),
        };

        let all_room_numbers = match &rooms {
            RoomNumbers::Range(range) => range.iter().collect(),
            RoomNumbers::List(list) => list.clone(),
        };

        Ok(Self {
            name: name.to_string(),
            price_per_night,
            rooms,
            all_room_numbers,
        })
    }

    /// Returns the room type's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price per night.
    #[must_use]
    pub const fn price_per_night(&self) -> Decimal {
        self.price_per_night
    }

    /// Returns how the rooms were declared.
    #[must_use]
    pub const fn rooms(&self) -> &RoomNumbers {
        &self.rooms
    }

    /// Returns every room of this type in seeding order.
    #[must_use]
    pub fn all_room_numbers(&self) -> &[RoomNumber] {
        &self.all_room_numbers
    }

    /// Returns the number of rooms of this type.
    #[must_use]
    pub fn total_rooms(&self) -> usize {
        self.all_room_numbers.len()
    }

    /// Returns `true` if the room belongs to this type.
    #[must_use]
    pub fn contains(&self, room: RoomNumber) -> bool {
        match &self.rooms {
            RoomNumbers::Range(range) => range.contains(room),
            RoomNumbers::List(list) => list.contains(&room),
        }
    }
}

/// Selects a room type by 1-based menu option or by name.
///
/// # Examples
///
/// ```
/// use roomledger::RoomTypeSelector;
///
/// assert_eq!("3".parse::<RoomTypeSelector>().unwrap(), RoomTypeSelector::Option(3));
/// assert_eq!(
///     "Deluxe Suite".parse::<RoomTypeSelector>().unwrap(),
///     RoomTypeSelector::name("Deluxe Suite"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomTypeSelector {
    /// 1-based position in the name-sorted catalog.
    Option(usize),
    /// Exact room type name.
    Name(String),
}

impl RoomTypeSelector {
    /// Creates a selector by name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl FromStr for RoomTypeSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<usize>()
            .map_or_else(|_| Self::Name(trimmed.to_string()), Self::Option))
    }
}

impl fmt::Display for RoomTypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option(n) => write!(f, "option {n}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Static configuration of the facility's room types.
#[derive(Debug, Clone)]
pub struct RoomTypeCatalog {
    hotel_name: String,
    types: Vec<RoomType>,
    owners: HashMap<RoomNumber, usize>,
}

impl RoomTypeCatalog {
    /// Builds a catalog from a configuration, validating it first.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, in particular if a
    /// room number belongs to more than one room type.
    pub fn from_config(config: &HotelConfig) -> Result<Self> {
        ConfigValidator::validate(config)?;

        let mut types = config
            .room_types
            .iter()
            .map(|t| RoomType::from_config(&t.name, t.price_per_night, &t.rooms))
            .collect::<Result<Vec<_>>>()?;
        types.sort_by(|a, b| a.name.cmp(&b.name));

        let mut owners = HashMap::new();
        for (index, room_type) in types.iter().enumerate() {
            for room in room_type.all_room_numbers() {
                if owners.insert(*room, index).is_some() {
                    return Err(Error::Validation {
                        field: "room_types.rooms".into(),
                        message: format!("room {room} belongs to more than one room type"),
                    });
                }
            }
        }

        Ok(Self {
            hotel_name: config.name.clone(),
            types,
            owners,
        })
    }

    /// Returns the facility name.
    #[must_use]
    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Returns the room types in name order.
    #[must_use]
    pub fn types(&self) -> &[RoomType] {
        &self.types
    }

    /// Returns the room type at `index` (0-based).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RoomType> {
        self.types.get(index)
    }

    /// Returns the number of room types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if the catalog has no room types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the total number of rooms across all types.
    #[must_use]
    pub fn total_rooms(&self) -> usize {
        self.owners.len()
    }

    /// Finds the room type that owns `room`, with its 0-based index.
    #[must_use]
    pub fn find_room_type(&self, room: RoomNumber) -> Option<(usize, &RoomType)> {
        self.owners
            .get(&room)
            .map(|&index| (index, &self.types[index]))
    }

    /// Resolves a selector to a room type and its 0-based index.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuchRoomType` if the option is out of range or no
    /// room type has that name.
    pub fn resolve(&self, selector: &RoomTypeSelector) -> Result<(usize, &RoomType)> {
        let found = match selector {
            RoomTypeSelector::Option(n) => n
                .checked_sub(1)
                .and_then(|index| self.types.get(index).map(|t| (index, t))),
            RoomTypeSelector::Name(name) => self
                .types
                .iter()
                .enumerate()
                .find(|(_, t)| t.name == *name),
        };

        found.ok_or_else(|| Error::NoSuchRoomType {
            selector: selector.to_string(),
        })
    }
}
