//! Per-type free and occupied room sets.
//!
//! The availability index is the single source of truth for whether a room
//! can be booked. Every room of every type is in exactly one of the two sets.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{RoomType, RoomTypeCatalog};
use crate::error::{Error, Result};
use crate::room::RoomNumber;

/// Free and occupied rooms of a single room type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAvailability {
    free: BTreeSet<RoomNumber>,
    occupied: BTreeMap<RoomNumber, String>,
    total: usize,
}

impl TypeAvailability {
    fn seeded(room_type: &RoomType) -> Self {
        Self {
            free: room_type.all_room_numbers().iter().copied().collect(),
            occupied: BTreeMap::new(),
            total: room_type.total_rooms(),
        }
    }

    /// Returns the number of free rooms.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Returns the number of occupied rooms.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied.len()
    }

    /// Returns the number of rooms of this type.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the occupied rooms with their guests, in room order.
    pub fn occupants(&self) -> impl Iterator<Item = (RoomNumber, &str)> {
        self.occupied.iter().map(|(room, guest)| (*room, guest.as_str()))
    }
}

/// Availability of every room type in a catalog, indexed like the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityIndex {
    types: Vec<TypeAvailability>,
}

impl AvailabilityIndex {
    /// Creates an index with every room of the catalog free.
    #[must_use]
    pub fn seeded(catalog: &RoomTypeCatalog) -> Self {
        Self {
            types: catalog.types().iter().map(TypeAvailability::seeded).collect(),
        }
    }

    /// Returns the availability of the type at `type_index`.
    #[must_use]
    pub fn for_type(&self, type_index: usize) -> Option<&TypeAvailability> {
        self.types.get(type_index)
    }

    /// Returns the lowest free room of a type without reserving it.
    ///
    /// Returns `None` if the type is exhausted or unknown.
    #[must_use]
    pub fn allocate(&self, type_index: usize) -> Option<RoomNumber> {
        self.types
            .get(type_index)
            .and_then(|t| t.free.first().copied())
    }

    /// Returns the guest occupying `room`, if any.
    #[must_use]
    pub fn occupant(&self, type_index: usize, room: RoomNumber) -> Option<&str> {
        self.types
            .get(type_index)
            .and_then(|t| t.occupied.get(&room))
            .map(String::as_str)
    }

    /// Moves `room` from free to occupied.
    ///
    /// # Errors
    ///
    /// Returns `Error::AlreadyOccupied` if the room is not free, or
    /// `Error::RoomNotFound` if the room does not belong to the type.
    pub fn commit_occupy(&mut self, type_index: usize, room: RoomNumber, guest: &str) -> Result<()> {
        let entry = self.type_mut(type_index)?;

        if let Some(current) = entry.occupied.get(&room) {
            return Err(Error::AlreadyOccupied {
                room,
                guest: current.clone(),
            });
        }
        if !entry.free.remove(&room) {
            return Err(Error::RoomNotFound { room });
        }

        entry.occupied.insert(room, guest.to_string());
        Ok(())
    }

    /// Moves `room` from occupied back to free.
    ///
    /// Releasing a room that is already free is a no-op. Returns `true` if
    /// the room was occupied.
    ///
    /// # Errors
    ///
    /// Returns `Error::IntegrityViolation` if `type_index` is out of range.
    pub fn commit_release(&mut self, type_index: usize, room: RoomNumber) -> Result<bool> {
        let entry = self.type_mut(type_index)?;
        if entry.occupied.remove(&room).is_none() {
            return Ok(false);
        }
        entry.free.insert(room);
        Ok(true)
    }

    /// Iterates over the per-type availability in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeAvailability> {
        self.types.iter()
    }

    fn type_mut(&mut self, type_index: usize) -> Result<&mut TypeAvailability> {
        self.types
            .get_mut(type_index)
            .ok_or_else(|| Error::IntegrityViolation {
                details: format!("no room type at index {type_index}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HotelConfig;

    fn room(n: u32) -> RoomNumber {
        RoomNumber::try_from(n).unwrap()
    }

    fn index() -> AvailabilityIndex {
        let catalog = RoomTypeCatalog::from_config(&HotelConfig::default()).unwrap();
        AvailabilityIndex::seeded(&catalog)
    }

    #[test]
    fn test_seeded_all_free() {
        let index = index();
        let suite = index.for_type(0).unwrap();
        assert_eq!(suite.available(), 15);
        assert_eq!(suite.occupied(), 0);
        assert_eq!(suite.total(), 15);
    }

    #[test]
    fn test_allocate_does_not_mutate() {
        let index = index();
        assert_eq!(index.allocate(0), Some(room(236)));
        assert_eq!(index.allocate(0), Some(room(236)));
        assert_eq!(index.allocate(9), None);
    }

    #[test]
    fn test_occupy_and_release() {
        let mut index = index();
        index.commit_occupy(0, room(236), "Alice").unwrap();

        assert_eq!(index.allocate(0), Some(room(237)));
        assert_eq!(index.occupant(0, room(236)), Some("Alice"));
        let suite = index.for_type(0).unwrap();
        assert_eq!(suite.available() + suite.occupied(), suite.total());

        assert!(index.commit_release(0, room(236)).unwrap());
        assert_eq!(index.allocate(0), Some(room(236)));
    }

    #[test]
    fn test_occupy_twice_fails() {
        let mut index = index();
        index.commit_occupy(1, room(301), "Alice").unwrap();
        let err = index.commit_occupy(1, room(301), "Bob").unwrap_err();
        assert!(matches!(err, Error::AlreadyOccupied { ref guest, .. } if guest == "Alice"));
        assert_eq!(index.for_type(1).unwrap().occupied(), 1);
    }

    #[test]
    fn test_occupy_foreign_room_fails() {
        let mut index = index();
        let err = index.commit_occupy(1, room(236), "Alice").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut index = index();
        assert!(!index.commit_release(0, room(240)).unwrap());
        assert_eq!(index.for_type(0).unwrap().available(), 15);
    }

    #[test]
    fn test_exhaustion() {
        let mut index = index();
        index.commit_occupy(1, room(301), "A").unwrap();
        index.commit_occupy(1, room(302), "B").unwrap();
        assert_eq!(index.allocate(1), None);

        let occupants: Vec<_> = index.for_type(1).unwrap().occupants().collect();
        assert_eq!(occupants, vec![(room(301), "A"), (room(302), "B")]);
    }
}
