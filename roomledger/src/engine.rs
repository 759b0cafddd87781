//! Booking orchestration.
//!
//! The [`BookingEngine`] pairs a read-only [`RoomTypeCatalog`] with the
//! active [`DayLedger`]. A booking resolves its room type, allocates the
//! lowest free room, and then commits to every index as one unit; an undo
//! pops the most recent action and reverses it in every index.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{RoomTypeCatalog, RoomTypeSelector};
use crate::config::HotelConfig;
use crate::error::{Error, Result};
use crate::ledger::DayLedger;
use crate::reservation::{Reservation, UndoAction};
use crate::room::RoomNumber;

#[cfg(test)]
mod proptests;

/// One line of the availability report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityEntry {
    /// 1-based menu option selecting this room type.
    pub option: usize,
    /// Room type name.
    pub room_type: String,
    /// Rooms of this type, as declared.
    pub rooms: String,
    /// Price per night.
    pub price_per_night: Decimal,
    /// Free rooms.
    pub available: usize,
    /// Occupied rooms.
    pub occupied: usize,
    /// All rooms of this type.
    pub total: usize,
}

/// Books and reverses reservations against the active date's ledger.
///
/// # Examples
///
/// ```
/// use roomledger::{BookingEngine, HotelConfig, RoomTypeSelector};
///
/// let mut engine = BookingEngine::from_config(&HotelConfig::default()).unwrap();
/// engine
///     .reserve(&RoomTypeSelector::Option(2), "Bob", "07-01-2025", 1, 15)
///     .unwrap();
///
/// let undone = engine.undo().unwrap().unwrap();
/// assert_eq!(undone.guest_name, "Bob");
/// assert!(engine.undo().unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct BookingEngine {
    catalog: RoomTypeCatalog,
    ledger: DayLedger,
}

impl BookingEngine {
    /// Creates an engine with an empty ledger.
    #[must_use]
    pub fn new(catalog: RoomTypeCatalog) -> Self {
        let ledger = DayLedger::new(&catalog);
        Self { catalog, ledger }
    }

    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &HotelConfig) -> Result<Self> {
        Ok(Self::new(RoomTypeCatalog::from_config(config)?))
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &RoomTypeCatalog {
        &self.catalog
    }

    /// Returns the active ledger.
    #[must_use]
    pub const fn ledger(&self) -> &DayLedger {
        &self.ledger
    }

    /// Books the lowest free room of the selected type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selector names no room type (`Error::NoSuchRoomType`)
    /// - Every room of the type is occupied (`Error::RoomsExhausted`)
    /// - The guest name is empty, `nights` is 0 or the hour exceeds 23
    pub fn reserve(
        &mut self,
        selector: &RoomTypeSelector,
        guest_name: &str,
        stay_date: &str,
        nights: u32,
        check_in_hour: u8,
    ) -> Result<Reservation> {
        let (type_index, room_type) = self.catalog.resolve(selector)?;
        let room = self
            .ledger
            .availability()
            .allocate(type_index)
            .ok_or_else(|| Error::RoomsExhausted {
                room_type: room_type.name().to_string(),
            })?;

        let reservation = Reservation::builder(guest_name, room)
            .room_type(room_type.name())
            .stay_date(stay_date)
            .nights(nights)
            .check_in_hour(check_in_hour)
            .price_per_night(room_type.price_per_night())
            .build()?;

        let committed = self.ledger.commit(type_index, reservation)?.clone();
        log::debug!(
            "Booked room {} ({}) for {} on {}",
            committed.room_number(),
            committed.room_type(),
            committed.guest_name(),
            committed.stay_date()
        );
        Ok(committed)
    }

    /// Books the exact room a persisted reservation names.
    ///
    /// A reservation with an empty room type takes the name of the type
    /// owning its room.
    ///
    /// # Errors
    ///
    /// Returns `Error::RoomNotFound` if the room belongs to no type, or
    /// `Error::AlreadyOccupied` if it is already booked.
    pub fn restore(&mut self, mut reservation: Reservation) -> Result<Reservation> {
        let room = reservation.room_number();
        let (type_index, room_type) = self
            .catalog
            .find_room_type(room)
            .ok_or(Error::RoomNotFound { room })?;

        if reservation.room_type().is_empty() {
            reservation.set_room_type(room_type.name());
        }

        let committed = self.ledger.commit(type_index, reservation)?.clone();
        log::debug!(
            "Restored room {} for {}",
            committed.room_number(),
            committed.guest_name()
        );
        Ok(committed)
    }

    /// Reverses the most recent booking.
    ///
    /// Returns `Ok(None)` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Returns `Error::IntegrityViolation` if the action's room belongs to
    /// no room type. The action stays on the stack.
    pub fn undo(&mut self) -> Result<Option<UndoAction>> {
        let Some(action) = self.ledger.pop_undo() else {
            log::debug!("Nothing to undo");
            return Ok(None);
        };

        let Some((type_index, _)) = self.catalog.find_room_type(action.room_number) else {
            let room = action.room_number;
            self.ledger.restore_undo(action);
            return Err(Error::IntegrityViolation {
                details: format!("undo action references room {room}, which is not part of any room type"),
            });
        };

        self.ledger.reverse(type_index, &action)?;
        log::debug!(
            "Undid booking of room {} for {}",
            action.room_number,
            action.guest_name
        );
        Ok(Some(action))
    }

    /// Discards all per-date state, leaving every room free.
    pub fn reset_state_for_new_date(&mut self) {
        self.ledger = DayLedger::new(&self.catalog);
    }

    /// Returns free, occupied and total counts per room type, in menu order.
    #[must_use]
    pub fn availability_report(&self) -> Vec<AvailabilityEntry> {
        self.catalog
            .types()
            .iter()
            .zip(self.ledger.availability().iter())
            .enumerate()
            .map(|(index, (room_type, counts))| AvailabilityEntry {
                option: index + 1,
                room_type: room_type.name().to_string(),
                rooms: room_type.rooms().to_string(),
                price_per_night: room_type.price_per_night(),
                available: counts.available(),
                occupied: counts.occupied(),
                total: counts.total(),
            })
            .collect()
    }

    /// Returns the occupied rooms in ascending order.
    #[must_use]
    pub fn occupied_rooms_in_order(&self) -> Vec<RoomNumber> {
        self.ledger.occupancy().in_order()
    }

    /// Returns the guest occupying `room`, if any.
    #[must_use]
    pub fn occupant(&self, room: RoomNumber) -> Option<&str> {
        let (type_index, _) = self.catalog.find_room_type(room)?;
        self.ledger.availability().occupant(type_index, room)
    }

    /// Returns the rooms booked by `guest_name`, oldest first.
    #[must_use]
    pub fn guest_rooms(&self, guest_name: &str) -> &[RoomNumber] {
        self.ledger.guests().lookup(guest_name)
    }

    /// Returns the guest of every active booking, oldest first.
    #[must_use]
    pub fn guest_history(&self) -> &[String] {
        self.ledger.guests().history()
    }

    /// Returns the active reservations filed under `stay_date`.
    #[must_use]
    pub fn reservations_on_date(&self, stay_date: &str) -> Vec<&Reservation> {
        self.ledger
            .reservations()
            .iter()
            .filter(|r| r.stay_date() == stay_date)
            .collect()
    }

    /// Returns every active reservation in booking order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        self.ledger.reservations()
    }

    /// Returns the revenue of the active reservations.
    #[must_use]
    pub const fn total_revenue(&self) -> Decimal {
        self.ledger.total_revenue()
    }

    /// Returns the number of bookings that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.ledger.undo_ledger().len()
    }

    /// Checks that the ledger's indexes agree with each other.
    ///
    /// # Errors
    ///
    /// Returns `Error::IntegrityViolation` on the first disagreement.
    pub fn check_consistency(&self) -> Result<()> {
        self.ledger.check_consistency(&self.catalog)
    }
}
