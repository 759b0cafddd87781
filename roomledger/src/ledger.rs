//! The day's booking state.
//!
//! A [`DayLedger`] owns every index for the active date: availability,
//! the occupancy tree, the guest index, the undo stack, the reservation list
//! and the running revenue. Switching dates replaces the ledger wholesale.

pub mod availability;
pub mod guests;
pub mod occupancy;
pub mod undo;

use rust_decimal::Decimal;

use crate::catalog::RoomTypeCatalog;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, UndoAction};

pub use availability::{AvailabilityIndex, TypeAvailability};
pub use guests::GuestIndex;
pub use occupancy::OccupancyTree;
pub use undo::UndoLedger;

/// All mutable state for one date.
///
/// Mutations go through [`DayLedger::commit`] and [`DayLedger::reverse`],
/// which keep every index in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLedger {
    availability: AvailabilityIndex,
    occupancy: OccupancyTree,
    guests: GuestIndex,
    undo: UndoLedger,
    reservations: Vec<Reservation>,
    total_revenue: Decimal,
}

impl DayLedger {
    /// Creates an empty ledger with every room of `catalog` free.
    #[must_use]
    pub fn new(catalog: &RoomTypeCatalog) -> Self {
        Self {
            availability: AvailabilityIndex::seeded(catalog),
            occupancy: OccupancyTree::new(),
            guests: GuestIndex::new(),
            undo: UndoLedger::new(),
            reservations: Vec::new(),
            total_revenue: Decimal::ZERO,
        }
    }

    /// Returns the availability index.
    #[must_use]
    pub const fn availability(&self) -> &AvailabilityIndex {
        &self.availability
    }

    /// Returns the occupancy tree.
    #[must_use]
    pub const fn occupancy(&self) -> &OccupancyTree {
        &self.occupancy
    }

    /// Returns the guest index.
    #[must_use]
    pub const fn guests(&self) -> &GuestIndex {
        &self.guests
    }

    /// Returns the undo stack.
    #[must_use]
    pub const fn undo_ledger(&self) -> &UndoLedger {
        &self.undo
    }

    /// Returns the active reservations in booking order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the running revenue.
    #[must_use]
    pub const fn total_revenue(&self) -> Decimal {
        self.total_revenue
    }

    /// Returns the revenue recomputed from the reservation list, or `None`
    /// if the sum overflows.
    #[must_use]
    pub fn recomputed_revenue(&self) -> Option<Decimal> {
        self.reservations
            .iter()
            .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.total_cost()))
    }

    /// Books `reservation`'s room in every index.
    ///
    /// The revenue check and the availability commit are the only steps
    /// that can fail, and both run first, so a failed commit leaves the
    /// ledger untouched.
    pub(crate) fn commit(&mut self, type_index: usize, reservation: Reservation) -> Result<&Reservation> {
        let room = reservation.room_number();
        let revenue = self
            .total_revenue
            .checked_add(reservation.total_cost())
            .ok_or_else(|| {
                violation(format!(
                    "adding {} for room {room} overflows the revenue total",
                    reservation.total_cost()
                ))
            })?;
        self.availability
            .commit_occupy(type_index, room, reservation.guest_name())?;

        self.occupancy.insert(room);
        self.guests.record_booking(reservation.guest_name(), room);
        self.undo.push(reservation.undo_action());
        self.total_revenue = revenue;
        self.reservations.push(reservation);

        let last = self.reservations.len() - 1;
        Ok(&self.reservations[last])
    }

    /// Pops the top undo action without reversing it.
    pub(crate) fn pop_undo(&mut self) -> Option<UndoAction> {
        self.undo.pop()
    }

    /// Puts an action back on top of the undo stack.
    pub(crate) fn restore_undo(&mut self, action: UndoAction) {
        self.undo.push(action);
    }

    /// Reverses a popped undo action in every index.
    pub(crate) fn reverse(&mut self, type_index: usize, action: &UndoAction) -> Result<()> {
        let room = action.room_number;
        if !self.availability.commit_release(type_index, room)? {
            log::warn!("Room {room} was already free while undoing a booking");
        }

        self.total_revenue = (self.total_revenue - action.total_cost).max(Decimal::ZERO);
        self.occupancy.remove(room);
        if !self.guests.remove_last_booking(&action.guest_name, room) {
            log::warn!(
                "Guest index had no booking of room {room} for {}",
                action.guest_name
            );
        }

        if let Some(pos) = self.reservations.iter().rposition(|r| r.matches(action)) {
            self.reservations.remove(pos);
        } else {
            log::warn!("No reservation matched the undone booking of room {room}");
        }
        Ok(())
    }

    /// Checks that every index agrees with the others and with `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `Error::IntegrityViolation` describing the first disagreement.
    pub fn check_consistency(&self, catalog: &RoomTypeCatalog) -> Result<()> {
        let mut occupied_rooms = Vec::new();
        for (room_type, counts) in catalog.types().iter().zip(self.availability.iter()) {
            if counts.available() + counts.occupied() != room_type.total_rooms() {
                return Err(violation(format!(
                    "'{}' has {} available and {} occupied of {} rooms",
                    room_type.name(),
                    counts.available(),
                    counts.occupied(),
                    room_type.total_rooms()
                )));
            }
            occupied_rooms.extend(counts.occupants().map(|(room, _)| room));
        }
        occupied_rooms.sort_unstable();

        if occupied_rooms != self.occupancy.in_order() {
            return Err(violation(
                "occupancy tree disagrees with the availability index".to_string(),
            ));
        }

        let booked = self.reservations.len();
        if self.guests.booked_rooms() != booked || self.guests.history().len() != booked {
            return Err(violation(format!(
                "guest index holds {} rooms and {} history entries for {booked} reservations",
                self.guests.booked_rooms(),
                self.guests.history().len()
            )));
        }
        if self.undo.len() != booked {
            return Err(violation(format!(
                "undo stack holds {} actions for {booked} reservations",
                self.undo.len()
            )));
        }
        if occupied_rooms.len() != booked {
            return Err(violation(format!(
                "{} rooms occupied for {booked} reservations",
                occupied_rooms.len()
            )));
        }

        match self.recomputed_revenue() {
            Some(recomputed) if recomputed == self.total_revenue => {}
            Some(recomputed) => {
                return Err(violation(format!(
                    "running revenue {} differs from recomputed revenue {recomputed}",
                    self.total_revenue
                )));
            }
            None => {
                return Err(violation("recomputed revenue overflows".to_string()));
            }
        }
        Ok(())
    }
}

fn violation(details: String) -> Error {
    Error::IntegrityViolation { details }
}
