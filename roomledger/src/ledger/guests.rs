//! Guest name to room lookup and chronological guest history.

use std::collections::HashMap;

use crate::room::RoomNumber;

/// Rooms held by each guest, plus every booking's guest in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestIndex {
    rooms: HashMap<String, Vec<RoomNumber>>,
    history: Vec<String>,
}

impl GuestIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a booking of `room` by `guest`.
    pub fn record_booking(&mut self, guest: &str, room: RoomNumber) {
        self.rooms.entry(guest.to_string()).or_default().push(room);
        self.history.push(guest.to_string());
    }

    /// Removes the most recent occurrence of `room` for `guest` and the most
    /// recent history entry for `guest`.
    ///
    /// Returns `false` if either was missing.
    pub fn remove_last_booking(&mut self, guest: &str, room: RoomNumber) -> bool {
        let mut removed_room = false;
        if let Some(rooms) = self.rooms.get_mut(guest) {
            if let Some(pos) = rooms.iter().rposition(|r| *r == room) {
                rooms.remove(pos);
                removed_room = true;
            }
            if rooms.is_empty() {
                self.rooms.remove(guest);
            }
        }

        let removed_history = match self.history.iter().rposition(|g| g == guest) {
            Some(pos) => {
                self.history.remove(pos);
                true
            }
            None => false,
        };

        removed_room && removed_history
    }

    /// Returns the rooms booked by `guest`, oldest first.
    #[must_use]
    pub fn lookup(&self, guest: &str) -> &[RoomNumber] {
        self.rooms.get(guest).map_or(&[], Vec::as_slice)
    }

    /// Returns the guest of every active booking, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns the total number of rooms held across all guests.
    #[must_use]
    pub fn booked_rooms(&self) -> usize {
        self.rooms.values().map(Vec::len).sum()
    }
}
