//! Reservation and undo records.
//!
//! A [`Reservation`] is one guest's booking of one room under a stay date
//! label. An [`UndoAction`] is the minimal record needed to reverse it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::room::RoomNumber;

/// Check-in hour used when a record does not carry one.
pub const DEFAULT_CHECK_IN_HOUR: u8 = 15;

/// A booked room with its pricing.
///
/// # Examples
///
/// ```
/// use roomledger::{Decimal, Reservation, RoomNumber};
///
/// let reservation = Reservation::builder("Alice", RoomNumber::try_from(236).unwrap())
///     .room_type("Deluxe Suite")
///     .stay_date("07-01-2025")
///     .nights(2)
///     .price_per_night(Decimal::from(350))
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.total_cost(), Decimal::from(700));
/// assert_eq!(reservation.check_in_hour(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    guest_name: String,
    room_number: RoomNumber,
    room_type: String,
    stay_date: String,
    nights: u32,
    check_in_hour: u8,
    price_per_night: Decimal,
    total_cost: Decimal,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(guest_name: impl Into<String>, room_number: RoomNumber) -> ReservationBuilder {
        ReservationBuilder {
            guest_name: guest_name.into(),
            room_number,
            room_type: String::new(),
            stay_date: String::new(),
            nights: 1,
            check_in_hour: DEFAULT_CHECK_IN_HOUR,
            price_per_night: Decimal::ZERO,
            total_cost: None,
        }
    }

    /// Returns the guest's name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the booked room.
    #[must_use]
    pub const fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Returns the name of the room's type.
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the stay date label.
    #[must_use]
    pub fn stay_date(&self) -> &str {
        &self.stay_date
    }

    /// Returns the number of nights.
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.nights
    }

    /// Returns the check-in hour (0-23).
    #[must_use]
    pub const fn check_in_hour(&self) -> u8 {
        self.check_in_hour
    }

    /// Returns the price per night.
    #[must_use]
    pub const fn price_per_night(&self) -> Decimal {
        self.price_per_night
    }

    /// Returns the total cost of the stay.
    #[must_use]
    pub const fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    /// Returns the undo action reversing this reservation.
    #[must_use]
    pub fn undo_action(&self) -> UndoAction {
        UndoAction {
            guest_name: self.guest_name.clone(),
            stay_date: self.stay_date.clone(),
            room_number: self.room_number,
            nights: self.nights,
            price_per_night: self.price_per_night,
            total_cost: self.total_cost,
        }
    }

    /// Returns `true` if `action` was produced by a booking of this reservation.
    #[must_use]
    pub fn matches(&self, action: &UndoAction) -> bool {
        self.guest_name == action.guest_name
            && self.room_number == action.room_number
            && self.stay_date == action.stay_date
    }

    pub(crate) fn set_room_type(&mut self, room_type: &str) {
        self.room_type = room_type.to_string();
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    guest_name: String,
    room_number: RoomNumber,
    room_type: String,
    stay_date: String,
    nights: u32,
    check_in_hour: u8,
    price_per_night: Decimal,
    total_cost: Option<Decimal>,
}

impl ReservationBuilder {
    /// Sets the room type name.
    #[must_use]
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Sets the stay date label.
    #[must_use]
    pub fn stay_date(mut self, stay_date: impl Into<String>) -> Self {
        self.stay_date = stay_date.into();
        self
    }

    /// Sets the number of nights.
    #[must_use]
    pub const fn nights(mut self, nights: u32) -> Self {
        self.nights = nights;
        self
    }

    /// Sets the check-in hour.
    #[must_use]
    pub const fn check_in_hour(mut self, hour: u8) -> Self {
        self.check_in_hour = hour;
        self
    }

    /// Sets the price per night.
    #[must_use]
    pub const fn price_per_night(mut self, price: Decimal) -> Self {
        self.price_per_night = price;
        self
    }

    /// Overrides the total cost instead of deriving it from price and nights.
    ///
    /// Used when restoring persisted records, whose stored total is kept
    /// verbatim.
    #[must_use]
    pub const fn total_cost(mut self, total: Decimal) -> Self {
        self.total_cost = Some(total);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The guest name is empty after trimming
    /// - `nights` is 0
    /// - The check-in hour is greater than 23
    /// - The price or total cost is negative
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let guest_name = self.guest_name.trim().to_string();
        if guest_name.is_empty() {
            return Err(ValidationError {
                field: "guest_name".into(),
                message: "guest name must be non-empty after trimming whitespace".into(),
            });
        }

        if self.nights == 0 {
            return Err(ValidationError {
                field: "nights".into(),
                message: "nights must be at least 1".into(),
            });
        }

        if self.check_in_hour > 23 {
            return Err(ValidationError {
                field: "check_in_hour".into(),
                message: format!("check-in hour {} is outside 0-23", self.check_in_hour),
            });
        }

        if self.price_per_night.is_sign_negative() && !self.price_per_night.is_zero() {
            return Err(ValidationError {
                field: "price_per_night".into(),
                message: "price must not be negative".into(),
            });
        }

        let total_cost = match self.total_cost {
            Some(total) => total,
            None => self
                .price_per_night
                .checked_mul(Decimal::from(self.nights))
                .ok_or_else(|| ValidationError {
                    field: "total_cost".into(),
                    message: format!(
                        "{} nights at {} overflows the total cost",
                        self.nights, self.price_per_night
                    ),
                })?,
        };
        if total_cost.is_sign_negative() && !total_cost.is_zero() {
            return Err(ValidationError {
                field: "total_cost".into(),
                message: "total cost must not be negative".into(),
            });
        }

        Ok(Reservation {
            guest_name,
            room_number: self.room_number,
            room_type: self.room_type,
            stay_date: self.stay_date,
            nights: self.nights,
            check_in_hour: self.check_in_hour,
            price_per_night: self.price_per_night,
            total_cost,
        })
    }
}

/// The minimal record needed to reverse one booking.
///
/// The action carries everything required to unwind every index on its
/// own; nothing is re-derived from the ledger's state at undo time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoAction {
    /// The guest who made the booking.
    pub guest_name: String,
    /// The stay date label of the booking.
    pub stay_date: String,
    /// The booked room.
    pub room_number: RoomNumber,
    /// Number of nights booked.
    pub nights: u32,
    /// Price per night at booking time.
    pub price_per_night: Decimal,
    /// Total cost added to revenue by the booking.
    pub total_cost: Decimal,
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
