//! Line formats of a date's record file.
//!
//! ```text
//! TOTAL_REVENUE=<decimal>        (or "$<decimal>" or a bare decimal)
//! GuestName,RoomNumber,...       (optional header)
//! <guest>,<room>,<type>,<date>,<nights>,<hour>,<price>,<total>
//! <guest>,<room>                 (legacy)
//! ```
//!
//! Fields are not escaped. A full line is read from both ends: guest and
//! room from the front, date and the four numbers from the back, and the
//! room type is everything in between, so room type names may contain
//! commas. A guest name containing a comma still shifts every later field.

use rust_decimal::Decimal;

use crate::reservation::{Reservation, DEFAULT_CHECK_IN_HOUR};
use crate::room::RoomNumber;

/// Column header written as the second line of a record file.
pub const HEADER: &str = "GuestName,RoomNumber,RoomType,StayDate,Nights,CheckInHour,PricePerNight,TotalCost";

/// Prefix of the revenue line written by [`format_revenue_line`].
pub const REVENUE_PREFIX: &str = "TOTAL_REVENUE=";

const FULL_FIELDS: usize = 8;

/// Formats the revenue line.
#[must_use]
pub fn format_revenue_line(revenue: Decimal) -> String {
    format!("{REVENUE_PREFIX}{}", revenue.normalize())
}

/// Parses a revenue line in any of its three encodings.
///
/// Returns `None` if the value is not a decimal.
///
/// # Examples
///
/// ```
/// use roomledger::persistence::record::parse_revenue_line;
/// use roomledger::Decimal;
///
/// assert_eq!(parse_revenue_line("TOTAL_REVENUE=700"), Some(Decimal::from(700)));
/// assert_eq!(parse_revenue_line("$700"), Some(Decimal::from(700)));
/// assert_eq!(parse_revenue_line("700"), Some(Decimal::from(700)));
/// assert_eq!(parse_revenue_line("lots"), None);
/// ```
#[must_use]
pub fn parse_revenue_line(line: &str) -> Option<Decimal> {
    let line = line.trim();
    let value = line
        .strip_prefix(REVENUE_PREFIX)
        .or_else(|| line.strip_prefix('$'))
        .unwrap_or(line);
    value.trim().parse().ok()
}

/// Returns `true` if `line` is the column header.
#[must_use]
pub fn is_header(line: &str) -> bool {
    line.trim_end_matches('\r') == HEADER
}

/// A data line, classified by field count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLine {
    /// Eight or more fields, all parsed. Fields past the guest and room
    /// and before the date belong to the room type.
    Full(Reservation),
    /// Two to seven fields; only guest and room are kept.
    Legacy {
        /// The guest's name.
        guest_name: String,
        /// The booked room.
        room_number: RoomNumber,
    },
    /// A line that could not be parsed.
    Malformed {
        /// Why the line was rejected.
        reason: String,
    },
}

impl RecordLine {
    /// Classifies and parses one data line.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomledger::persistence::record::RecordLine;
    ///
    /// assert!(matches!(RecordLine::parse("Bob,101"), RecordLine::Legacy { .. }));
    /// assert!(matches!(RecordLine::parse("Bob,abc"), RecordLine::Malformed { .. }));
    /// assert!(matches!(
    ///     RecordLine::parse("Alice,236,Deluxe Suite,07-01-2025,2,15,350,700"),
    ///     RecordLine::Full(_)
    /// ));
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let fields: Vec<&str> = line.trim_end_matches('\r').split(',').collect();

        if fields.len() >= FULL_FIELDS {
            return match parse_full(&fields) {
                Ok(reservation) => Self::Full(reservation),
                Err(reason) => Self::Malformed { reason },
            };
        }
        if fields.len() < 2 {
            return Self::Malformed {
                reason: format!("expected at least 2 fields, found {}", fields.len()),
            };
        }

        let guest_name = fields[0].trim();
        if guest_name.is_empty() {
            return Self::Malformed {
                reason: "empty guest name".to_string(),
            };
        }
        match fields[1].parse::<RoomNumber>() {
            Ok(room_number) => Self::Legacy {
                guest_name: guest_name.to_string(),
                room_number,
            },
            Err(err) => Self::Malformed { reason: err.reason },
        }
    }

    /// Converts the line into a reservation, filing legacy lines under
    /// `file_date`.
    ///
    /// Legacy lines get one night, the default check-in hour, no price, and
    /// an empty room type for the engine to fill in.
    #[must_use]
    pub fn into_reservation(self, file_date: &str) -> Option<Reservation> {
        match self {
            Self::Full(reservation) => Some(reservation),
            Self::Legacy {
                guest_name,
                room_number,
            } => Reservation::builder(guest_name, room_number)
                .stay_date(file_date)
                .nights(1)
                .check_in_hour(DEFAULT_CHECK_IN_HOUR)
                .price_per_night(Decimal::ZERO)
                .total_cost(Decimal::ZERO)
                .build()
                .ok(),
            Self::Malformed { .. } => None,
        }
    }
}

fn parse_full(fields: &[&str]) -> Result<Reservation, String> {
    let tail = fields.len() - 5;
    let [stay_date, nights, hour, price, total] = [
        fields[tail],
        fields[tail + 1],
        fields[tail + 2],
        fields[tail + 3],
        fields[tail + 4],
    ];

    let room_number: RoomNumber = fields[1].parse().map_err(|_| bad_field("room number", fields[1]))?;
    let nights: u32 = nights.trim().parse().map_err(|_| bad_field("nights", nights))?;
    let check_in_hour: u8 = hour.trim().parse().map_err(|_| bad_field("check-in hour", hour))?;
    let price_per_night: Decimal = price
        .trim()
        .parse()
        .map_err(|_| bad_field("price per night", price))?;
    let total_cost: Decimal = total
        .trim()
        .parse()
        .map_err(|_| bad_field("total cost", total))?;

    Reservation::builder(fields[0], room_number)
        .room_type(fields[2..tail].join(","))
        .stay_date(stay_date)
        .nights(nights)
        .check_in_hour(check_in_hour)
        .price_per_night(price_per_night)
        .total_cost(total_cost)
        .build()
        .map_err(|err| err.to_string())
}

fn bad_field(name: &str, value: &str) -> String {
    format!("invalid {name} '{value}'")
}

/// Formats a reservation as a full data line.
#[must_use]
pub fn format_line(reservation: &Reservation) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        reservation.guest_name(),
        reservation.room_number(),
        reservation.room_type(),
        reservation.stay_date(),
        reservation.nights(),
        reservation.check_in_hour(),
        reservation.price_per_night().normalize(),
        reservation.total_cost().normalize()
    )
}
