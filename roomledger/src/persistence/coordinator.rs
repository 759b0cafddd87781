//! Date-scoped save and load.
//!
//! Saving writes the reservations filed under a date. Loading makes a date
//! authoritative: the engine is reset first, then every readable record is
//! replayed against the exact room it names. Bad lines and duplicate rooms
//! are reported and skipped; they never abort a load.

use std::path::PathBuf;
use std::str::Utf8Error;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::BookingEngine;
use crate::error::{Error, Result};
use crate::persistence::record::{self, RecordLine};
use crate::persistence::store::RecordStore;
use crate::room::RoomNumber;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// The saved date.
    pub date: String,
    /// The file written.
    pub path: PathBuf,
    /// Number of reservations written.
    pub reservations: usize,
    /// Revenue of the written reservations.
    pub revenue: Decimal,
}

/// A data line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// Why the line was skipped.
    pub reason: String,
}

/// A parsed record whose room could not be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrestorableRecord {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// The record's guest.
    pub guest_name: String,
    /// The record's room.
    pub room_number: RoomNumber,
    /// Why the room could not be booked.
    pub reason: String,
}

/// Outcome of a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// The loaded date.
    pub date: String,
    /// Whether a record file existed.
    pub found: bool,
    /// Revenue stated on the file's first line, if readable.
    pub recorded_revenue: Option<Decimal>,
    /// Whether the file carried the column header.
    pub had_header: bool,
    /// Records replayed into the engine.
    pub restored: usize,
    /// Restored records that used the two-field legacy format.
    pub legacy_records: usize,
    /// Lines that could not be parsed.
    pub skipped_lines: Vec<SkippedLine>,
    /// Records whose room was unknown or already taken.
    pub unrestorable: Vec<UnrestorableRecord>,
}

impl LoadReport {
    fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            ..Self::default()
        }
    }

    /// Returns `true` if every data line was restored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_lines.is_empty() && self.unrestorable.is_empty()
    }
}

/// Saves and loads the engine's state for one date at a time.
///
/// # Examples
///
/// ```no_run
/// use roomledger::{BookingEngine, HotelConfig, PersistenceCoordinator, RoomTypeSelector};
///
/// let mut engine = BookingEngine::from_config(&HotelConfig::default()).unwrap();
/// let coordinator = PersistenceCoordinator::in_dir("records");
///
/// engine
///     .reserve(&RoomTypeSelector::Option(1), "Alice", "07-01-2025", 2, 15)
///     .unwrap();
/// coordinator.save(&engine, "07-01-2025").unwrap();
///
/// let report = coordinator.load(&mut engine, "07-01-2025").unwrap();
/// assert_eq!(report.restored, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PersistenceCoordinator {
    store: RecordStore,
}

impl PersistenceCoordinator {
    /// Creates a coordinator over `store`.
    #[must_use]
    pub const fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Creates a coordinator over the record files in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(RecordStore::new(dir))
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Writes every reservation filed under `date` to that date's file.
    ///
    /// # Errors
    ///
    /// Returns `Error::NothingToSave` if no reservation is filed under
    /// `date`, or an I/O error if the file cannot be written.
    pub fn save(&self, engine: &BookingEngine, date: &str) -> Result<SaveReport> {
        let reservations = engine.reservations_on_date(date);
        if reservations.is_empty() {
            return Err(Error::NothingToSave {
                date: date.to_string(),
            });
        }

        let revenue = reservations
            .iter()
            .try_fold(Decimal::ZERO, |sum, r| sum.checked_add(r.total_cost()))
            .ok_or_else(|| Error::IntegrityViolation {
                details: format!("revenue for {date} overflows"),
            })?;

        let mut contents = String::new();
        contents.push_str(&record::format_revenue_line(revenue));
        contents.push('\n');
        contents.push_str(record::HEADER);
        contents.push('\n');
        for reservation in &reservations {
            contents.push_str(&record::format_line(reservation));
            contents.push('\n');
        }

        let path = self.store.write(date, &contents)?;
        log::debug!(
            "Saved {} reservations for {date} to {}",
            reservations.len(),
            path.display()
        );

        Ok(SaveReport {
            date: date.to_string(),
            path,
            reservations: reservations.len(),
            revenue,
        })
    }

    /// Makes `date` the engine's active date, replaying its record file.
    ///
    /// The engine is reset before anything else, so a missing file leaves
    /// it empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read. The engine has
    /// been reset by then.
    pub fn load(&self, engine: &mut BookingEngine, date: &str) -> Result<LoadReport> {
        engine.reset_state_for_new_date();
        let mut report = LoadReport::new(date);

        let Some(contents) = self.store.read(date)? else {
            log::debug!("No record file for {date}, starting fresh");
            return Ok(report);
        };
        report.found = true;

        let contents = contents.strip_suffix(b"\n").unwrap_or(&contents[..]);
        if contents.is_empty() {
            log::debug!("Record file for {date} is empty");
            return Ok(report);
        }

        let mut lines = contents
            .split(|&b| b == b'\n')
            .enumerate()
            .map(|(i, raw)| (i + 1, decode_line(raw)))
            .peekable();

        if let Some((_, first)) = lines.next() {
            report.recorded_revenue = first.ok().and_then(record::parse_revenue_line);
            if report.recorded_revenue.is_none() {
                log::warn!("Unreadable revenue line in record file for {date}");
            }
        }

        if lines
            .peek()
            .is_some_and(|(_, line)| matches!(line, Ok(l) if record::is_header(l)))
        {
            lines.next();
            report.had_header = true;
        }

        for (line_number, line) in lines {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => Self::replay_line(engine, date, line_number, line, &mut report),
                Err(err) => {
                    log::warn!("Skipping line {line_number} of {date}: {err}");
                    report.skipped_lines.push(SkippedLine {
                        line_number,
                        reason: format!("line is not valid UTF-8: {err}"),
                    });
                }
            }
        }

        if let Some(recorded) = report.recorded_revenue {
            if recorded != engine.total_revenue() {
                log::warn!(
                    "Record file for {date} states revenue {recorded}, restored reservations total {}",
                    engine.total_revenue()
                );
            }
        }

        log::debug!(
            "Loaded {date}: {} restored, {} skipped, {} unrestorable",
            report.restored,
            report.skipped_lines.len(),
            report.unrestorable.len()
        );
        Ok(report)
    }

    /// Deletes the record file for `date`. Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self, date: &str) -> Result<bool> {
        self.store.remove(date)
    }

    fn replay_line(
        engine: &mut BookingEngine,
        date: &str,
        line_number: usize,
        line: &str,
        report: &mut LoadReport,
    ) {
        let parsed = RecordLine::parse(line);
        let is_legacy = matches!(parsed, RecordLine::Legacy { .. });

        if let RecordLine::Malformed { reason } = &parsed {
            log::warn!("Skipping line {line_number} of {date}: {reason}");
            report.skipped_lines.push(SkippedLine {
                line_number,
                reason: reason.clone(),
            });
            return;
        }

        let Some(reservation) = parsed.into_reservation(date) else {
            report.skipped_lines.push(SkippedLine {
                line_number,
                reason: "record could not be converted to a reservation".to_string(),
            });
            return;
        };

        let guest_name = reservation.guest_name().to_string();
        let room_number = reservation.room_number();
        match engine.restore(reservation) {
            Ok(_) => {
                report.restored += 1;
                if is_legacy {
                    report.legacy_records += 1;
                }
            }
            Err(err) => {
                log::warn!("Could not restore room {room_number} for {guest_name}: {err}");
                report.unrestorable.push(UnrestorableRecord {
                    line_number,
                    guest_name,
                    room_number,
                    reason: err.to_string(),
                });
            }
        }
    }
}

/// Decodes one raw record line, dropping a trailing carriage return.
fn decode_line(raw: &[u8]) -> std::result::Result<&str, Utf8Error> {
    std::str::from_utf8(raw).map(|line| line.strip_suffix('\r').unwrap_or(line))
}
