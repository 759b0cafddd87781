//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, date resolution, opening the active
//! date's ledger, and output formatting.

use crate::error::CliError;
use roomledger::{
    BookingEngine, ConfigLoader, Decimal, Error as LibError, HotelConfig, LoadReport,
    PersistenceCoordinator, Reservation, RoomTypeSelector, SaveReport, UndoAction,
};
use std::path::PathBuf;

/// Format of date labels derived from the system clock.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Hotel configuration file.
    pub config: Option<PathBuf>,

    /// Directory holding the record files.
    pub records_dir: Option<PathBuf>,

    /// Active date label (default: today).
    pub date: Option<String>,
}

/// Load the hotel configuration, or the built-in defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<HotelConfig, CliError> {
    ConfigLoader::load(global.config.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Today's date label from the system clock.
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Resolve the active date label.
///
/// Priority: `--date` > today.
pub fn resolve_date(global: &GlobalOptions) -> Result<String, CliError> {
    match global.date.as_deref().map(str::trim) {
        Some("") => Err(CliError::InvalidArguments(
            "date label must not be empty".to_string(),
        )),
        Some(date) => Ok(date.to_string()),
        None => Ok(today()),
    }
}

/// Resolve the record directory.
///
/// Priority: `--records-dir` > configuration > current directory.
pub fn resolve_records_dir(global: &GlobalOptions, config: &HotelConfig) -> PathBuf {
    global
        .records_dir
        .clone()
        .or_else(|| config.records_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Validate a guest name for booking.
///
/// Record files do not escape commas, so names containing one are refused.
pub fn validate_guest_name(name: &str) -> Result<String, CliError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidArguments(
            "guest name must not be empty".to_string(),
        ));
    }
    if trimmed.contains(',') {
        return Err(CliError::InvalidArguments(format!(
            "guest name '{trimmed}' must not contain a comma"
        )));
    }
    Ok(trimmed.to_string())
}

/// Format an amount for display.
pub fn format_money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// What [`OpenLedger::persist`] did with the active date's record file.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The file was rewritten.
    Saved(SaveReport),
    /// The last reservation was undone, so the file was removed.
    Cleared,
    /// Nothing changed since the date was loaded; the file was left alone.
    Unchanged,
}

/// The engine with the active date loaded, and where it is persisted.
///
/// Bookings and undos go through this type so that it knows whether the
/// date's record file still describes the in-memory state.
pub struct OpenLedger {
    engine: BookingEngine,
    coordinator: PersistenceCoordinator,
    date: String,
    dirty: bool,
}

impl OpenLedger {
    /// Wrap an engine; nothing is loaded yet.
    pub fn new(engine: BookingEngine, coordinator: PersistenceCoordinator, date: &str) -> Self {
        Self {
            engine,
            coordinator,
            date: date.to_string(),
            dirty: false,
        }
    }

    /// Build the engine and load the active date from its record file.
    pub fn open(global: &GlobalOptions) -> Result<(Self, LoadReport), CliError> {
        let config = load_configuration(global)?;
        let date = resolve_date(global)?;
        let engine = BookingEngine::from_config(&config).map_err(|e| CliError::Config(e.to_string()))?;
        let coordinator = PersistenceCoordinator::in_dir(resolve_records_dir(global, &config));

        let mut ledger = Self::new(engine, coordinator, &date);
        let report = ledger.switch_to(&date)?;
        Ok((ledger, report))
    }

    /// The booking engine.
    pub fn engine(&self) -> &BookingEngine {
        &self.engine
    }

    /// The active date label.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Make `date` active, loading its record file.
    pub fn switch_to(&mut self, date: &str) -> Result<LoadReport, CliError> {
        self.date = date.to_string();
        self.dirty = false;
        self.coordinator
            .load(&mut self.engine, &self.date)
            .map_err(CliError::from)
    }

    /// Book a room on the active date.
    pub fn reserve(
        &mut self,
        selector: &RoomTypeSelector,
        guest: &str,
        nights: u32,
        check_in_hour: u8,
    ) -> Result<Reservation, CliError> {
        let reservation = self
            .engine
            .reserve(selector, guest, &self.date, nights, check_in_hour)?;
        self.dirty = true;
        Ok(reservation)
    }

    /// Reverse the most recent booking; `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Result<Option<UndoAction>, CliError> {
        let action = self.engine.undo()?;
        if action.is_some() {
            self.dirty = true;
        }
        Ok(action)
    }

    /// Write the active date back if it changed.
    ///
    /// An unchanged date is never rewritten or removed, so records that
    /// could not be restored stay on disk. The file is removed only when
    /// this ledger's own undos left nothing to save.
    pub fn persist(&mut self) -> Result<SaveOutcome, CliError> {
        if !self.dirty {
            return Ok(SaveOutcome::Unchanged);
        }

        let outcome = match self.coordinator.save(&self.engine, &self.date) {
            Ok(report) => SaveOutcome::Saved(report),
            Err(LibError::NothingToSave { .. }) => {
                self.coordinator.clear(&self.date)?;
                SaveOutcome::Cleared
            }
            Err(e) => return Err(e.into()),
        };
        self.dirty = false;
        Ok(outcome)
    }
}

/// Print load problems to stderr.
pub fn report_load(report: &LoadReport, global: &GlobalOptions) {
    if global.quiet {
        return;
    }

    for skipped in &report.skipped_lines {
        eprintln!(
            "Warning: skipped line {} of {}: {}",
            skipped.line_number, report.date, skipped.reason
        );
    }
    for record in &report.unrestorable {
        eprintln!(
            "Warning: could not restore room {} for guest {}: {}",
            record.room_number, record.guest_name, record.reason
        );
    }
    if global.verbose {
        if report.found {
            eprintln!(
                "Loaded {} reservation(s) for {}",
                report.restored, report.date
            );
        } else {
            eprintln!("No existing reservations file found for {}", report.date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_guest_name() {
        assert_eq!(validate_guest_name("  Alice ").unwrap(), "Alice");
        assert!(validate_guest_name("   ").is_err());
        assert!(validate_guest_name("Smith, John").is_err());
    }

    #[test]
    fn test_resolve_date() {
        let global = GlobalOptions {
            date: Some("07-01-2025".to_string()),
            ..GlobalOptions::default()
        };
        assert_eq!(resolve_date(&global).unwrap(), "07-01-2025");

        let empty = GlobalOptions {
            date: Some(" ".to_string()),
            ..GlobalOptions::default()
        };
        assert!(resolve_date(&empty).is_err());
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
    }

    #[test]
    fn test_records_dir_priority() {
        let mut config = HotelConfig::default();
        let global = GlobalOptions::default();
        assert_eq!(resolve_records_dir(&global, &config), PathBuf::from("."));

        config.records_dir = Some(PathBuf::from("/srv/hotel"));
        assert_eq!(
            resolve_records_dir(&global, &config),
            PathBuf::from("/srv/hotel")
        );

        let global = GlobalOptions {
            records_dir: Some(PathBuf::from("/tmp/records")),
            ..GlobalOptions::default()
        };
        assert_eq!(
            resolve_records_dir(&global, &config),
            PathBuf::from("/tmp/records")
        );
    }

    fn ledger_in(temp: &tempfile::TempDir, date: &str) -> OpenLedger {
        let mut ledger = OpenLedger::new(
            BookingEngine::from_config(&HotelConfig::default()).unwrap(),
            PersistenceCoordinator::in_dir(temp.path()),
            date,
        );
        ledger.switch_to(date).unwrap();
        ledger
    }

    #[test]
    fn test_persist_skips_an_unchanged_date() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("07-01-2025.txt");
        std::fs::write(&path, "TOTAL_REVENUE=0\nBob,999\n").unwrap();
        let mut ledger = ledger_in(&temp, "07-01-2025");

        assert!(matches!(ledger.persist().unwrap(), SaveOutcome::Unchanged));
        assert!(ledger.undo().unwrap().is_none());
        assert!(matches!(ledger.persist().unwrap(), SaveOutcome::Unchanged));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "TOTAL_REVENUE=0\nBob,999\n");
    }

    #[test]
    fn test_persist_outcomes_follow_changes() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("07-01-2025.txt");
        let mut ledger = ledger_in(&temp, "07-01-2025");
        let suite: RoomTypeSelector = "Deluxe Suite".parse().unwrap();

        ledger.reserve(&suite, "Alice", 1, 15).unwrap();
        match ledger.persist().unwrap() {
            SaveOutcome::Saved(report) => assert_eq!(report.reservations, 1),
            other => panic!("expected a save, got {other:?}"),
        }
        assert!(matches!(ledger.persist().unwrap(), SaveOutcome::Unchanged));

        ledger.undo().unwrap();
        assert!(matches!(ledger.persist().unwrap(), SaveOutcome::Cleared));
        assert!(!path.exists());

        ledger.switch_to("07-02-2025").unwrap();
        assert!(matches!(ledger.persist().unwrap(), SaveOutcome::Unchanged));
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from(700)), "$700.00");
        assert_eq!(format_money(Decimal::new(995, 1)), "$99.50");
    }
}
