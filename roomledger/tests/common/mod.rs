//! Common test utilities for integration tests.
//!
//! This module provides a temporary record directory paired with an engine
//! and coordinator, plus a builder for hand-written record files.

use std::fs;
use std::path::{Path, PathBuf};

use roomledger::persistence::record::HEADER;
use roomledger::{BookingEngine, HotelConfig, PersistenceCoordinator};
use tempfile::TempDir;

/// A hotel with the default catalog and its own record directory.
///
/// The directory is removed when the fixture is dropped.
pub struct Hotel {
    pub engine: BookingEngine,
    pub coordinator: PersistenceCoordinator,
    temp: TempDir,
}

impl Hotel {
    /// Creates a fixture with the built-in configuration.
    pub fn new() -> Self {
        Self::with_config(&HotelConfig::default())
    }

    /// Creates a fixture with a custom configuration.
    pub fn with_config(config: &HotelConfig) -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        Self {
            engine: BookingEngine::from_config(config).expect("valid config"),
            coordinator: PersistenceCoordinator::in_dir(temp.path()),
            temp,
        }
    }

    /// Returns the record directory.
    pub fn dir(&self) -> &Path {
        self.temp.path()
    }

    /// Returns the path of the record file for `date`.
    pub fn record_path(&self, date: &str) -> PathBuf {
        self.temp.path().join(format!("{date}.txt"))
    }

    /// Writes a raw record file for `date`.
    pub fn write_record(&self, date: &str, contents: &str) {
        fs::write(self.record_path(date), contents).expect("write record file");
    }

    /// Reads the record file for `date`.
    #[allow(dead_code)]
    pub fn read_record(&self, date: &str) -> String {
        fs::read_to_string(self.record_path(date)).expect("read record file")
    }
}

/// Builder for record file contents.
///
/// # Examples
///
/// ```no_run
/// # use common::RecordFile;
/// let contents = RecordFile::revenue("TOTAL_REVENUE=700")
///     .header()
///     .line("Alice,236,Deluxe Suite,07-01-2025,2,15,350,700")
///     .build();
/// ```
pub struct RecordFile {
    lines: Vec<String>,
}

impl RecordFile {
    /// Starts a file with the given first line.
    pub fn revenue(first_line: &str) -> Self {
        Self {
            lines: vec![first_line.to_string()],
        }
    }

    /// Appends the column header.
    #[allow(dead_code)]
    pub fn header(mut self) -> Self {
        self.lines.push(HEADER.to_string());
        self
    }

    /// Appends a data line.
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Returns the file contents.
    pub fn build(self) -> String {
        let mut contents = self.lines.join("\n");
        contents.push('\n');
        contents
    }
}
