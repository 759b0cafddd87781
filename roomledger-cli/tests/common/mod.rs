//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with a temporary record directory
//! - Command builder helpers pinned to a fixed active date

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Date used by every command built with [`TestEnv::command`].
pub const DATE: &str = "07-01-2025";

/// Test environment with an isolated record directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory the CLI reads and writes record files in
    pub records_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let records_dir = temp_dir.path().join("records");

        Self {
            temp_dir,
            records_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("roomledger").expect("Failed to find roomledger binary")
    }

    /// Get a command builder with `--records-dir` and `--date` set.
    pub fn command(&self) -> Command {
        self.command_on(DATE)
    }

    /// Get a command builder for another date.
    pub fn command_on(&self, date: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--records-dir")
            .arg(&self.records_dir)
            .arg("--date")
            .arg(date);
        cmd
    }

    /// Reserve a room and return the room number printed on stdout.
    pub fn reserve(&self, room_type: &str, guest: &str) -> u32 {
        let output = self
            .command()
            .args(["reserve", room_type, "--guest", guest])
            .output()
            .expect("Failed to run reserve");
        assert!(
            output.status.success(),
            "reserve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("stdout is not UTF-8")
            .trim()
            .parse()
            .expect("reserve did not print a room number")
    }

    /// Path of a date's record file.
    pub fn record_path(&self, date: &str) -> PathBuf {
        self.records_dir.join(format!("{date}.txt"))
    }

    /// Read a date's record file.
    pub fn read_record(&self, date: &str) -> String {
        std::fs::read_to_string(self.record_path(date)).expect("Failed to read record file")
    }

    /// Write a raw record file for a date.
    pub fn write_record(&self, date: &str, contents: &str) {
        std::fs::create_dir_all(&self.records_dir).expect("Failed to create records dir");
        std::fs::write(self.record_path(date), contents).expect("Failed to write record file");
    }

    /// Write a file in the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
