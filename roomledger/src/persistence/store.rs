//! Date-keyed record files on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extension of record files.
pub const RECORD_EXTENSION: &str = "txt";

/// A directory of record files named `<date>.txt`.
///
/// # Examples
///
/// ```
/// use roomledger::RecordStore;
/// use std::path::Path;
///
/// let store = RecordStore::new("/var/lib/hotel");
/// assert_eq!(
///     store.path_for("07-01-2025").unwrap(),
///     Path::new("/var/lib/hotel/07-01-2025.txt")
/// );
/// assert!(store.path_for("../etc/passwd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the store's directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the record file path for `date`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if the date label is empty or contains a
    /// path separator.
    pub fn path_for(&self, date: &str) -> Result<PathBuf> {
        if date.is_empty() || date == "." || date == ".." || date.contains(['/', '\\']) {
            return Err(Error::InvalidPath {
                path: self.dir.join(date),
                reason: format!("'{date}' cannot name a record file"),
            });
        }
        Ok(self.dir.join(format!("{date}.{RECORD_EXTENSION}")))
    }

    /// Reads the raw bytes of the record file for `date`, or `None` if
    /// there is none. Lines are decoded one at a time by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read(&self, date: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(date)?;
        match fs::read(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Replaces the record file for `date` with `contents`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self, date: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path_for(date)?;
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Deletes the record file for `date`. Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn remove(&self, date: &str) -> Result<bool> {
        let path = self.path_for(date)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
