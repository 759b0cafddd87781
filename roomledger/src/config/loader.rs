//! Configuration file loading.
//!
//! This module reads a facility configuration from a YAML file and validates
//! it, falling back to the built-in defaults when no file is given.

use std::fs;
use std::path::Path;

use crate::config::schema::HotelConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Loads configuration from a file or the built-in defaults.
///
/// # Examples
///
/// ```
/// use roomledger::config::ConfigLoader;
///
/// let config = ConfigLoader::load(None).unwrap();
/// assert_eq!(config.name, "Hilton");
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration at `path`, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails validation.
    pub fn load(path: Option<&Path>) -> Result<HotelConfig> {
        match path {
            Some(path) => Self::load_file(path),
            None => Ok(HotelConfig::default()),
        }
    }

    /// Load, parse and validate a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// the configuration fails validation.
    pub fn load_file(path: &Path) -> Result<HotelConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let config: HotelConfig = serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })?;

        ConfigValidator::validate(&config)?;
        log::debug!(
            "Loaded configuration for {} from {}",
            config.name,
            path.display()
        );
        Ok(config)
    }
}
