//! Configuration system for roomledger.
//!
//! The facility's room categories are static configuration: they are seeded
//! once at startup, either from the built-in defaults or from a YAML file,
//! and validated before a catalog is built from them.
//!
//! # Examples
//!
//! Built-in defaults:
//!
//! ```
//! use roomledger::config::HotelConfig;
//!
//! let config = HotelConfig::default();
//! assert_eq!(config.name, "Hilton");
//! assert_eq!(config.room_types.len(), 4);
//! ```
//!
//! Loading from a file:
//!
//! ```no_run
//! use roomledger::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_file(Path::new("hotel.yaml")).unwrap();
//! println!("Loaded {} room types", config.room_types.len());
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::ConfigLoader;
pub use schema::{HotelConfig, RoomNumbersConfig, RoomTypeConfig};
pub use validator::ConfigValidator;
