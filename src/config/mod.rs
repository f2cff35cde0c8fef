//! Project configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use pinlock::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".pinlock.yml"), "manifests: [requirements.txt]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.manifests.len(), 1);
//! ```
//!
//! # Configuration File Locations
//!
//! pinlock merges configuration in this order:
//! 1. Project config (`.pinlock.yml`)
//! 2. Local overrides (`.pinlock.local.yml`)
//!
//! Command-line flags override both.

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, parse_config, ConfigPaths, CONFIG_FILE_NAME,
    LOCAL_CONFIG_FILE_NAME,
};
pub use schema::{InstalledSource, PinlockConfig};
