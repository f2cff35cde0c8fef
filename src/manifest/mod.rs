//! Requirement manifest reading and parsing.
//!
//! # Modules
//!
//! - [`reader`] - Loads a manifest and the manifests it includes
//! - [`parser`] - Turns raw lines into normalized pins
//! - [`source`] - Recognizes URL, VCS and direct-reference lines
//! - [`name`] - Package name normalization
//!
//! # Example
//!
//! ```
//! use pinlock::manifest::load_pins;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("requirements.txt");
//! fs::write(&path, "# pinned\nDjango==4.2.1\n-e .\n").unwrap();
//!
//! let pins = load_pins(&path).unwrap();
//! assert_eq!(pins.get("django"), Some(&"4.2.1".to_string()));
//! ```

pub mod name;
pub mod parser;
pub mod reader;
pub mod source;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

pub use name::normalize_name;
pub use parser::PinParser;
pub use reader::{include_target, read_manifest};
pub use source::{classify_source, is_direct_reference, is_url, is_vcs_url, SourceKind};

/// Normalized package name to version string.
///
/// Used both for pinned versions and for installed versions.
pub type PackageVersions = BTreeMap<String, String>;

/// Read a manifest (following includes) and parse its pins.
pub fn load_pins(path: &Path) -> Result<PackageVersions> {
    let lines = read_manifest(path)?;
    PinParser::parse(&lines)
}
