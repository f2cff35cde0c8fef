//! pinlock - Check installed Python packages against pinned requirements.
//!
//! pinlock reads pip-style requirements files, follows `-r` includes,
//! extracts exact `name==version` pins and compares them with the packages
//! installed in the current environment.
//!
//! # Modules
//!
//! - [`manifest`] - Reading requirements files and parsing pins
//! - [`installed`] - Querying installed packages
//! - [`check`] - Comparing pins with installed versions
//! - [`report`] - Turning mismatches into messages and check outcomes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `.pinlock.yml` project configuration
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pinlock::installed::FixedPackages;
//! use pinlock::report::check_requirements;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let manifest = temp.path().join("requirements.txt");
//! fs::write(&manifest, "Django==4.2.1\nrequests==2.31.0\n").unwrap();
//!
//! let installed = FixedPackages::from_pairs([("django", "4.2.1")]);
//! let outcome = check_requirements(&manifest, None, &installed).unwrap();
//!
//! assert!(!outcome.is_clean());
//! assert_eq!(outcome.mismatches()[0].name, "requests");
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod installed;
pub mod manifest;
pub mod report;
pub mod ui;

pub use error::{PinlockError, Result};
