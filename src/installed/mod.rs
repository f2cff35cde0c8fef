//! Installed-package queries.
//!
//! The mismatch check compares pins against whatever an
//! [`InstalledPackages`] implementation reports. Every implementation
//! returns names normalized with [`normalize_name`], and is queried fresh on
//! every check.
//!
//! # Modules
//!
//! - [`site_packages`] - Reads distribution metadata from site-packages directories
//! - [`pip`] - Runs `pip list` in a Python interpreter

pub mod pip;
pub mod site_packages;

pub use pip::{parse_pip_list_output, PipList, DEFAULT_PYTHON};
pub use site_packages::{parse_metadata, SitePackages};

use crate::error::Result;
use crate::manifest::{normalize_name, PackageVersions};

/// Source of the packages installed in the environment being checked.
pub trait InstalledPackages {
    /// Return normalized name to version for every installed package.
    fn installed(&self) -> Result<PackageVersions>;

    /// Short human-readable description of where packages come from.
    fn describe(&self) -> String;
}

/// A fixed set of installed packages.
///
/// Used by tests and by callers that already know what is installed.
///
/// # Example
///
/// ```
/// use pinlock::installed::{FixedPackages, InstalledPackages};
///
/// let installed = FixedPackages::from_pairs([("Django", "4.2.1"), ("zope.interface", "6.0")]);
/// let versions = installed.installed().unwrap();
/// assert_eq!(versions.get("django"), Some(&"4.2.1".to_string()));
/// assert_eq!(versions.get("zope-interface"), Some(&"6.0".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedPackages {
    packages: PackageVersions,
}

impl FixedPackages {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from `(name, version)` pairs, normalizing names.
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let packages = pairs
            .into_iter()
            .map(|(name, version)| (normalize_name(name.as_ref()), version.into()))
            .collect();
        Self { packages }
    }
}

impl InstalledPackages for FixedPackages {
    fn installed(&self) -> Result<PackageVersions> {
        Ok(self.packages.clone())
    }

    fn describe(&self) -> String {
        format!("{} fixed package(s)", self.packages.len())
    }
}
