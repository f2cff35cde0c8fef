//! Mismatch detection between pinned and installed versions.
//!
//! The check is one-directional: every pinned package must be installed at
//! exactly the pinned version. Installed packages that are not pinned are
//! never reported. Versions are compared as plain strings.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::installed::InstalledPackages;
use crate::manifest::{load_pins, PackageVersions};

/// A pinned package that is missing or installed at another version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Normalized package name.
    pub name: String,
    /// Version pinned in the manifest.
    pub expected: String,
    /// Installed version, or `None` when the package is not installed.
    pub actual: Option<String>,
}

impl Mismatch {
    /// A pinned package that is not installed.
    pub fn missing(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: expected.into(),
            actual: None,
        }
    }

    /// A pinned package installed at a different version.
    pub fn version(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expected: expected.into(),
            actual: Some(actual.into()),
        }
    }

    /// Whether the package is absent from the environment.
    pub fn is_missing(&self) -> bool {
        self.actual.is_none()
    }
}

/// Mismatches keyed by normalized package name.
pub type Mismatches = BTreeMap<String, Mismatch>;

/// Compare pinned versions against installed versions.
///
/// # Example
///
/// ```
/// use pinlock::check::{compare, Mismatch};
/// use pinlock::manifest::PackageVersions;
///
/// let expected = PackageVersions::from([("pkg".to_string(), "1.2".to_string())]);
/// let installed = PackageVersions::from([("pkg".to_string(), "1.1".to_string())]);
///
/// let mismatches = compare(&expected, &installed);
/// assert_eq!(mismatches["pkg"], Mismatch::version("pkg", "1.2", "1.1"));
/// ```
pub fn compare(expected: &PackageVersions, installed: &PackageVersions) -> Mismatches {
    let mut mismatches = Mismatches::new();

    for (name, expected_version) in expected {
        match installed.get(name) {
            None => {
                mismatches.insert(name.clone(), Mismatch::missing(name, expected_version));
            }
            Some(actual) if actual != expected_version => {
                mismatches.insert(
                    name.clone(),
                    Mismatch::version(name, expected_version, actual),
                );
            }
            Some(_) => {}
        }
    }

    mismatches
}

/// Read a manifest, query installed packages and return every mismatch.
///
/// Both the manifest and the installed packages are read fresh on every call.
pub fn find_mismatches(manifest: &Path, installed: &dyn InstalledPackages) -> Result<Mismatches> {
    let expected = load_pins(manifest)?;
    debug!(
        "{} pinned package(s) in {}",
        expected.len(),
        manifest.display()
    );

    let actual = installed.installed()?;
    debug!(
        "{} installed package(s) from {}",
        actual.len(),
        installed.describe()
    );

    Ok(compare(&expected, &actual))
}
