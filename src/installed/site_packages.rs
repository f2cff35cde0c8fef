//! Installed packages from site-packages metadata.
//!
//! Every installed distribution leaves a metadata directory next to the
//! code it installs:
//!
//! - `<name>-<version>.dist-info/METADATA` (wheels, modern installs)
//! - `<name>-<version>.egg-info/PKG-INFO` (setuptools installs)
//! - `<name>-<version>.egg-info` as a single `PKG-INFO`-format file
//!
//! `SitePackages` reads the `Name:` and `Version:` headers from those files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::InstalledPackages;
use crate::error::{PinlockError, Result};
use crate::manifest::{normalize_name, PackageVersions};

/// Environment variable set by an activated virtualenv.
pub const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Reads installed distributions from one or more site-packages directories.
///
/// Directories are searched in order; when a package appears in more than
/// one, the first directory wins, matching interpreter import order.
#[derive(Debug, Clone)]
pub struct SitePackages {
    dirs: Vec<PathBuf>,
}

impl SitePackages {
    /// Create a query over explicit site-packages directories.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Discover the site-packages directories of a virtualenv root.
    ///
    /// Looks for `lib/python*/site-packages` (POSIX layout) and
    /// `Lib/site-packages` (Windows layout).
    pub fn from_virtualenv(venv: &Path) -> Self {
        let mut dirs = Vec::new();

        if let Ok(entries) = fs::read_dir(venv.join("lib")) {
            let mut pythons: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .filter(|e| e.file_name().to_string_lossy().starts_with("python"))
                .map(|e| e.path().join("site-packages"))
                .filter(|p| p.is_dir())
                .collect();
            pythons.sort();
            dirs.extend(pythons);
        }

        let windows = venv.join("Lib").join("site-packages");
        if windows.is_dir() && !dirs.contains(&windows) {
            dirs.push(windows);
        }

        debug!(
            "Discovered {} site-packages dir(s) under {}",
            dirs.len(),
            venv.display()
        );
        Self { dirs }
    }

    /// Discover site-packages from the active virtualenv.
    ///
    /// # Errors
    ///
    /// Returns `InstalledQueryFailed` when `VIRTUAL_ENV` is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key))
    }

    /// Discover site-packages with a custom env var lookup function.
    pub fn from_env_with<F>(env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let venv = env_fn(VIRTUAL_ENV_VAR).map_err(|_| PinlockError::InstalledQueryFailed {
            message: format!(
                "{} is not set; activate a virtualenv or pass --site-packages",
                VIRTUAL_ENV_VAR
            ),
        })?;
        Ok(Self::from_virtualenv(Path::new(&venv)))
    }

    /// The directories this query reads, in search order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn scan_dir(dir: &Path, packages: &mut PackageVersions) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| PinlockError::InstalledQueryFailed {
            message: format!("cannot read {}: {}", dir.display(), e),
        })?;

        let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            let Some(metadata_path) = metadata_file(&path) else {
                continue;
            };

            let content = match fs::read_to_string(&metadata_path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable metadata {}: {}", metadata_path.display(), e);
                    continue;
                }
            };

            match parse_metadata(&content) {
                Some((name, version)) => {
                    packages.entry(normalize_name(&name)).or_insert(version);
                }
                None => warn!(
                    "Skipping metadata without Name/Version: {}",
                    metadata_path.display()
                ),
            }
        }

        Ok(())
    }
}

impl InstalledPackages for SitePackages {
    fn installed(&self) -> Result<PackageVersions> {
        if self.dirs.is_empty() {
            return Err(PinlockError::InstalledQueryFailed {
                message: "no site-packages directories found".to_string(),
            });
        }

        let mut packages = PackageVersions::new();
        for dir in &self.dirs {
            debug!("Scanning {}", dir.display());
            Self::scan_dir(dir, &mut packages)?;
        }
        Ok(packages)
    }

    fn describe(&self) -> String {
        let dirs: Vec<String> = self.dirs.iter().map(|d| d.display().to_string()).collect();
        format!("site-packages ({})", dirs.join(", "))
    }
}

/// Locate the metadata file for a site-packages entry, if it is a
/// distribution metadata entry at all.
fn metadata_file(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_string_lossy();

    if name.ends_with(".dist-info") {
        Some(path.join("METADATA"))
    } else if name.ends_with(".egg-info") {
        if path.is_dir() {
            Some(path.join("PKG-INFO"))
        } else {
            Some(path.to_path_buf())
        }
    } else {
        None
    }
}

/// Extract `(Name, Version)` from a core metadata document.
///
/// Only the header block (up to the first blank line) is read; header
/// names are matched case-insensitively.
///
/// # Example
///
/// ```
/// use pinlock::installed::parse_metadata;
///
/// let metadata = "Metadata-Version: 2.1\nName: Django\nVersion: 4.2.1\n\nLong description";
/// assert_eq!(
///     parse_metadata(metadata),
///     Some(("Django".to_string(), "4.2.1".to_string()))
/// );
/// ```
pub fn parse_metadata(content: &str) -> Option<(String, String)> {
    let mut name = None;
    let mut version = None;

    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        if key.eq_ignore_ascii_case("name") && name.is_none() {
            name = Some(value.to_string());
        } else if key.eq_ignore_ascii_case("version") && version.is_none() {
            version = Some(value.to_string());
        }
    }

    match (name, version) {
        (Some(n), Some(v)) if !n.is_empty() && !v.is_empty() => Some((n, v)),
        _ => None,
    }
}
