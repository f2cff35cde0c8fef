//! Installed packages as reported by pip.

use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};

use super::InstalledPackages;
use crate::error::{PinlockError, Result};
use crate::manifest::{normalize_name, PackageVersions};

/// Interpreter used when none is configured.
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";

/// Interpreter used when none is configured.
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// Lists installed packages by running `<python> -m pip list --format=json`.
///
/// Slower than reading site-packages directly, but asks the interpreter
/// itself, so it sees exactly what that interpreter would import. Editable
/// and URL installs are reported with their versions too.
#[derive(Debug, Clone)]
pub struct PipList {
    python: String,
}

#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
}

impl PipList {
    /// Create a query that runs the given interpreter.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The interpreter this query runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl Default for PipList {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl InstalledPackages for PipList {
    fn installed(&self) -> Result<PackageVersions> {
        debug!("Running {} -m pip list --format=json", self.python);

        let output = Command::new(&self.python)
            .args([
                "-m",
                "pip",
                "list",
                "--format=json",
                "--disable-pip-version-check",
            ])
            .output()
            .map_err(|e| PinlockError::InstalledQueryFailed {
                message: format!("failed to run {}: {}", self.python, e),
            })?;

        if !output.status.success() {
            return Err(PinlockError::InstalledQueryFailed {
                message: format!(
                    "{} -m pip list exited with {}: {}",
                    self.python,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        parse_pip_list_output(&String::from_utf8_lossy(&output.stdout))
    }

    fn describe(&self) -> String {
        format!("{} -m pip list", self.python)
    }
}

/// Parse `pip list --format=json` output into installed versions.
///
/// Entries with an empty name or version are logged and skipped.
///
/// # Errors
///
/// Returns `InstalledQueryFailed` when the output is not the expected JSON
/// array.
///
/// # Example
///
/// ```
/// use pinlock::installed::parse_pip_list_output;
///
/// let output = r#"[
///     {"name": "Django", "version": "4.2.1"},
///     {"name": "tool", "version": "0.3.0", "editable_project_location": "/src/tool"}
/// ]"#;
/// let installed = parse_pip_list_output(output).unwrap();
/// assert_eq!(installed.get("django"), Some(&"4.2.1".to_string()));
/// assert_eq!(installed.get("tool"), Some(&"0.3.0".to_string()));
/// ```
pub fn parse_pip_list_output(output: &str) -> Result<PackageVersions> {
    let entries: Vec<PipListEntry> =
        serde_json::from_str(output.trim()).map_err(|e| PinlockError::InstalledQueryFailed {
            message: format!("unexpected pip list output: {}", e),
        })?;

    let mut installed = PackageVersions::new();
    for entry in entries {
        let name = entry.name.trim();
        let version = entry.version.trim();
        if name.is_empty() || version.is_empty() {
            warn!("Ignoring pip list entry without name or version: {:?}", entry);
            continue;
        }
        installed.insert(normalize_name(name), version.to_string());
    }

    Ok(installed)
}
