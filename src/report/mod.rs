//! Mismatch reporting.
//!
//! [`check_requirements`] runs the full check for one manifest and returns a
//! [`CheckOutcome`]. Nothing here terminates the process: the binary maps
//! outcomes to an exit code, so library callers and tests can decide for
//! themselves what a mismatch means.
//!
//! # Modules
//!
//! - [`human`] - Colorized text report for terminals and CI logs
//! - [`json`] - Machine-readable report

pub mod human;
pub mod json;

use std::io::Write;
use std::path::Path;

use crate::check::{find_mismatches, Mismatch};
use crate::error::Result;
use crate::installed::InstalledPackages;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text on stderr.
    #[default]
    Human,
    /// JSON on stdout.
    Json,
}

/// Trait for formatting check results.
pub trait ReportFormatter {
    /// Format outcomes to the given writer.
    fn format<W: Write>(&self, outcomes: &[CheckOutcome], writer: &mut W) -> std::io::Result<()>;
}

/// Every mismatch found in one manifest, plus the text shown around them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MismatchReport {
    /// The manifest path as given by the caller.
    pub manifest: String,
    /// Mismatches ordered by package name.
    pub mismatches: Vec<Mismatch>,
    /// Optional message shown after the list.
    pub post_text: Option<String>,
}

impl MismatchReport {
    /// Line shown before the list of mismatches.
    pub fn header(&self) -> String {
        format!("There are requirement mismatches with {}", self.manifest)
    }

    /// One message per mismatch, in package name order.
    pub fn messages(&self) -> Vec<String> {
        self.mismatches
            .iter()
            .map(|m| mismatch_message(m, &self.manifest))
            .collect()
    }
}

/// Result of checking one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every pin matches the installed version.
    Clean {
        /// The manifest path as given by the caller.
        manifest: String,
    },
    /// At least one pin is missing or installed at another version.
    Mismatched(MismatchReport),
}

impl CheckOutcome {
    /// Whether every pin matched.
    pub fn is_clean(&self) -> bool {
        matches!(self, CheckOutcome::Clean { .. })
    }

    /// The manifest this outcome is for.
    pub fn manifest(&self) -> &str {
        match self {
            CheckOutcome::Clean { manifest } => manifest,
            CheckOutcome::Mismatched(report) => &report.manifest,
        }
    }

    /// The mismatches found, empty when clean.
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            CheckOutcome::Clean { .. } => &[],
            CheckOutcome::Mismatched(report) => &report.mismatches,
        }
    }
}

/// Format the message for a single mismatch.
///
/// # Example
///
/// ```
/// use pinlock::check::Mismatch;
/// use pinlock::report::mismatch_message;
///
/// assert_eq!(
///     mismatch_message(&Mismatch::missing("pkg", "1.0"), "requirements.txt"),
///     "Package pkg is in requirements.txt but not in virtualenv"
/// );
/// assert_eq!(
///     mismatch_message(&Mismatch::version("pkg", "1.1", "1.0"), "requirements.txt"),
///     "Package pkg has version 1.1 but you have version 1.0 installed."
/// );
/// ```
pub fn mismatch_message(mismatch: &Mismatch, manifest: &str) -> String {
    match &mismatch.actual {
        None => format!(
            "Package {} is in {} but not in virtualenv",
            mismatch.name, manifest
        ),
        Some(actual) => format!(
            "Package {} has version {} but you have version {} installed.",
            mismatch.name, mismatch.expected, actual
        ),
    }
}

/// Check one manifest against the installed packages.
///
/// Messages name the manifest as `manifest.display()`.
///
/// # Errors
///
/// Propagates manifest read/parse errors and installed-query errors.
/// Mismatches are not errors; they are returned as
/// [`CheckOutcome::Mismatched`].
pub fn check_requirements(
    manifest: &Path,
    post_text: Option<&str>,
    installed: &dyn InstalledPackages,
) -> Result<CheckOutcome> {
    check_manifest(manifest, &manifest.display().to_string(), post_text, installed)
}

/// Check one manifest, naming it `label` in messages.
///
/// Used when the path read differs from the path the user typed, e.g.
/// after resolving it against the project root.
pub fn check_manifest(
    manifest: &Path,
    label: &str,
    post_text: Option<&str>,
    installed: &dyn InstalledPackages,
) -> Result<CheckOutcome> {
    let mismatches = find_mismatches(manifest, installed)?;
    let manifest = label.to_string();

    if mismatches.is_empty() {
        return Ok(CheckOutcome::Clean { manifest });
    }

    Ok(CheckOutcome::Mismatched(MismatchReport {
        manifest,
        mismatches: mismatches.into_values().collect(),
        post_text: post_text
            .filter(|text| !text.is_empty())
            .map(str::to_string),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installed::FixedPackages;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_message_names_manifest() {
        let msg = mismatch_message(&Mismatch::missing("package2", "1.0"), "requirements.txt");
        assert_eq!(
            msg,
            "Package package2 is in requirements.txt but not in virtualenv"
        );
    }

    #[test]
    fn version_message_names_both_versions() {
        let msg = mismatch_message(&Mismatch::version("package1", "1.1", "1.0"), "r.txt");
        assert_eq!(
            msg,
            "Package package1 has version 1.1 but you have version 1.0 installed."
        );
    }

    #[test]
    fn report_header_names_manifest() {
        let report = MismatchReport {
            manifest: "requirements.txt".into(),
            mismatches: vec![],
            post_text: None,
        };
        assert_eq!(
            report.header(),
            "There are requirement mismatches with requirements.txt"
        );
    }

    #[test]
    fn check_clean_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "package==1.1").unwrap();

        let outcome =
            check_requirements(&path, None, &FixedPackages::from_pairs([("package", "1.1")]))
                .unwrap();

        assert!(outcome.is_clean());
        assert!(outcome.mismatches().is_empty());
        assert_eq!(outcome.manifest(), path.display().to_string());
    }

    #[test]
    fn check_reports_every_mismatch() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "package1==1.1\npackage2==1.0\nok==2.0").unwrap();
        let installed = FixedPackages::from_pairs([("package1", "1.0"), ("ok", "2.0")]);

        let outcome = check_requirements(&path, Some("Run make deps"), &installed).unwrap();

        let CheckOutcome::Mismatched(report) = outcome else {
            panic!("Expected mismatches");
        };
        assert_eq!(report.mismatches.len(), 2);
        assert_eq!(report.post_text.as_deref(), Some("Run make deps"));

        let messages = report.messages();
        assert!(messages[0].contains("package1 has version 1.1 but you have version 1.0 installed"));
        assert!(messages[1].contains("package2 is in"));
        assert!(messages[1].contains("but not in virtualenv"));
    }

    #[test]
    fn check_manifest_uses_label() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "pkg==1.0").unwrap();

        let outcome =
            check_manifest(&path, "requirements.txt", None, &FixedPackages::new()).unwrap();
        let CheckOutcome::Mismatched(report) = outcome else {
            panic!("Expected mismatches");
        };
        assert_eq!(
            report.messages(),
            vec!["Package pkg is in requirements.txt but not in virtualenv"]
        );
    }

    #[test]
    fn empty_post_text_is_dropped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "pkg==1.0").unwrap();

        let outcome = check_requirements(&path, Some(""), &FixedPackages::new()).unwrap();
        let CheckOutcome::Mismatched(report) = outcome else {
            panic!("Expected mismatches");
        };
        assert!(report.post_text.is_none());
    }

    #[test]
    fn check_propagates_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let result = check_requirements(
            &temp.path().join("missing.txt"),
            None,
            &FixedPackages::new(),
        );
        assert!(matches!(
            result,
            Err(crate::error::PinlockError::ManifestNotFound { .. })
        ));
    }
}
