//! Pin parsing.
//!
//! Turns the flat line sequence produced by the reader into a map of
//! normalized package name to pinned version.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{PinlockError, Result};
use crate::manifest::name::normalize_name;
use crate::manifest::source::classify_source;
use crate::manifest::PackageVersions;

/// A distribution name: alphanumerics, with `.`, `_` and `-` allowed inside.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").expect("NAME_REGEX must compile")
});

/// Parses requirement lines into pinned versions.
///
/// # Supported Formats
///
/// - Pins: `name==1.0`
/// - Extras: `name[extra1,extra2]==1.0`
/// - Trailing annotations: `name==1.0 --hash=sha256:...`, `name==1.0 ; python_version < "3.12"`
///
/// Skipped without error:
///
/// - Blank lines and `# comments`
/// - Option lines starting with `-` (`-r base.txt`, `-e .`, `--find-links ...`)
/// - URLs, VCS URLs and `name @ url` direct references
///
/// # Example
///
/// ```
/// use pinlock::manifest::PinParser;
///
/// let lines = [
///     "# Web",
///     "Django==4.2.1",
///     "typing_extensions[all]==4.8.0 ; python_version < \"3.12\"",
///     "-e git+https://github.com/org/tool.git#egg=tool",
/// ];
///
/// let pins = PinParser::parse(lines).unwrap();
/// assert_eq!(pins.get("django"), Some(&"4.2.1".to_string()));
/// assert_eq!(pins.get("typing-extensions"), Some(&"4.8.0".to_string()));
/// assert_eq!(pins.len(), 2);
/// ```
pub struct PinParser;

impl PinParser {
    /// Parse lines into a map of normalized name to version.
    ///
    /// A later pin for the same normalized name overwrites an earlier one.
    pub fn parse<I, S>(lines: I) -> Result<PackageVersions>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pins = PackageVersions::new();

        for line in lines {
            if let Some((name, version)) = Self::parse_line(line.as_ref())? {
                pins.insert(name, version);
            }
        }

        Ok(pins)
    }

    /// Parse a single line.
    ///
    /// Returns `Ok(None)` for lines that carry no pin, and
    /// `MalformedPinLine` when the text before `==` is not a valid
    /// distribution name (e.g. `pkg>=1.0 ; python_version == "3.8"`).
    pub fn parse_line(line: &str) -> Result<Option<(String, String)>> {
        let line = line.trim();

        if Self::is_skipped(line) {
            return Ok(None);
        }

        let malformed = || PinlockError::MalformedPinLine {
            line: line.to_string(),
        };

        let (full_name, version_and_extras) = line.split_once("==").ok_or_else(malformed)?;

        // Strip extras
        let name = full_name.split('[').next().unwrap_or_default().trim();
        let version = version_and_extras
            .trim_start()
            .split(|c: char| c.is_whitespace() || c == ';')
            .next()
            .unwrap_or_default();

        if !NAME_REGEX.is_match(name) || version.is_empty() {
            return Err(malformed());
        }

        Ok(Some((normalize_name(name), version.to_string())))
    }

    /// Whether a stripped line carries no pin by construction.
    fn is_skipped(line: &str) -> bool {
        line.is_empty()
            || line.starts_with('#')
            || line.starts_with('-')
            || classify_source(line).is_some()
    }
}
