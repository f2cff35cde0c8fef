//! Manifest reading and include resolution.
//!
//! A manifest may include other manifests with `-r <path>`, `-r<path>` (or
//! `--requirement <path>`). Included paths are resolved against the
//! directory of the including file, and the included lines are appended
//! after the including file's own lines.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PinlockError, Result};

/// Long form of the include marker.
const REQUIREMENT_FLAG: &str = "--requirement";

/// Short form of the include marker.
const REQUIREMENT_SHORT_FLAG: &str = "-r";

/// Read a manifest and every manifest it includes, in file-then-included order.
///
/// Lines are returned raw: blank lines and comments are kept, trailing
/// newlines are not.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the manifest or any included manifest
/// cannot be read, and `IncludeCycle` if a manifest includes itself
/// through the include chain.
///
/// # Example
///
/// ```
/// use pinlock::manifest::read_manifest;
/// use tempfile::TempDir;
/// use std::fs;
///
/// let temp = TempDir::new().unwrap();
/// fs::write(temp.path().join("base.txt"), "requests==2.31.0").unwrap();
/// fs::write(temp.path().join("requirements.txt"), "-r base.txt\nflask==3.0.0").unwrap();
///
/// let lines = read_manifest(&temp.path().join("requirements.txt")).unwrap();
/// assert_eq!(lines, vec!["-r base.txt", "flask==3.0.0", "requests==2.31.0"]);
/// ```
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    read_with_chain(path, &mut Vec::new())
}

fn read_with_chain(path: &Path, chain: &mut Vec<PathBuf>) -> Result<Vec<String>> {
    let not_found = || PinlockError::ManifestNotFound {
        path: path.to_path_buf(),
    };

    let canonical = fs::canonicalize(path).map_err(|_| not_found())?;
    if chain.contains(&canonical) {
        return Err(PinlockError::IncludeCycle { path: canonical });
    }

    debug!("Reading requirements file {}", canonical.display());
    let content = fs::read_to_string(&canonical).map_err(|_| not_found())?;
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    let base_dir = canonical
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let includes: Vec<PathBuf> = lines
        .iter()
        .filter_map(|line| include_target(line))
        .map(|target| base_dir.join(target))
        .collect();

    chain.push(canonical);
    for include in includes {
        debug!("Following include {}", include.display());
        let included = read_with_chain(&include, chain)?;
        lines.extend(included);
    }
    chain.pop();

    Ok(lines)
}

/// Return the path named by an include directive, or `None` if the line is
/// not one.
///
/// Recognizes `-r <path>`, `-r<path>`, `--requirement <path>` and
/// `--requirement=<path>`.
pub fn include_target(line: &str) -> Option<&str> {
    let line = line.trim();

    let rest = if let Some(rest) = line.strip_prefix(REQUIREMENT_FLAG) {
        match rest.strip_prefix('=') {
            Some(value) => value,
            None if rest.starts_with(char::is_whitespace) => rest,
            None => return None,
        }
    } else {
        line.strip_prefix(REQUIREMENT_SHORT_FLAG)?
    };

    rest.split_whitespace().next()
}
