//! Detection of requirement lines that point at a URL instead of a pin.
//!
//! Lines like `https://example.com/pkg.tar.gz`, `git+https://github.com/org/repo`
//! or `pkg @ https://example.com/pkg.whl` name a dynamic source, so there is
//! no pinned version to compare. Each shape has its own check so the skip
//! rules can be exercised on their own.

use regex::Regex;
use std::sync::LazyLock;

/// Version control tags pip accepts in front of a URL scheme.
pub const VCS_TAGS: &[&str] = &["git", "hg", "svn", "bzr"];

/// A scheme followed by `://` at the start of the text.
static SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("SCHEME_REGEX must compile")
});

/// A VCS tag joined to a scheme with `+`, e.g. `git+ssh://`.
static VCS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)([a-z]+)\+[A-Za-z][A-Za-z0-9.\-]*://").expect("VCS_REGEX must compile")
});

/// `<name>[extras] @ <target>` with optional whitespace around the `@`.
static DIRECT_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\[]+\s*(?:\[[^\]]*\])?\s*@\s*(\S.*)$")
        .expect("DIRECT_REFERENCE_REGEX must compile")
});

/// The kind of non-pinned source a requirement line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A bare URL such as `https://host/pkg.tar.gz`.
    Url,
    /// A VCS URL such as `git+https://host/org/repo`.
    Vcs,
    /// A named direct reference such as `pkg @ https://host/pkg.whl`.
    DirectReference,
}

/// Whether the text starts with a VCS-tagged URL (`git+https://...`).
pub fn is_vcs_url(text: &str) -> bool {
    VCS_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .is_some_and(|tag| VCS_TAGS.contains(&tag.as_str().to_lowercase().as_str()))
}

/// Whether the text starts with a URL scheme (`https://`, `file://`, ...).
pub fn is_url(text: &str) -> bool {
    SCHEME_REGEX.is_match(text)
}

/// Whether the text is a `name @ url` direct reference.
pub fn is_direct_reference(text: &str) -> bool {
    DIRECT_REFERENCE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .is_some_and(|target| is_vcs_url(target.as_str()) || is_url(target.as_str()))
}

/// Classify a stripped requirement line, returning `None` for anything that
/// is not a URL-based source.
///
/// # Example
///
/// ```
/// use pinlock::manifest::{classify_source, SourceKind};
///
/// assert_eq!(classify_source("https://example.com/pkg.zip"), Some(SourceKind::Url));
/// assert_eq!(classify_source("git+https://github.com/org/repo"), Some(SourceKind::Vcs));
/// assert_eq!(
///     classify_source("pkg @ https://example.com/pkg.whl"),
///     Some(SourceKind::DirectReference)
/// );
/// assert_eq!(classify_source("pkg==1.0"), None);
/// ```
pub fn classify_source(line: &str) -> Option<SourceKind> {
    if is_vcs_url(line) {
        Some(SourceKind::Vcs)
    } else if is_url(line) {
        Some(SourceKind::Url)
    } else if is_direct_reference(line) {
        Some(SourceKind::DirectReference)
    } else {
        None
    }
}
