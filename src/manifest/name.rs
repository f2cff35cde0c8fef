//! Package name normalization.

/// Canonicalize a package name so equivalent spellings compare equal.
///
/// Lowercases the name and replaces every `_` and `.` with `-`. The same
/// normalization is applied to pinned names and installed names.
///
/// # Example
///
/// ```
/// use pinlock::manifest::normalize_name;
///
/// assert_eq!(normalize_name("Foo_Bar.Baz"), "foo-bar-baz");
/// assert_eq!(normalize_name("Foo_Bar.Baz"), normalize_name("foo-bar-baz"));
/// ```
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(['_', '.'], "-")
}
