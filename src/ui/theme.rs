//! Visual theme and styling.

use console::Style;

/// pinlock's visual theme.
///
/// Styles in [`PinlockTheme::new`] are forced on: callers pick between
/// `new()` and `plain()` once, based on [`should_use_colors`].
#[derive(Debug, Clone)]
pub struct PinlockTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error headers (red bold).
    pub error: Style,
    /// Style for mismatch lines and trailing text (red).
    pub mismatch: Style,
}

impl Default for PinlockTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PinlockTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green().force_styling(true),
            warning: Style::new().color256(208).force_styling(true),
            error: Style::new().red().bold().force_styling(true),
            mismatch: Style::new().red().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            mismatch: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }
}

/// Check if colors should be used on stderr, where reports are written.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = PinlockTheme::plain();
        assert_eq!(theme.format_success("Done"), "✓ Done");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = PinlockTheme::plain();
        assert_eq!(theme.format_warning("Careful"), "⚠ Careful");
    }

    #[test]
    fn plain_theme_has_no_escape_codes() {
        let theme = PinlockTheme::plain();
        let styled = format!("{}", theme.error.apply_to("boom"));
        assert_eq!(styled, "boom");
    }

    #[test]
    fn colored_theme_has_escape_codes() {
        let theme = PinlockTheme::new();
        let styled = format!("{}", theme.error.apply_to("boom"));
        assert!(styled.contains("\x1b["));
        assert!(styled.contains("boom"));
    }
}
