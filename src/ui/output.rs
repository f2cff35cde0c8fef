//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also report what was checked when everything matches.
    Verbose,
    /// Report problems only.
    #[default]
    Normal,
    /// Report problems only, without warnings.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows success and progress messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows warnings.
    pub fn shows_warnings(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
