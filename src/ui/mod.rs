//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use pinlock::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("There are requirement mismatches with requirements.txt");
//! assert!(ui.has_error("requirement mismatches"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PinlockTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Whether styled output is enabled.
    fn use_color(&self) -> bool;

    /// Write a line of program output (stdout), regardless of mode.
    fn message(&mut self, msg: &str);

    /// Display a success message if the mode shows status.
    fn success(&mut self, msg: &str);

    /// Display a warning message if the mode shows warnings.
    fn warning(&mut self, msg: &str);

    /// Write a line to the error stream (stderr), regardless of mode.
    fn error(&mut self, msg: &str);
}
