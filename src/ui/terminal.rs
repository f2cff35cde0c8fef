//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PinlockTheme, UserInterface};

/// Terminal UI implementation.
///
/// Program output goes to stdout; reports, warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PinlockTheme,
    mode: OutputMode,
    use_color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI, detecting color support.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_color(mode, should_use_colors())
    }

    /// Create a new terminal UI with explicit color support.
    pub fn with_color(mode: OutputMode, use_color: bool) -> Self {
        let theme = if use_color {
            PinlockTheme::new()
        } else {
            PinlockTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            use_color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn use_color(&self) -> bool {
        self.use_color
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", msg).ok();
    }
}
