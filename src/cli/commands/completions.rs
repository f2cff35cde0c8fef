//! Shell completions generation.
//!
//! The `pinlock completions` command writes a completion script to stdout.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for `shell`.
pub fn render_completions(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pinlock", &mut buf);
    String::from_utf8(buf).map_err(|e| anyhow::anyhow!(e).into())
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let script = render_completions(self.args.shell)?;
        std::io::stdout().write_all(script.as_bytes())?;
        Ok(CommandResult::success())
    }
}
