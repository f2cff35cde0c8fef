//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] carrying the exit code. Errors are
    /// returned, never printed here; the binary reports them.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    ///
    /// `config_path` replaces the `.pinlock.yml` lookup when set.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root,
            config_path,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Running without a subcommand checks with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(args.clone()).execute(ui),
            Some(Commands::Pins(args)) => {
                let cmd = super::pins::PinsCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => self.check(CheckArgs::default()).execute(ui),
        }
    }

    fn check(&self, args: CheckArgs) -> super::check::CheckCommand {
        super::check::CheckCommand::new(&self.project_root, self.config_path.clone(), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"), None);
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn no_subcommand_runs_check() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site-packages");
        fs::create_dir_all(&site).unwrap();
        fs::write(temp.path().join("requirements.txt"), "pkg==1.0\n").unwrap();
        fs::write(
            temp.path().join(".pinlock.yml"),
            "site_packages: [site-packages]\n",
        )
        .unwrap();

        let cli = Cli::parse_from(["pinlock"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Package pkg is in requirements.txt but not in virtualenv"));
    }
}
