//! Pins command implementation.
//!
//! The `pinlock pins` command prints the resolved pin map of a manifest,
//! after includes are followed and names normalized.

use std::path::{Path, PathBuf};

use crate::cli::args::PinsArgs;
use crate::error::Result;
use crate::manifest::{load_pins, PackageVersions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The pins command implementation.
pub struct PinsCommand {
    project_root: PathBuf,
    args: PinsArgs,
}

impl PinsCommand {
    /// Create a new pins command.
    pub fn new(project_root: &Path, args: PinsArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn render(&self, pins: &PackageVersions) -> Result<String> {
        if self.args.json {
            return Ok(serde_json::to_string_pretty(pins).map_err(anyhow::Error::from)?);
        }

        Ok(pins
            .iter()
            .map(|(name, version)| format!("{}=={}", name, version))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl Command for PinsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let pins = load_pins(&self.project_root.join(&self.args.manifest))?;

        if pins.is_empty() && !self.args.json {
            ui.warning(&format!("No pins in {}", self.args.manifest.display()));
            return Ok(CommandResult::success());
        }

        ui.message(&self.render(&pins)?);
        Ok(CommandResult::success())
    }
}
