//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::InstalledSource;
use crate::report::OutputFormat;

/// pinlock - Check installed Python packages against pinned requirements.
#[derive(Debug, Parser)]
#[command(name = "pinlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .pinlock.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Report what was checked even when everything matches
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check installed packages against requirements files (default)
    Check(CheckArgs),

    /// Show the resolved pins of a requirements file
    Pins(PinsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Requirements files to check (default: from config, else requirements.txt)
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,

    /// Message printed after the list of mismatches
    #[arg(long, value_name = "TEXT")]
    pub post_text: Option<String>,

    /// Where to read installed packages from
    #[arg(long, value_enum)]
    pub source: Option<InstalledSource>,

    /// Site-packages directory to scan (repeatable; default: from $VIRTUAL_ENV)
    #[arg(long = "site-packages", value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    /// Python interpreter for the pip source
    #[arg(long, env = "PINLOCK_PYTHON", value_name = "PATH")]
    pub python: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `pins` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PinsArgs {
    /// Requirements file to read
    #[arg(value_name = "MANIFEST", default_value = "requirements.txt")]
    pub manifest: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
