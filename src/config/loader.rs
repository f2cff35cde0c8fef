//! Configuration file discovery and loading.

use crate::config::schema::PinlockConfig;
use crate::error::{PinlockError, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = ".pinlock.yml";

/// Local (uncommitted) overrides file name.
pub const LOCAL_CONFIG_FILE_NAME: &str = ".pinlock.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .pinlock.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .pinlock.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_FILE_NAME)),
            project_local: existing(project_root.join(LOCAL_CONFIG_FILE_NAME)),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PinlockConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PinlockError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PinlockError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into PinlockConfig.
///
/// An empty document is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PinlockConfig> {
    if content.trim().is_empty() {
        return Ok(PinlockConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PinlockError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file, which must exist.
/// Otherwise layers `.pinlock.local.yml` over `.pinlock.yml`; a project
/// without either gets the default config.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PinlockConfig> {
    if let Some(override_path) = config_override {
        debug!("Loading config from {}", override_path.display());
        return load_config_file(override_path);
    }

    let paths = ConfigPaths::discover(project_root);
    let mut config = PinlockConfig::default();
    for path in paths.all_existing() {
        debug!("Loading config from {}", path.display());
        config = config.overlay(load_config_file(path)?);
    }
    Ok(config)
}
