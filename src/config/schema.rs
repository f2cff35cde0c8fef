//! Configuration schema definitions.
//!
//! This module contains the structs that map to the `.pinlock.yml`
//! file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.pinlock.yml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinlockConfig {
    /// Manifests to check (relative to the project root)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub manifests: Vec<PathBuf>,

    /// Message shown after the list of mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_text: Option<String>,

    /// Where installed packages are read from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<InstalledSource>,

    /// Site-packages directories to scan (relative to the project root)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub site_packages: Vec<PathBuf>,

    /// Python interpreter used by the `pip` source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}

impl PinlockConfig {
    /// Layer `other` on top of `self`: values set in `other` win.
    pub fn overlay(mut self, other: PinlockConfig) -> Self {
        if !other.manifests.is_empty() {
            self.manifests = other.manifests;
        }
        if other.post_text.is_some() {
            self.post_text = other.post_text;
        }
        if other.source.is_some() {
            self.source = other.source;
        }
        if !other.site_packages.is_empty() {
            self.site_packages = other.site_packages;
        }
        if other.python.is_some() {
            self.python = other.python;
        }
        self
    }
}

/// Where installed packages are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InstalledSource {
    /// Read distribution metadata from site-packages directories.
    #[default]
    SitePackages,
    /// Run `python -m pip list`.
    #[serde(alias = "freeze")]
    #[value(alias = "freeze")]
    Pip,
}
