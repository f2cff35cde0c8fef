//! Error types for pinlock operations.
//!
//! This module defines [`PinlockError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Reading and parsing never swallow errors; they surface to the caller
//! - A requirement mismatch is not an error: it is a normal
//!   [`CheckOutcome`](crate::report::CheckOutcome) value
//! - Use `anyhow::Error` (via `PinlockError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pinlock operations.
#[derive(Debug, Error)]
pub enum PinlockError {
    /// A manifest (top-level or included) does not exist or cannot be read.
    #[error("Requirements file not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A line that is not skipped lacks the `name==version` structure.
    #[error("Could not parse requirement line: {line}")]
    MalformedPinLine { line: String },

    /// A manifest includes itself, directly or through other manifests.
    #[error("Circular include detected: {path}")]
    IncludeCycle { path: PathBuf },

    /// The installed-package source could not be queried.
    #[error("Could not list installed packages: {message}")]
    InstalledQueryFailed { message: String },

    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pinlock operations.
pub type Result<T> = std::result::Result<T, PinlockError>;
