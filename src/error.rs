//! Domain-specific error types for the bootstrap engine.
//!
//! This module provides a structured error taxonomy using [`thiserror`].
//! Internal modules return [`BootstrapError`] values; command handlers at the
//! CLI boundary convert them to [`anyhow::Error`] via the standard `?`
//! operator. Only `MissingConfigs` is recovered (the orchestration layer
//! reports every offending path before aborting) — the rest propagate to the
//! top-level handler and exit 1.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving configs and preparing the host.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// A profile file could not be opened or read.
    #[error("cannot read profile {}: {source}", path.display())]
    FileAccess {
        /// Path of the profile that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// One or more resolved config paths failed existence, file-type, or
    /// extension validation. Carries every offending path, not just the first.
    #[error("{} missing or invalid config(s)", .0.len())]
    MissingConfigs(Vec<PathBuf>),

    /// No package manager implementation is registered for the host OS.
    #[error("no package manager available for {os}")]
    UnsupportedPlatform {
        /// Display name of the detected OS.
        os: String,
    },

    /// The package-index refresh command exited non-zero.
    #[error("{manager} index refresh failed (exit {code})")]
    PackageUpdate {
        /// Name of the package manager whose refresh failed.
        manager: &'static str,
        /// Exit code reported by the refresh command.
        code: i32,
    },
}
