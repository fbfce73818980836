use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::profile::Profile;
use crate::config::{CONFIG_EXTENSIONS, dedup};
use crate::error::BootstrapError;

/// Merge profile-contributed configs with explicitly requested paths.
///
/// Profile contributions come first (in profile order, then line order),
/// explicit paths are appended in absolute form, and the combined sequence is
/// deduplicated preserving first occurrence.
///
/// # Errors
///
/// Returns an error if an explicit path cannot be resolved to absolute form.
pub fn merge(profiles: &[Profile], explicit: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut combined: Vec<PathBuf> = profiles
        .iter()
        .flat_map(|profile| profile.configs.iter().cloned())
        .collect();

    for path in explicit {
        combined.push(resolve_explicit(path)?);
    }

    Ok(dedup(&combined))
}

/// Resolve an explicitly requested config path to absolute form.
///
/// Canonicalizes when the file exists; falls back to lexical absolutization
/// so nonexistent paths still reach validation and show up in its report.
fn resolve_explicit(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .with_context(|| format!("resolving config path {}", path.display()))
}

/// Validate that every resolved config exists, is a regular file, and carries
/// a recognized extension.
///
/// # Errors
///
/// Returns [`BootstrapError::MissingConfigs`] carrying every offending path,
/// in resolved order.
pub fn validate(configs: &[PathBuf]) -> Result<(), BootstrapError> {
    let missing: Vec<PathBuf> = configs
        .iter()
        .filter(|config| !is_valid_config(config))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BootstrapError::MissingConfigs(missing))
    }
}

fn is_valid_config(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext))
}
