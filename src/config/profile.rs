use std::path::{Path, PathBuf};

use crate::config::dedup;
use crate::error::BootstrapError;

/// An ordered list of config file paths contributed by one profile file.
///
/// Immutable once constructed; duplicates within the profile collapse to the
/// first occurrence.
#[derive(Debug, Clone)]
pub struct Profile {
    /// The profile file this was read from.
    pub path: PathBuf,
    /// Config paths in line order, deduplicated.
    pub configs: Vec<PathBuf>,
}

/// Resolve a profile argument to a file path.
///
/// An argument naming an existing file is used verbatim; anything else is
/// treated as a bare profile name under the fixed profiles directory.
#[must_use]
pub fn locate(arg: &Path, profiles_dir: &Path) -> PathBuf {
    if arg.is_file() {
        arg.to_path_buf()
    } else {
        profiles_dir.join(arg)
    }
}

/// Read a profile file.
///
/// Lines are trimmed; blank lines and lines starting with `#` are ignored.
/// Surviving identifiers are deduplicated preserving first-seen order and
/// mapped to `<configs_dir>/<identifier>.yaml`.
///
/// # Errors
///
/// Returns [`BootstrapError::FileAccess`] if the file cannot be read.
pub fn read(path: &Path, configs_dir: &Path) -> Result<Profile, BootstrapError> {
    let content = std::fs::read_to_string(path).map_err(|source| BootstrapError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let identifiers: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let configs = dedup(&identifiers)
        .into_iter()
        .map(|identifier| configs_dir.join(format!("{identifier}.yaml")))
        .collect();

    Ok(Profile {
        path: path.to_path_buf(),
        configs,
    })
}
