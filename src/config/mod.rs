//! Repository layout and config resolution.
pub mod profile;
pub mod resolve;

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Recognized config file extensions.
pub const CONFIG_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Fixed directory layout of a dotfiles repository.
///
/// Computed once per run and passed explicitly; holds no mutable state.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub configs_dir: PathBuf,
    pub profiles_dir: PathBuf,
}

impl Layout {
    /// Build the layout rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let configs_dir = root.join("configs");
        let profiles_dir = root.join("profiles");
        Self {
            root,
            configs_dir,
            profiles_dir,
        }
    }

    /// Resolve the repository root from CLI arguments or auto-detection.
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate directory contains a `configs/`
    /// directory.
    pub fn discover(cli_root: Option<&Path>) -> Result<Self> {
        if let Some(root) = cli_root {
            return Ok(Self::new(root.to_path_buf()));
        }

        if let Ok(root) = std::env::var("BOOTSTRAP_ROOT") {
            return Ok(Self::new(PathBuf::from(root)));
        }

        // Try to find the repository root from the current binary's location
        if let Ok(exe) = std::env::current_exe()
            && let Some(parent) = exe.parent()
        {
            // Check if we're in target/release/ or bin/
            let candidates = [
                parent.join("../.."), // target/release/ → repo root
                parent.join(".."),    // bin/ → repo root
            ];
            for candidate in &candidates {
                if candidate.join("configs").exists() {
                    return Ok(Self::new(dunce::canonicalize(candidate)?));
                }
            }
        }

        // Last resort: current directory
        let cwd = std::env::current_dir()?;
        if cwd.join("configs").exists() {
            return Ok(Self::new(cwd));
        }

        anyhow::bail!("cannot determine dotfiles root. Use --root or set BOOTSTRAP_ROOT env var");
    }
}

/// Order-preserving de-duplication.
///
/// Returns each distinct element once, in order of first occurrence. Pure;
/// idempotent over its own output.
#[must_use]
pub fn dedup<T: Clone + Eq + Hash>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}
