// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed dotfiles repository so each
// integration test can set up an isolated environment without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bootstrap_cli::config::Layout;

/// An isolated dotfiles repository backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct TestRepo {
    /// Temporary directory containing the repository.
    pub root: tempfile::TempDir,
}

impl TestRepo {
    /// Create a repository with empty `configs/` and `profiles/` directories.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("configs")).expect("create configs dir");
        std::fs::create_dir_all(root.path().join("profiles")).expect("create profiles dir");
        Self { root }
    }

    /// Path to the repository root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Layout rooted at this repository.
    pub fn layout(&self) -> Layout {
        Layout::new(self.root.path().to_path_buf())
    }

    /// Write `configs/<name>.yaml` with a minimal dotbot directive and return
    /// its path.
    pub fn add_config(&self, name: &str) -> PathBuf {
        let path = self
            .root
            .path()
            .join("configs")
            .join(format!("{name}.yaml"));
        std::fs::write(&path, format!("- link:\n    ~/.{name}: {name}\n")).expect("write config");
        path
    }

    /// Write `profiles/<name>` with the given contents and return its path.
    pub fn add_profile(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.path().join("profiles").join(name);
        std::fs::write(&path, contents).expect("write profile");
        path
    }
}
