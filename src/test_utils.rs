//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests, benchmarks and the `test-utils` feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// `path()` is the tree's root. With `named`, the root is a sub-directory with a
/// fixed name so the rendered header line is predictable.
/// Everything is removed when dropped.
pub struct TestDir {
    dir: TempDir,
    root: PathBuf,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().to_path_buf();
        Self { dir, root }
    }

    /// Create a temporary tree whose root directory is called `name`.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// Get the path to the tree's root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of the enclosing temporary directory (the root's parent for `named`).
    pub fn base(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
