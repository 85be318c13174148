//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Everything is created under a named root directory inside the temp dir,
/// so the root's display name is predictable. Cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
    root: PathBuf,
}

impl TestDir {
    /// Create an empty root directory named `root`.
    pub fn new() -> Self {
        Self::named("root")
    }

    /// Create an empty root directory with the given name.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// The traversal root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// A path next to (not inside) the root, for output files.
    pub fn outside(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
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

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a chain `d1/d2/.../dN` with one file `leaf.txt` at the bottom.
    pub fn add_chain(&self, levels: usize) -> PathBuf {
        let rel: PathBuf = (1..=levels).map(|i| format!("d{}", i)).collect();
        let dir = self.root.join(rel);
        fs::create_dir_all(&dir).expect("Failed to create chain");
        let leaf = dir.join("leaf.txt");
        fs::write(&leaf, "").expect("Failed to write leaf");
        leaf
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
