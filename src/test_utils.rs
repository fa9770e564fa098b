//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Everything lives under a root directory inside a fresh temp dir, so the root's
/// name is predictable. The tree is removed when dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty tree whose root directory is called `root_name`.
    pub fn new(root_name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(root_name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { _dir: dir, root }
    }

    /// The reference layout:
    ///
    /// ```text
    /// Root/{a/{b/{.hidden, normal.go}, c/{d/{e/, normal.py}, normal.go}, normal.py}, normal.go}
    /// ```
    pub fn reference() -> Self {
        let tree = Self::new("Root");
        tree.add_dir("a/b");
        tree.add_dir("a/c/d/e");
        tree.add_file("a/b/.hidden", "");
        tree.add_file("a/b/normal.go", "");
        tree.add_file("a/c/d/normal.py", "");
        tree.add_file("a/c/normal.go", "");
        tree.add_file("a/normal.py", "");
        tree.add_file("normal.go", "");
        tree
    }

    /// Get the path to the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a directory (and its parents) below the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write a file below the root, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}
