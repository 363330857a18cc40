//! Shared helper infrastructure for the integration suites.

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A temporary directory tree addressed through relative paths.
///
/// The tree is removed when the value is dropped.
pub struct TestTree {
    root: tempfile::TempDir,
}

impl TestTree {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            root: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory (and any missing parents) under the root.
    pub fn mkdir(&self, rel: &str) -> io::Result<PathBuf> {
        let path = self.root.path().join(rel);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Writes a file under the root, creating parent directories as needed.
    pub fn write(&self, rel: &str, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Maps absolute result paths back to root-relative strings; the root
    /// itself becomes `.`.
    pub fn relative(&self, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|path| {
                let stripped = path.strip_prefix(self.root.path()).expect("under the root");
                if stripped.as_os_str().is_empty() {
                    ".".to_string()
                } else {
                    stripped.to_string_lossy().into_owned()
                }
            })
            .collect()
    }
}
