use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::WalkError;
use crate::walker::{TraversalItem, Walker};

/// Symlink handling knobs for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Follow a symbolic link when it is the traversal root itself.
    pub follow_root_symlink: bool,
    /// Follow symbolic links everywhere beneath the root.
    pub follow_symlinks: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_root_symlink: true,
            follow_symlinks: true,
        }
    }
}

/// Configures and starts a [`Walker`].
///
/// The builder probes the root once at [`build`](Self::build) time; the
/// traversal itself is lazy and performs its I/O as the iterator is driven.
#[derive(Debug, Clone)]
pub struct WalkBuilder {
    root: PathBuf,
    options: WalkOptions,
}

impl WalkBuilder {
    /// Creates a builder rooted at `root` with default options.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: WalkOptions::default(),
        }
    }

    /// Replaces the whole option set at once.
    #[must_use]
    pub const fn options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets whether symbolic links below the root are followed.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.options.follow_symlinks = follow;
        self
    }

    /// Sets whether a symbolic link at the root itself is followed.
    #[must_use]
    pub const fn follow_root_symlink(mut self, follow: bool) -> Self {
        self.options.follow_root_symlink = follow;
        self
    }

    /// Probes the root and returns the traversal iterator.
    ///
    /// An empty or absent root yields a walker that produces no entries.
    /// The probe always follows symlinks, so a dangling link at the root
    /// counts as absent regardless of the symlink options.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] when the root probe fails for any reason other
    /// than the root not existing.
    pub fn build(self) -> Result<Walker, WalkError> {
        if self.root.as_os_str().is_empty() {
            return Ok(Walker::empty(self.options));
        }

        let root = pathutil::normalize_path(&self.root);
        match fs::metadata(&root) {
            Ok(_) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(Walker::empty(self.options));
            }
            Err(error) => return Err(WalkError::root_metadata(root, error)),
        }

        Ok(Walker::new(
            vec![TraversalItem::new(root, 1)],
            self.options,
        ))
    }
}
