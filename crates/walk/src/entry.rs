use std::fs;
use std::path::{Path, PathBuf};

/// Result of a single traversal step.
///
/// Carries the metadata obtained by the walker's stat decision: when the
/// entry was reached through a followed symlink, the metadata describes
/// the link target, otherwise the link itself.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) metadata: fs::Metadata,
    pub(crate) depth: usize,
}

impl WalkEntry {
    /// Returns the path of the entry, rooted at the traversal root as the
    /// caller supplied it.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Provides access to the [`fs::Metadata`] captured for the entry.
    #[must_use]
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Reports the depth of the entry; the traversal root has depth `1`.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Consumes the entry, returning its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
