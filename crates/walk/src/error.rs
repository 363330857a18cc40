use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when traversal fails.
///
/// Every failure records the path the operating system call was issued
/// against, so callers can surface the offending location without pattern
/// matching on [`WalkErrorKind`].
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::RootMetadata { path, source },
        }
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::Metadata { path, source },
        }
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ReadDir { path, source },
        }
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ReadDirEntry { path, source },
        }
    }

    pub(crate) fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::Canonicalize { path, source },
        }
    }

    /// Returns the specific failure that terminated traversal.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::RootMetadata { path, source } => {
                write!(
                    f,
                    "failed to stat traversal root '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::Metadata { path, source } => {
                write!(f, "failed to stat '{}': {}", path.display(), source)
            }
            WalkErrorKind::ReadDir { path, source } => {
                write!(
                    f,
                    "failed to read directory '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::ReadDirEntry { path, source } => {
                write!(
                    f,
                    "failed to read an entry of '{}': {}",
                    path.display(),
                    source
                )
            }
            WalkErrorKind::Canonicalize { path, source } => {
                write!(
                    f,
                    "failed to resolve real path of '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::RootMetadata { source, .. }
            | WalkErrorKind::Metadata { source, .. }
            | WalkErrorKind::ReadDir { source, .. }
            | WalkErrorKind::ReadDirEntry { source, .. }
            | WalkErrorKind::Canonicalize { source, .. } => Some(source),
        }
    }
}

/// Classification of traversal failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// The existence probe of the traversal root failed for a reason other
    /// than the root being absent.
    RootMetadata {
        /// Root that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A stat or lstat of a traversal item failed.
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A directory's contents could not be listed.
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// An individual entry could not be obtained while listing.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A directory's real path could not be resolved for cycle detection.
    Canonicalize {
        /// Directory that failed to canonicalize.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. }
            | Self::Metadata { path, .. }
            | Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Canonicalize { path, .. } => path,
        }
    }
}
