//! src/error.rs
//!
//! Error types for path-set resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for the public resolution operations.
pub type Result<T> = std::result::Result<T, FilesetError>;

/// A pattern that could not be turned into a usable matcher.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern did not compile as a glob.
    #[error("invalid glob pattern: {0}")]
    Glob(
        #[from]
        #[source]
        globset::Error,
    ),
    /// The legacy pattern's translated regular expression did not compile.
    #[error("invalid legacy pattern: {0}")]
    Regex(
        #[from]
        #[source]
        regex::Error,
    ),
    /// A legacy pattern ended with a path separator.
    #[error("legacy pattern '{0}' ends with a path separator")]
    TrailingSeparator(String),
}

/// Errors raised by the public resolution operations.
#[derive(Debug, Error)]
pub enum FilesetError {
    /// A pattern was rejected before any filesystem work.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// Traversal failed below a find root.
    #[error(transparent)]
    Walk(#[from] walk::WalkError),
    /// The existence probe of a literal pattern path failed.
    #[error("failed to stat '{path}': {source}")]
    Stat {
        /// Path the probe was issued against.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The working-directory fallback for an empty root could not be read.
    #[error("failed to resolve the working directory: {source}")]
    WorkingDirectory {
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_names_the_pattern() {
        let error = PatternError::TrailingSeparator("a/b/".to_string());
        assert!(matches!(error, PatternError::TrailingSeparator(_)));
        assert!(error.to_string().contains("a/b/"));
        assert!(error.to_string().contains("ends with a path separator"));
    }

    #[test]
    fn glob_errors_convert_through_both_layers() {
        let globset_error = globset::GlobBuilder::new("a{b")
            .build()
            .expect_err("unclosed alternate should not compile");
        let pattern_error: PatternError = globset_error.into();
        assert!(matches!(pattern_error, PatternError::Glob(_)));
        assert!(pattern_error.to_string().contains("invalid glob pattern"));

        let fileset_error: FilesetError = pattern_error.into();
        assert!(matches!(fileset_error, FilesetError::Pattern(_)));
    }

    #[test]
    fn stat_error_carries_the_path() {
        let error = FilesetError::Stat {
            path: PathBuf::from("/probe/target"),
            source: io::Error::other("boom"),
        };
        assert!(error.to_string().contains("/probe/target"));
        assert!(error.to_string().contains("boom"));
    }

    #[test]
    fn source_chain_reaches_the_io_error() {
        use std::error::Error;

        let error = FilesetError::WorkingDirectory {
            source: io::Error::other("cwd gone"),
        };
        let source = error.source().expect("source should be present");
        assert!(source.to_string().contains("cwd gone"));
    }
}
