#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Platform-aware path string helpers.
//!
//! Pattern handling works on path *strings*, not [`Path`] values: glob
//! patterns carry escape characters, mixed separators, and Windows
//! drive/UNC prefixes that must be interpreted the same way on every host.
//! This crate implements those rules once per dialect:
//!
//! - [`posix`] treats `/` as the only separator and `\` as an ordinary
//!   character (escapes are the pattern layer's concern).
//! - [`windows`] converts `/` to `\`, preserves UNC prefixes, and treats
//!   drive specifiers (`C:`, `C:\`, drive-relative `C:name`) per Windows
//!   rules.
//!
//! The top-level functions dispatch to the dialect of the compilation
//! target. All functions are pure; nothing here touches the filesystem.
//!
//! # Examples
//!
//! ```
//! assert_eq!(pathutil::windows::parent_directory(r"C:\tools\nuget"), r"C:\tools");
//! assert_eq!(pathutil::windows::parent_directory(r"\\server\share"), "");
//! assert_eq!(pathutil::posix::ensure_rooted("/work", "src/main.rs"), "/work/src/main.rs");
//! ```

pub mod posix;
pub mod windows;

use std::path::{Component, Path, PathBuf};

/// Reports whether `path` is rooted under the host platform's rules.
///
/// On Windows this accepts leading separators (including UNC) and drive
/// specifiers such as `C:` or drive-relative `C:name`; elsewhere only a
/// leading `/` counts. Empty input is not rooted.
#[must_use]
pub fn is_rooted(path: &str) -> bool {
    if cfg!(windows) {
        windows::is_rooted(path)
    } else {
        posix::is_rooted(path)
    }
}

/// Converts separators to the host form and collapses redundant runs.
///
/// On Windows a leading UNC double-backslash survives collapsing.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    if cfg!(windows) {
        windows::normalize_separators(path)
    } else {
        posix::normalize_separators(path)
    }
}

/// Joins `path` under `root` unless `path` is already rooted.
///
/// Neither argument is normalized; only the joining separator is chosen
/// by the host dialect (a bare Windows drive like `C:` joins without one,
/// keeping the result drive-relative).
#[must_use]
pub fn ensure_rooted(root: &str, path: &str) -> String {
    if cfg!(windows) {
        windows::ensure_rooted(root, path)
    } else {
        posix::ensure_rooted(root, path)
    }
}

/// Returns the parent directory of `path` under host rules, or an empty
/// string when no parent exists (filesystem roots, bare drive or UNC
/// specifiers, and separator-free names).
#[must_use]
pub fn parent_directory(path: &str) -> String {
    if cfg!(windows) {
        windows::parent_directory(path)
    } else {
        posix::parent_directory(path)
    }
}

/// Strips trailing separators while preserving root forms (`/`, `\`,
/// `C:\`). Expects separator-normalized input on Windows.
#[must_use]
pub fn trim_trailing_separators(path: &str) -> &str {
    if cfg!(windows) {
        windows::trim_trailing_separators(path)
    } else {
        posix::trim_trailing_separators(path)
    }
}

/// Lexically normalizes a path: drops `.` components, resolves `..`
/// against preceding normal components, and removes trailing separators.
///
/// Leading `..` components of a relative path are preserved, and `..`
/// directly under a root collapses into the root. No filesystem access is
/// performed, so the result can differ from the canonical path in the
/// presence of symlinks. An empty path stays empty; a path that
/// normalizes away entirely becomes `.`.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        return PathBuf::new();
    }
    let mut out = PathBuf::new();
    let mut rooted = false;
    let mut depth = 0usize;
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => {
                out.push(component.as_os_str());
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !rooted {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }
    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}
