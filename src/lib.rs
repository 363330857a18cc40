#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `fileset` resolves sets of filesystem paths from glob patterns. It
//! combines a deterministic depth-first traversal with an ordered
//! include/exclude pattern pipeline: patterns are processed first to last,
//! includes union their matches into the result, excludes subtract from
//! everything accumulated so far, and a later include can bring a path
//! back. Negation (`!`), brace alternation (`{a,b}`), `**` spanning any
//! number of directories, and comment lines are all part of the dialect,
//! each switchable through [`MatchOptions`].
//!
//! # Design
//!
//! - [`find`] and [`find_with`] enumerate a directory tree through the
//!   `walk` crate: the root comes first, parents precede their contents,
//!   and siblings keep the operating system's listing order.
//! - [`match_paths`] applies a pattern list to paths the caller already
//!   has, preserving their relative order.
//! - [`find_match`] resolves patterns against the disk. Every include
//!   pattern is analyzed for its literal lead segments so the traversal
//!   starts as deep as possible, and a fully literal pattern skips the
//!   walk for a single existence probe.
//! - [`legacy_find_files`] serves the older `;`-delimited syntax (`+:`
//!   includes, `-:` excludes) by translating each pattern into an anchored
//!   regular expression.
//! - Glob matching compiles onto [`globset`] after a rewrite pass that
//!   supplies the dialect differences: leading-dot guards when `dot` is
//!   off, literal treatment of unclosed character classes and leftover
//!   braces, and collapsed `*` runs.
//!
//! # Invariants
//!
//! - Traversal never yields a descendant before its parent directory, and
//!   a missing or empty root produces an empty result instead of an error.
//! - [`match_paths`] output is always a subsequence of its input list.
//! - [`find_match`] and [`legacy_find_files`] return sorted, deduplicated
//!   paths.
//! - Pattern processing order is fixed: comment skip, negation
//!   classification, brace expansion, rooting. Expansion output cannot
//!   re-trigger the earlier steps.
//!
//! # Errors
//!
//! All public operations return [`Result`]. [`FilesetError`] wraps pattern
//! compilation failures ([`PatternError`]), traversal failures
//! ([`WalkError`]), existence-probe failures, and the inability to resolve
//! the working directory when an empty default root falls back to it.
//!
//! # Examples
//!
//! ```
//! use fileset::{MatchOptions, WalkOptions};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::create_dir_all(temp.path().join("src"))?;
//! std::fs::write(temp.path().join("src/main.rs"), b"fn main() {}")?;
//! std::fs::write(temp.path().join("src/lib.rs"), b"")?;
//! std::fs::write(temp.path().join("README.md"), b"# readme")?;
//!
//! let sources = fileset::find_match(
//!     temp.path(),
//!     ["**/*.rs"],
//!     WalkOptions::default(),
//!     &MatchOptions::default(),
//! )?;
//! assert_eq!(sources.len(), 2);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! The `walk` crate for the traversal itself and `pathutil` for the
//! separator-aware path string helpers both layers share.

mod analyze;
mod brace;
mod error;
mod glob;
mod legacy;
mod matching;
mod options;
mod pattern;
mod trace;

pub use error::{FilesetError, PatternError, Result};
pub use legacy::legacy_find_files;
pub use matching::{find, find_match, find_with, match_paths};
pub use options::MatchOptions;
pub use walk::{WalkBuilder, WalkEntry, WalkError, WalkErrorKind, WalkOptions, Walker};
