#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates a directory tree rooted at a single path, producing the
//! candidate set that pattern matching is applied to. The traversal is
//! depth-first and pre-order: the root comes out first, every directory
//! precedes its contents, and a directory's children appear in the order the
//! operating system listed them. No sorting is applied at this layer; callers
//! that need ordered output sort the matched results instead.
//!
//! # Design
//!
//! - [`WalkBuilder`] holds the root and the two symlink knobs, probes the
//!   root once, and hands back the iterator. An absent or empty root builds a
//!   walker that yields nothing rather than an error.
//! - [`Walker`] implements [`Iterator`] over `Result<WalkEntry, WalkError>`
//!   and drives an explicit stack, so arbitrarily deep trees cannot exhaust
//!   the call stack. I/O happens lazily as the iterator is polled.
//! - [`WalkEntry`] carries the discovered path together with the metadata the
//!   walker already retrieved, so callers filtering on file type need not
//!   stat a second time.
//! - When symlinks are followed, the walker resolves each directory's real
//!   path and compares it against the real paths of the ancestors on the
//!   active descent. A directory that resolves to one of its own ancestors is
//!   listed but not entered. The check is per-branch: a link to a directory
//!   already visited on a *different* branch is traversed again.
//!
//! # Invariants
//!
//! - The root entry, when the root exists, is always yielded first with
//!   depth 1, and its path is the normalized form of what the caller passed.
//! - A directory entry always precedes every entry beneath it.
//! - A directory that closes a symlink cycle appears exactly once and none of
//!   its contents appear through that path.
//! - Traversal never panics; filesystem failures surface as [`WalkError`]
//!   and fuse the iterator.
//!
//! # Errors
//!
//! Traversal emits [`WalkError`] when metadata cannot be queried, a directory
//! cannot be listed, or a real path cannot be resolved for the cycle check.
//! The offending path travels with the error, and the original failure is
//! available through [`Error::source`](std::error::Error::source).
//!
//! # Examples
//!
//! Walk a temporary tree and observe the pre-order contract.
//!
//! ```
//! use std::fs;
//! use walk::WalkBuilder;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("project");
//! fs::create_dir_all(root.join("src"))?;
//! fs::write(root.join("src").join("main.rs"), b"fn main() {}")?;
//!
//! let mut paths = Vec::new();
//! for entry in WalkBuilder::new(&root).build()? {
//!     paths.push(entry?.into_path());
//! }
//!
//! assert_eq!(paths[0], root);
//! assert!(paths.contains(&root.join("src").join("main.rs")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! The `fileset` crate drives this walker when resolving include and exclude
//! patterns against a tree.

mod builder;
mod chain;
mod entry;
mod error;
mod walker;

pub use builder::{WalkBuilder, WalkOptions};
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;

#[cfg(test)]
mod tests;
