use std::fs;
use std::path::PathBuf;

use crate::builder::WalkOptions;
use crate::chain::AncestorChain;
use crate::entry::WalkEntry;
use crate::error::WalkError;

const TRACE_TARGET: &str = "walk";

/// A pending path on the traversal stack.
#[derive(Debug)]
pub(crate) struct TraversalItem {
    path: PathBuf,
    depth: usize,
}

impl TraversalItem {
    pub(crate) fn new(path: PathBuf, depth: usize) -> Self {
        Self { path, depth }
    }
}

/// Depth-first traversal over a single root.
///
/// Entries come out in pre-order: every directory precedes its contents, and
/// a directory's children appear in the order the operating system listed
/// them. The iterator fuses after yielding an error.
#[derive(Debug)]
pub struct Walker {
    stack: Vec<TraversalItem>,
    chain: AncestorChain,
    follow_symlinks: bool,
    follow_root_symlink: bool,
    started: bool,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(stack: Vec<TraversalItem>, options: WalkOptions) -> Self {
        Self {
            stack,
            chain: AncestorChain::default(),
            follow_symlinks: options.follow_symlinks,
            follow_root_symlink: options.follow_root_symlink,
            started: false,
            finished: false,
        }
    }

    pub(crate) fn empty(options: WalkOptions) -> Self {
        Self::new(Vec::new(), options)
    }

    fn advance(&mut self, item: TraversalItem, first: bool) -> Result<WalkEntry, WalkError> {
        let follow = self.follow_symlinks || (self.follow_root_symlink && first);
        let metadata = if follow {
            fs::metadata(&item.path)
        } else {
            fs::symlink_metadata(&item.path)
        }
        .map_err(|error| WalkError::metadata(item.path.clone(), error))?;

        if metadata.is_dir() {
            let descend = if self.follow_symlinks {
                self.enter_directory(&item)?
            } else {
                // Links are never stat-followed below the root, so a
                // directory here cannot close a cycle.
                true
            };
            if descend {
                self.push_children(&item)?;
            }
        }

        Ok(WalkEntry {
            path: item.path,
            metadata,
            depth: item.depth,
        })
    }

    /// Decides whether a directory may be descended into.
    ///
    /// The ancestor chain is truncated to the directory's parent depth first,
    /// so only the real paths of its actual ancestors participate in the
    /// check. A directory whose real path is already on the chain is listed
    /// but not entered.
    fn enter_directory(&mut self, item: &TraversalItem) -> Result<bool, WalkError> {
        let real = fs::canonicalize(&item.path)
            .map_err(|error| WalkError::canonicalize(item.path.clone(), error))?;
        self.chain.truncate_to(item.depth - 1);
        if self.chain.contains(&real) {
            tracing::debug!(
                target: TRACE_TARGET,
                path = %item.path.display(),
                real = %real.display(),
                "directory resolves to an ancestor, listing without descending"
            );
            return Ok(false);
        }
        self.chain.push(real);
        Ok(true)
    }

    fn push_children(&mut self, item: &TraversalItem) -> Result<(), WalkError> {
        let entries = fs::read_dir(&item.path)
            .map_err(|error| WalkError::read_dir(item.path.clone(), error))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|error| WalkError::read_dir_entry(item.path.clone(), error))?;
            children.push(TraversalItem::new(
                item.path.join(entry.file_name()),
                item.depth + 1,
            ));
        }
        tracing::trace!(
            target: TRACE_TARGET,
            path = %item.path.display(),
            children = children.len(),
            "queued directory children"
        );
        // Reversed so popping replays the operating system's listing order.
        children.reverse();
        self.stack.extend(children);
        Ok(())
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(item) = self.stack.pop() else {
            self.finished = true;
            return None;
        };
        let first = !self.started;
        self.started = true;
        match self.advance(item, first) {
            Ok(entry) => Some(Ok(entry)),
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}
