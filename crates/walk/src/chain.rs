use std::path::{Path, PathBuf};

/// Real paths of the directories on the active descent, indexed by depth.
///
/// Entry `i` is the resolved path of the directory at depth `i + 1`. The
/// walker truncates the chain to `depth - 1` before testing or recording a
/// directory, so entries left over from already-unwound branches never
/// participate in cycle checks.
#[derive(Debug, Default)]
pub(crate) struct AncestorChain {
    real_paths: Vec<PathBuf>,
}

impl AncestorChain {
    /// Discards entries at or beyond the given depth.
    pub(crate) fn truncate_to(&mut self, depth: usize) {
        self.real_paths.truncate(depth);
    }

    /// Reports whether the resolved path is already on the descent.
    pub(crate) fn contains(&self, real: &Path) -> bool {
        self.real_paths.iter().any(|ancestor| ancestor == real)
    }

    /// Records the resolved path of the directory being entered.
    pub(crate) fn push(&mut self, real: PathBuf) {
        self.real_paths.push(real);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.real_paths.len()
    }
}
