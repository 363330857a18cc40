//! src/matching.rs
//!
//! The include/exclude pipeline over pattern lists: per-pattern option
//! scoping, comment and negation handling, brace expansion, rooting, and
//! the order-sensitive set algebra that merges hits across patterns.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walk::{WalkBuilder, WalkOptions};

use crate::analyze;
use crate::brace;
use crate::error::{FilesetError, Result};
use crate::glob;
use crate::options::MatchOptions;
use crate::pattern;
use crate::trace;

/// Lists every path under `root`, depth-first, following symlinks.
///
/// The root itself is the first entry. A missing or empty root yields an
/// empty list.
///
/// # Errors
///
/// Returns [`FilesetError::Walk`] when the traversal fails for any reason
/// other than the root being absent.
pub fn find(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    find_with(root, WalkOptions::default())
}

/// [`find`] with explicit symlink-handling options.
///
/// # Errors
///
/// Returns [`FilesetError::Walk`] when the traversal fails for any reason
/// other than the root being absent.
pub fn find_with(root: impl AsRef<Path>, options: WalkOptions) -> Result<Vec<PathBuf>> {
    collect_walk(root.as_ref(), options)
}

/// Filters a pre-supplied path list by include/exclude patterns.
///
/// The output preserves the relative order of `list` and contains no entry
/// more than once per occurrence in `list`. When `pattern_root` is given,
/// unrooted patterns are rooted against it first (except basename-only
/// patterns under `match_base`).
///
/// # Errors
///
/// Returns [`FilesetError::Pattern`] when a pattern fails to compile.
pub fn match_paths<I, S>(
    list: &[PathBuf],
    patterns: I,
    pattern_root: Option<&Path>,
    options: &MatchOptions,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates: Vec<String> = list
        .iter()
        .map(|path| glob::normalize_text_separators(&path.to_string_lossy()))
        .collect();
    let root_text = pattern_root
        .filter(|root| !root.as_os_str().is_empty())
        .map(|root| root.to_string_lossy().into_owned());

    let mut kept: HashSet<String> = HashSet::new();
    for raw in patterns {
        for prepared in prepare(raw.as_ref(), options) {
            let mut sub = prepared.pattern;
            if let Some(root) = &root_text {
                if !pathutil::is_rooted(&sub)
                    && (!prepared.options.match_base || pattern::contains_separator(&sub))
                {
                    sub = pattern::ensure_pattern_rooted(root, &sub);
                }
            }
            let compiled = glob::compile(&sub, &prepared.options)?;

            let mut hits = 0_usize;
            for text in &candidates {
                if compiled.is_match(text) {
                    if prepared.is_include {
                        kept.insert(text.clone());
                    } else {
                        kept.remove(text);
                    }
                    hits += 1;
                }
            }
            if hits == 0 && compiled.nonull() {
                let synthetic = glob::normalize_text_separators(compiled.pattern());
                if prepared.is_include {
                    kept.insert(synthetic);
                } else {
                    kept.remove(&synthetic);
                }
            }
            trace::pattern_hits(&sub, hits);
        }
    }

    let results: Vec<PathBuf> = list
        .iter()
        .zip(&candidates)
        .filter(|(_, text)| kept.contains(*text))
        .map(|(path, _)| path.clone())
        .collect();
    trace::resolved("match_paths", results.len());
    Ok(results)
}

/// Resolves patterns against the filesystem: each include pattern derives
/// its own find root, traverses it, and matches the results; excludes
/// subtract from everything accumulated so far. The final list is sorted.
///
/// An empty `default_root` falls back to the process working directory.
///
/// # Errors
///
/// Returns [`FilesetError::Pattern`] for uncompilable patterns,
/// [`FilesetError::Walk`] for traversal failures, [`FilesetError::Stat`]
/// when a literal pattern's existence probe fails, and
/// [`FilesetError::WorkingDirectory`] when the empty-root fallback cannot
/// be resolved.
pub fn find_match<I, S>(
    default_root: impl AsRef<Path>,
    patterns: I,
    walk_options: WalkOptions,
    match_options: &MatchOptions,
) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let default_root = resolve_default_root(default_root.as_ref())?;

    let mut results = ResultSet::default();
    for raw in patterns {
        for prepared in prepare(raw.as_ref(), match_options) {
            if prepared.is_include {
                apply_include(&mut results, &default_root, &prepared, walk_options)?;
            } else {
                apply_exclude(&mut results, &default_root, &prepared)?;
            }
        }
    }

    let paths = results.into_sorted_paths();
    trace::resolved("find_match", paths.len());
    Ok(paths)
}

/// A pattern after comment, negation, and brace processing, carrying the
/// option set scoped to it.
#[derive(Debug)]
struct PreparedPattern {
    is_include: bool,
    pattern: String,
    options: MatchOptions,
}

/// Runs the shared front of the pipeline on one raw pattern: trim, comment
/// skip, negation classification, brace expansion. Each expanded
/// sub-pattern carries options with the already-performed steps disabled,
/// so expansion output cannot re-trigger them.
fn prepare(raw: &str, base: &MatchOptions) -> Vec<PreparedPattern> {
    let mut options = *base;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if pattern::is_comment(trimmed, &options) {
        return Vec::new();
    }
    options.nocomment = true;

    let classified = pattern::classify(trimmed, &options);
    options.nonegate = true;
    options.flip_negate = false;
    trace::pattern_classified(&classified.pattern, classified.is_include);

    let expanded = if options.nobrace {
        vec![classified.pattern]
    } else if cfg!(windows) {
        // Brace syntax cannot coexist with escaped backslashes here, so
        // separators are converted up front.
        brace::expand(&classified.pattern.replace('\\', "/"), false)
    } else {
        brace::expand(&classified.pattern, true)
    };
    options.nobrace = true;

    expanded
        .into_iter()
        .filter_map(|sub| {
            let sub = sub.trim();
            if sub.is_empty() {
                return None;
            }
            Some(PreparedPattern {
                is_include: classified.is_include,
                pattern: sub.to_string(),
                options,
            })
        })
        .collect()
}

fn apply_include(
    results: &mut ResultSet,
    default_root: &str,
    prepared: &PreparedPattern,
    walk_options: WalkOptions,
) -> Result<()> {
    let analysis = analyze::analyze(default_root, &prepared.pattern, &prepared.options);
    trace::find_plan(&prepared.pattern, &analysis.find_root, analysis.stat_only);
    if analysis.find_root.is_empty() {
        return Ok(());
    }

    let candidates = if analysis.stat_only {
        match fs::metadata(&analysis.find_root) {
            Ok(_) => vec![PathBuf::from(&analysis.find_root)],
            Err(error) if error.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(error) => {
                return Err(FilesetError::Stat {
                    path: PathBuf::from(&analysis.find_root),
                    source: error,
                });
            }
        }
    } else {
        collect_walk(Path::new(&analysis.find_root), walk_options)?
    };

    let compiled = glob::compile(&analysis.adjusted_pattern, &prepared.options)?;
    let mut hits = 0_usize;
    for path in candidates {
        let text = glob::normalize_text_separators(&path.to_string_lossy());
        if compiled.is_match(&text) {
            results.insert(&text, path);
            hits += 1;
        }
    }
    if hits == 0 && compiled.nonull() {
        let synthetic = compiled.pattern().to_string();
        results.insert(
            &glob::normalize_text_separators(&synthetic),
            PathBuf::from(synthetic),
        );
    }
    trace::pattern_hits(&prepared.pattern, hits);
    Ok(())
}

fn apply_exclude(
    results: &mut ResultSet,
    default_root: &str,
    prepared: &PreparedPattern,
) -> Result<()> {
    let mut sub = prepared.pattern.clone();
    if !pattern::is_basename_only(&sub, &prepared.options) {
        sub = pattern::ensure_pattern_rooted(default_root, &sub);
    }
    let compiled = glob::compile(&sub, &prepared.options)?;

    let mut removed: Vec<String> = results
        .paths()
        .map(|path| glob::normalize_text_separators(&path.to_string_lossy()))
        .filter(|text| compiled.is_match(text))
        .collect();
    if removed.is_empty() && compiled.nonull() {
        removed.push(glob::normalize_text_separators(compiled.pattern()));
    }

    trace::pattern_hits(&sub, removed.len());
    for text in removed {
        results.remove(&text);
    }
    Ok(())
}

fn collect_walk(root: &Path, options: WalkOptions) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkBuilder::new(root).options(options).build()? {
        paths.push(entry?.into_path());
    }
    Ok(paths)
}

fn resolve_default_root(root: &Path) -> Result<String> {
    if root.as_os_str().is_empty() {
        let cwd = std::env::current_dir()
            .map_err(|source| FilesetError::WorkingDirectory { source })?;
        return Ok(cwd.to_string_lossy().into_owned());
    }
    Ok(root.to_string_lossy().into_owned())
}

/// Accumulated matches, deduplicated by path text.
///
/// Keys fold case on Windows so matches that differ only by case collapse
/// to one entry and excludes can remove them regardless of spelling; the
/// originally discovered form is what comes back out.
#[derive(Debug, Default)]
struct ResultSet {
    entries: HashMap<String, PathBuf>,
}

impl ResultSet {
    fn insert(&mut self, text: &str, path: PathBuf) {
        self.entries.insert(Self::key(text), path);
    }

    fn remove(&mut self, text: &str) {
        self.entries.remove(&Self::key(text));
    }

    fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.values()
    }

    fn into_sorted_paths(self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.entries.into_values().collect();
        paths.sort();
        paths
    }

    fn key(text: &str) -> String {
        if cfg!(windows) {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}
