//! src/legacy.rs
//!
//! Resolver for the older `;`-delimited pattern syntax, where `+:` marks
//! an include, `-:` an exclude, and `;;` escapes a literal semicolon.
//! Patterns are translated into anchored regular expressions instead of
//! globs.
//!
//! Quirk kept for compatibility: when directories are requested, a
//! directory is retested with a trailing separator appended, so a pattern
//! like `**/obj/**` matches the `obj` directory itself as well as its
//! contents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use walk::{WalkBuilder, WalkOptions};

use crate::error::{PatternError, Result};
use crate::trace;

/// Characters escaped before the wildcard rewrites run.
const REGEX_SPECIALS: &[char] = &[
    '.', '*', '+', '?', '^', '=', '!', ':', '$', '{', '}', '(', ')', '|', '[', ']', '/', '\\',
];

/// Resolves a `;`-delimited legacy pattern against the filesystem.
///
/// Relative sub-patterns are rooted against `root_directory`. When neither
/// `include_files` nor `include_directories` is set, files are returned.
/// The output is sorted and deduplicated.
///
/// # Errors
///
/// Returns [`crate::FilesetError::Pattern`] before any traversal begins
/// when a sub-pattern ends with a path separator or fails to translate,
/// and [`crate::FilesetError::Walk`] when a traversal fails.
pub fn legacy_find_files(
    root_directory: impl AsRef<Path>,
    pattern: &str,
    include_files: bool,
    include_directories: bool,
) -> Result<Vec<PathBuf>> {
    let include_files = include_files || !include_directories;
    let root_text = root_directory.as_ref().to_string_lossy();

    let mut include_patterns: Vec<String> = Vec::new();
    let mut exclude_rules: Vec<Regex> = Vec::new();
    for part in split_pattern(pattern) {
        if part.is_empty() {
            continue;
        }

        let (is_include, mut sub) = if let Some(rest) = part.strip_prefix("+:") {
            (true, rest.to_string())
        } else if let Some(rest) = part.strip_prefix("-:") {
            (false, rest.to_string())
        } else {
            (true, part)
        };
        trace::legacy_rule(&sub, is_include);

        if sub.ends_with('/') || (cfg!(windows) && sub.ends_with('\\')) {
            return Err(PatternError::TrailingSeparator(sub).into());
        }

        if !root_text.is_empty() && !pathutil::is_rooted(&sub) {
            sub = pathutil::ensure_rooted(&root_text, &sub);
        }

        if is_include {
            include_patterns.push(sub);
        } else {
            exclude_rules.push(convert_pattern_to_regex(&sub)?);
        }
    }

    // Keyed by display text, so iteration order is the sorted output.
    let mut matched: BTreeMap<String, bool> = BTreeMap::new();
    for pattern in include_patterns {
        let find_path = match pattern.find(['*', '?']) {
            Some(index) => directory_before(&pattern[..index]),
            None => pathutil::parent_directory(&pattern),
        };
        if find_path.is_empty() {
            continue;
        }

        let rule = convert_pattern_to_regex(&pattern)?;
        for entry in WalkBuilder::new(&find_path)
            .options(WalkOptions::default())
            .build()?
        {
            let entry = entry?;
            let is_dir = entry.metadata().is_dir();
            let wanted = if is_dir {
                include_directories
            } else {
                include_files
            };
            if !wanted {
                continue;
            }
            let native = entry.path().to_string_lossy().into_owned();
            if matches_item(&rule, &normalize_item(&native), is_dir) {
                matched.insert(native, is_dir);
            }
        }
    }

    for rule in &exclude_rules {
        matched.retain(|native, is_dir| !matches_item(rule, &normalize_item(native), *is_dir));
    }

    let paths: Vec<PathBuf> = matched.into_keys().map(PathBuf::from).collect();
    trace::resolved("legacy_find_files", paths.len());
    Ok(paths)
}

/// Splits on `;`, un-escaping `;;` to a literal semicolon. Empty parts are
/// preserved for the caller to skip.
fn split_pattern(pattern: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ';' {
            if chars.peek() == Some(&';') {
                chars.next();
                current.push(';');
            } else {
                parts.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// The directory to traverse for the text preceding the first wildcard: the
/// prefix itself when it already names a directory, its parent otherwise.
fn directory_before(prefix: &str) -> String {
    let trimmed = pathutil::trim_trailing_separators(prefix);
    if trimmed.len() < prefix.len() {
        trimmed.to_string()
    } else {
        pathutil::parent_directory(prefix)
    }
}

/// Translates a legacy pattern into an anchored regex: `/**/` spans one or
/// more whole segments or collapses to a single separator, a remaining `**`
/// crosses separators, `*` and `?` stay within one segment, and everything
/// else is literal. Windows matches case-insensitively.
fn convert_pattern_to_regex(pattern: &str) -> std::result::Result<Regex, PatternError> {
    let normalized = if cfg!(windows) {
        pattern.replace('\\', "/")
    } else {
        pattern.to_string()
    };

    let mut escaped = String::with_capacity(normalized.len() * 2);
    for c in normalized.chars() {
        if REGEX_SPECIALS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    let translated = escaped
        .replace(r"\/\*\*\/", "((/.+/)|(/))")
        .replace(r"\*\*", ".*")
        .replace(r"\*", "[^/]*")
        .replace(r"\?", "[^/]");
    let anchored = format!("^{translated}$");

    let rule = RegexBuilder::new(&anchored)
        .case_insensitive(cfg!(windows))
        .build()?;
    trace::legacy_translated(pattern, rule.as_str());
    Ok(rule)
}

fn normalize_item(native: &str) -> String {
    if cfg!(windows) {
        native.replace('\\', "/")
    } else {
        native.to_string()
    }
}

fn matches_item(rule: &Regex, normalized: &str, is_dir: bool) -> bool {
    if rule.is_match(normalized) {
        return true;
    }
    is_dir && !normalized.ends_with('/') && rule.is_match(&format!("{normalized}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use crate::error::FilesetError;

    fn touch(path: &Path) {
        fs::write(path, b"x").expect("write file");
    }

    /// root/src/{a.txt,b.txt,nested/c.txt}, root/other/d.md
    fn sample_tree() -> tempfile::TempDir {
        let temp = tempfile::tempdir().expect("create tempdir");
        fs::create_dir_all(temp.path().join("src/nested")).expect("create dirs");
        fs::create_dir_all(temp.path().join("other")).expect("create dirs");
        touch(&temp.path().join("src/a.txt"));
        touch(&temp.path().join("src/b.txt"));
        touch(&temp.path().join("src/nested/c.txt"));
        touch(&temp.path().join("other/d.md"));
        temp
    }

    fn relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|path| {
                path.strip_prefix(root)
                    .expect("result under root")
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn splits_on_semicolons_and_unescapes_doubled_ones() {
        assert_eq!(split_pattern("a;b"), vec!["a", "b"]);
        assert_eq!(split_pattern("a;;b;c"), vec!["a;b", "c"]);
        assert_eq!(split_pattern(";;x"), vec![";x"]);
        assert_eq!(split_pattern("a;"), vec!["a", ""]);
    }

    #[test]
    fn translation_handles_each_wildcard_form() {
        let rule = convert_pattern_to_regex("/a/**/b").expect("translates");
        assert!(rule.is_match("/a/b"));
        assert!(rule.is_match("/a/x/y/b"));
        assert!(!rule.is_match("/ab"));

        let rule = convert_pattern_to_regex("/a/*").expect("translates");
        assert!(rule.is_match("/a/x"));
        assert!(!rule.is_match("/a/x/y"));

        let rule = convert_pattern_to_regex("/a/?.txt").expect("translates");
        assert!(rule.is_match("/a/x.txt"));
        assert!(!rule.is_match("/a/xy.txt"));

        let rule = convert_pattern_to_regex("/a/b.txt").expect("translates");
        assert!(!rule.is_match("/a/bxtxt"));

        let rule = convert_pattern_to_regex("/a(1)/b").expect("translates");
        assert!(rule.is_match("/a(1)/b"));
    }

    #[test]
    fn trailing_separator_fails_before_any_traversal() {
        let error = legacy_find_files("/does/not/exist", "sub/;other", true, false)
            .expect_err("must reject");
        assert!(matches!(
            error,
            FilesetError::Pattern(PatternError::TrailingSeparator(ref p)) if p == "sub/"
        ));

        let error =
            legacy_find_files("/does/not/exist", "-:x/", true, false).expect_err("must reject");
        assert!(matches!(
            error,
            FilesetError::Pattern(PatternError::TrailingSeparator(_))
        ));
    }

    #[test]
    fn includes_then_excludes_over_a_real_tree() {
        let temp = sample_tree();
        let result = legacy_find_files(temp.path(), "src/**/*.txt;-:**/b.txt", true, false)
            .expect("resolves");
        assert_eq!(
            relative(temp.path(), &result),
            vec!["src/a.txt", "src/nested/c.txt"]
        );
    }

    #[test]
    fn literal_patterns_search_the_parent_directory() {
        let temp = sample_tree();
        let result = legacy_find_files(temp.path(), "src/a.txt", true, false).expect("resolves");
        assert_eq!(relative(temp.path(), &result), vec!["src/a.txt"]);
    }

    #[test]
    fn explicit_include_prefix_matches_the_bare_form() {
        let temp = sample_tree();
        let bare = legacy_find_files(temp.path(), "src/a.txt", true, false).expect("resolves");
        let prefixed =
            legacy_find_files(temp.path(), "+:src/a.txt", true, false).expect("resolves");
        assert_eq!(bare, prefixed);
    }

    #[test]
    fn directories_come_back_when_requested() {
        let temp = sample_tree();
        let result = legacy_find_files(temp.path(), "**/nested", false, true).expect("resolves");
        assert_eq!(relative(temp.path(), &result), vec!["src/nested"]);
    }

    #[test]
    fn directories_also_match_with_a_trailing_separator_appended() {
        let temp = sample_tree();
        let result = legacy_find_files(temp.path(), "**/nested/**", true, true).expect("resolves");
        assert_eq!(
            relative(temp.path(), &result),
            vec!["src/nested", "src/nested/c.txt"]
        );
    }

    #[test]
    fn unset_type_flags_default_to_files() {
        let temp = sample_tree();
        let result = legacy_find_files(temp.path(), "**", false, false).expect("resolves");
        assert_eq!(
            relative(temp.path(), &result),
            vec!["other/d.md", "src/a.txt", "src/b.txt", "src/nested/c.txt"]
        );
    }

    #[test]
    fn rooted_patterns_ignore_the_root_directory() {
        let temp = sample_tree();
        let pattern = format!("{}/src/*.txt", temp.path().display());
        let result =
            legacy_find_files(temp.path().join("other"), &pattern, true, false).expect("resolves");
        assert_eq!(
            relative(temp.path(), &result),
            vec!["src/a.txt", "src/b.txt"]
        );
    }

    #[test]
    fn semicolons_in_names_are_reachable_through_escaping() {
        let temp = tempfile::tempdir().expect("create tempdir");
        fs::create_dir_all(temp.path().join("src")).expect("create dirs");
        touch(&temp.path().join("src/a;b.txt"));
        let result =
            legacy_find_files(temp.path(), "src/a;;b.txt", true, false).expect("resolves");
        assert_eq!(relative(temp.path(), &result), vec!["src/a;b.txt"]);
    }

    #[test]
    fn empty_pattern_resolves_to_nothing() {
        let temp = sample_tree();
        let result = legacy_find_files(temp.path(), "", true, false).expect("resolves");
        assert!(result.is_empty());
    }

    #[test]
    fn relative_pattern_without_a_root_is_skipped() {
        let result = legacy_find_files("", "s*", true, false).expect("resolves");
        assert!(result.is_empty());
    }
}
