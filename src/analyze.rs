//! src/analyze.rs
//!
//! Derives the traversal plan for one include pattern: the deepest
//! directory that can be walked without missing matches, and whether the
//! pattern is literal enough to replace the walk with a single stat.

use crate::glob;
use crate::options::MatchOptions;
use crate::pattern;

/// The traversal plan for a single include pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PatternAnalysis {
    /// The pattern to match traversal output against, rooted against the
    /// default root when the input was relative.
    pub(crate) adjusted_pattern: String,
    /// Directory to traverse. Empty when the pattern is rooted but has no
    /// literal lead segment at all (nothing sensible to walk).
    pub(crate) find_root: String,
    /// True when every segment is literal, so a single existence probe of
    /// `find_root` replaces the traversal.
    pub(crate) stat_only: bool,
}

/// Computes the find root of `pattern` from its literal lead segments.
///
/// Basename-only patterns under `match_base` cannot narrow the traversal:
/// they may match anywhere below the default root, so the root is used
/// as-is. For everything else the pattern is split on separators and the
/// run of leading wildcard-free segments, unescaped, becomes the directory
/// to search.
///
/// Braces must already be expanded; lone leftovers are literal text here,
/// exactly as the matcher treats them.
pub(crate) fn analyze(
    default_root: &str,
    pattern: &str,
    options: &MatchOptions,
) -> PatternAnalysis {
    debug_assert!(!pattern.trim().is_empty(), "pattern must be non-empty");
    debug_assert!(options.nobrace, "braces must be expanded before analysis");

    if pattern::is_basename_only(pattern, options) {
        return PatternAnalysis {
            adjusted_pattern: pattern.to_string(),
            find_root: default_root.to_string(),
            stat_only: false,
        };
    }

    let converted = glob::normalize_text_separators(pattern);
    let rooted = pathutil::is_rooted(pattern);

    let mut literal: Vec<String> = Vec::new();
    let mut in_prefix = true;
    let mut stat_only = true;
    for segment in converted.split('/') {
        if is_literal_segment(segment, options) {
            if in_prefix {
                literal.push(unescape_segment(segment));
            }
        } else {
            in_prefix = false;
            stat_only = false;
        }
    }

    let joined = literal.join("/");
    let find_root = if rooted {
        joined
    } else if joined.is_empty() {
        default_root.to_string()
    } else {
        pathutil::ensure_rooted(default_root, &joined)
    };
    let find_root =
        pathutil::trim_trailing_separators(&pathutil::normalize_separators(&find_root)).to_string();

    let adjusted_pattern = if rooted {
        pattern.to_string()
    } else {
        pattern::ensure_pattern_rooted(default_root, pattern)
    };

    PatternAnalysis {
        adjusted_pattern,
        find_root,
        stat_only,
    }
}

/// Whether a segment contains no unescaped wildcard: `*`, `?`, a closed
/// character class, or an extglob opener (unless `noext`). An unclosed `[`
/// is literal, matching how the matcher compiles it.
fn is_literal_segment(segment: &str, options: &MatchOptions) -> bool {
    let chars: Vec<char> = segment.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' if cfg!(not(windows)) => i += 1,
            '*' | '?' => return false,
            '[' if glob::class_end(&chars, i).is_some() => return false,
            '+' | '@' | '!' if !options.noext && chars.get(i + 1) == Some(&'(') => return false,
            _ => {}
        }
        i += 1;
    }
    true
}

/// Strips glob escapes so the segment names the path as it exists on disk.
/// Windows has no escape character in patterns.
fn unescape_segment(segment: &str) -> String {
    if cfg!(windows) {
        return segment.to_string();
    }
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
