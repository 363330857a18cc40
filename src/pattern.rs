//! src/pattern.rs
//!
//! String-level pattern pre-analysis: negation counting, comment detection,
//! and rooting a pattern against a directory whose own characters must not
//! be interpreted as glob syntax.

use crate::options::MatchOptions;

/// A pattern with its negation prefix resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifiedPattern {
    /// Whether matches add to the result set (include) or remove from it.
    pub(crate) is_include: bool,
    /// The pattern text with the leading `!` run stripped.
    pub(crate) pattern: String,
}

/// Resolves the leading `!` run of a pattern into include/exclude sense.
///
/// An even count keeps the pattern an include, an odd count makes it an
/// exclude, and `flip_negate` inverts whichever sense was derived. With
/// `nonegate` the prefix is left in place and counts as zero.
pub(crate) fn classify(pattern: &str, options: &MatchOptions) -> ClassifiedPattern {
    let mut rest = pattern;
    let mut count = 0_usize;
    if !options.nonegate {
        while let Some(stripped) = rest.strip_prefix('!') {
            rest = stripped;
            count += 1;
        }
    }
    let is_include = if count % 2 == 0 {
        !options.flip_negate
    } else {
        options.flip_negate
    };
    ClassifiedPattern {
        is_include,
        pattern: rest.to_string(),
    }
}

/// Reports whether the pattern is a comment and should be skipped.
pub(crate) fn is_comment(pattern: &str, options: &MatchOptions) -> bool {
    !options.nocomment && pattern.starts_with('#')
}

/// Reports whether the pattern contains a path separator.
///
/// Forward slashes always separate; backslashes additionally separate on
/// Windows.
pub(crate) fn contains_separator(pattern: &str) -> bool {
    pattern.contains('/') || (cfg!(windows) && pattern.contains('\\'))
}

/// Reports whether the pattern should match basenames only: `match_base`
/// is set and the pattern is unrooted and separator-free.
pub(crate) fn is_basename_only(pattern: &str, options: &MatchOptions) -> bool {
    options.match_base && !pathutil::is_rooted(pattern) && !contains_separator(pattern)
}

/// Roots `pattern` against `root`, escaping any glob syntax in the root.
///
/// An already rooted pattern is returned unchanged.
pub(crate) fn ensure_pattern_rooted(root: &str, pattern: &str) -> String {
    pathutil::ensure_rooted(&escape_glob_root(root), pattern)
}

/// Escapes glob metacharacters in a directory path so the path matches
/// itself literally when prepended to a pattern.
///
/// `[` is escaped only when a `]` follows within the same slash-delimited
/// run, mirroring how the matcher classifies an unclosed class as literal
/// text already.
pub(crate) fn escape_glob_root(root: &str) -> String {
    let normalized = pathutil::normalize_separators(root);
    let chars: Vec<char> = normalized.chars().collect();
    let mut escaped = String::with_capacity(normalized.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' if cfg!(not(windows)) => escaped.push_str("\\\\"),
            '[' if closes_within_run(&chars[i + 1..]) => escaped.push_str("[[]"),
            '?' => escaped.push_str("[?]"),
            '*' => escaped.push_str("[*]"),
            '+' | '@' | '!' if chars.get(i + 1) == Some(&'(') => {
                escaped.push('[');
                escaped.push(c);
                escaped.push_str("](");
                i += 1;
            }
            _ => escaped.push(c),
        }
        i += 1;
    }
    escaped
}

/// True when a `]` appears after at least one character, with no `/` in
/// between.
fn closes_within_run(rest: &[char]) -> bool {
    let mut seen = false;
    for &c in rest {
        match c {
            '/' => return false,
            ']' => return seen,
            _ => seen = true,
        }
    }
    false
}
