//! src/glob.rs
//!
//! Single-pattern glob compilation. Patterns are rewritten into the
//! `globset` dialect before compilation so the option switches keep their
//! meaning: globstar confinement, literal braces, dotfile guards, and
//! basename-only matching are all resolved here.

use globset::{GlobBuilder, GlobMatcher};

use crate::error::PatternError;
use crate::options::MatchOptions;

/// A single pattern ready to test candidates.
///
/// Candidates must be separator-normalized (`/` only) before matching; see
/// [`normalize_text_separators`].
#[derive(Debug)]
pub(crate) struct CompiledPattern {
    matchers: Vec<GlobMatcher>,
    original: String,
    basename_only: bool,
    nonull: bool,
}

impl CompiledPattern {
    /// Tests a separator-normalized candidate.
    pub(crate) fn is_match(&self, candidate: &str) -> bool {
        let subject = if self.basename_only {
            candidate.rsplit('/').next().unwrap_or(candidate)
        } else {
            candidate
        };
        self.matchers.iter().any(|matcher| matcher.is_match(subject))
    }

    /// The pattern text this matcher was compiled from.
    pub(crate) fn pattern(&self) -> &str {
        &self.original
    }

    /// Whether a zero-hit outcome should report the pattern itself.
    pub(crate) fn nonull(&self) -> bool {
        self.nonull
    }
}

/// Normalizes separators in pattern or candidate text: on Windows
/// backslashes become forward slashes, elsewhere the text is unchanged
/// (a POSIX backslash is an escape, not a separator).
pub(crate) fn normalize_text_separators(text: &str) -> String {
    if cfg!(windows) {
        text.replace('\\', "/")
    } else {
        text.to_string()
    }
}

/// Compiles one pattern under the given options.
pub(crate) fn compile(
    pattern: &str,
    options: &MatchOptions,
) -> Result<CompiledPattern, PatternError> {
    let normalized = normalize_text_separators(pattern);
    let basename_only = options.match_base && !normalized.contains('/');
    let mut matchers = Vec::new();
    for text in rewrite(&normalized, options) {
        let glob = GlobBuilder::new(&text)
            .literal_separator(true)
            .backslash_escape(cfg!(not(windows)))
            .case_insensitive(options.nocase)
            .build()?;
        matchers.push(glob.compile_matcher());
    }
    Ok(CompiledPattern {
        matchers,
        original: pattern.to_string(),
        basename_only,
        nonull: options.nonull,
    })
}

/// Rewrites a separator-normalized pattern into one or two `globset`
/// pattern texts.
///
/// Two texts come back for a pattern ending in a `**` segment: the dialect
/// here lets a trailing globstar match zero segments, so `a/**` must also
/// match `a` itself, which `globset` expresses only as a second pattern.
fn rewrite(pattern: &str, options: &MatchOptions) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    for raw in pattern.split('/') {
        if raw == "**" && !options.noglobstar {
            // Adjacent globstars are redundant.
            if segments.last().map(String::as_str) == Some("**") {
                continue;
            }
            segments.push("**".to_string());
            continue;
        }
        let mut scanned = scan_segment(raw);
        if !options.dot {
            scanned = guard_leading_dot(scanned);
        }
        segments.push(scanned);
    }

    let joined = segments.join("/");
    if segments.len() > 1 && segments.last().map(String::as_str) == Some("**") {
        let base = joined.strip_suffix("/**").unwrap_or(&joined);
        let base = if base.is_empty() { "/" } else { base };
        return vec![base.to_string(), joined];
    }
    vec![joined]
}

/// Rewrites one path segment: collapses star runs (only a lone `**`
/// segment is a valid recursive wildcard downstream), escapes braces left
/// over after expansion, and turns an unclosed `[` into literal text.
fn scan_segment(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' if cfg!(not(windows)) => {
                out.push('\\');
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '*' => {
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
                out.push('*');
            }
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Finds the closing `]` of a character class, honoring a leading `!`/`^`
/// and a literal `]` in first position.
pub(crate) fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut j = open + 1;
    if let Some(&c) = chars.get(j) {
        if c == '!' || c == '^' {
            j += 1;
        }
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() {
        match chars[j] {
            '\\' if cfg!(not(windows)) => j += 1,
            ']' => return Some(j),
            _ => {}
        }
        j += 1;
    }
    None
}

/// Applies the dotfile guard to a segment starting with `*` or `?`: the
/// first character of the matched name must not be a dot.
///
/// `*REST` needs a zero-width star branch (`REST` alone) to stay reachable;
/// that branch is dropped when `REST` opens with a literal dot (the guard
/// would reject the match anyway) or would break the alternate syntax.
fn guard_leading_dot(segment: String) -> String {
    if let Some(rest) = segment.strip_prefix('*') {
        if rest.is_empty() {
            return "[!.]*".to_string();
        }
        if rest.starts_with('.') || rest.contains([',', '{', '}']) {
            return format!("[!.]*{rest}");
        }
        return format!("{{{rest},[!.]*{rest}}}");
    }
    if let Some(rest) = segment.strip_prefix('?') {
        return format!("[!.]{rest}");
    }
    segment
}
