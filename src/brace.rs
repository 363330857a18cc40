//! src/brace.rs
//!
//! Brace alternation: `a{b,c}d` expands to `abd` and `acd`. Expansion is
//! purely textual and happens before any glob compilation.
//!
//! Only alternation is supported; numeric ranges (`{1..3}`) are not
//! expanded. A group without a top-level comma contributes its bare content
//! (`a{b}c` expands to `abc`), and unmatched braces leave the pattern
//! untouched so the matcher can treat them as literal text.

/// Expands every brace group in `pattern`, depth-first.
///
/// With `respect_escapes`, a backslash protects the next character from
/// being interpreted as brace syntax (POSIX patterns); on Windows the
/// backslash is a path separator and no escaping applies.
pub(crate) fn expand(pattern: &str, respect_escapes: bool) -> Vec<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let Some((start, end)) = first_group(&chars, respect_escapes) else {
        return vec![pattern.to_string()];
    };

    let prefix: String = chars[..start].iter().collect();
    let suffix: String = chars[end + 1..].iter().collect();
    let content = &chars[start + 1..end];

    let mut results = Vec::new();
    for alternative in split_alternatives(content, respect_escapes) {
        let combined = format!("{prefix}{alternative}{suffix}");
        results.extend(expand(&combined, respect_escapes));
    }
    results
}

/// Locates the first complete top-level `{...}` group.
fn first_group(chars: &[char], respect_escapes: bool) -> Option<(usize, usize)> {
    let mut depth = 0_usize;
    let mut start = None;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' if respect_escapes => i += 1,
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    if let Some(open) = start {
                        return Some((open, i));
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Splits group content on top-level commas, keeping nested groups intact.
fn split_alternatives(content: &[char], respect_escapes: bool) -> Vec<String> {
    let mut alternatives = Vec::new();
    let mut current = String::new();
    let mut depth = 0_usize;
    let mut i = 0;
    while i < content.len() {
        let c = content[i];
        match c {
            '\\' if respect_escapes => {
                current.push(c);
                if let Some(&next) = content.get(i + 1) {
                    current.push(next);
                    i += 1;
                }
            }
            '{' => {
                depth += 1;
                current.push(c);
            }
            '}' if depth > 0 => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => alternatives.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
        i += 1;
    }
    alternatives.push(current);
    alternatives
}
