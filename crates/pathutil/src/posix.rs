//! POSIX path string rules: `/` separates, `\` is an ordinary character.

/// Reports whether `path` begins with `/` after separator normalization.
#[must_use]
pub fn is_rooted(path: &str) -> bool {
    normalize_separators(path).starts_with('/')
}

/// Collapses runs of `/` into a single separator.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_sep = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_sep {
                out.push(c);
            }
            prev_sep = true;
        } else {
            out.push(c);
            prev_sep = false;
        }
    }
    out
}

/// Joins `path` under `root` with a single `/` unless `path` is rooted.
#[must_use]
pub fn ensure_rooted(root: &str, path: &str) -> String {
    if is_rooted(path) {
        return path.to_string();
    }
    if root.ends_with('/') {
        format!("{root}{path}")
    } else {
        format!("{root}/{path}")
    }
}

/// Returns the parent of `path`, or an empty string when `path` is the
/// root, empty, or a separator-free name.
#[must_use]
pub fn parent_directory(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let normalized = normalize_separators(path);
    let trimmed = trim_trailing_separators(&normalized);
    if trimmed == "/" {
        return String::new();
    }
    match trimmed.rfind('/') {
        None => String::new(),
        Some(0) => "/".to_string(),
        Some(i) => trimmed[..i].to_string(),
    }
}

/// Strips trailing `/` characters, leaving a lone `/` intact.
#[must_use]
pub fn trim_trailing_separators(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut end = path.len();
    while end > 1 && bytes[end - 1] == b'/' {
        end -= 1;
    }
    &path[..end]
}
