//! Windows path string rules: either separator accepted on input, `\` on
//! output, with UNC and drive-specifier handling.

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn is_drive_spec(path: &str) -> bool {
    has_drive_prefix(path) && (path.len() == 2 || (path.len() == 3 && path.as_bytes()[2] == b'\\'))
}

/// Reports whether `path` is rooted: a leading separator (UNC or
/// drive-less absolute) or a drive specifier, including drive-relative
/// forms like `C:name`.
#[must_use]
pub fn is_rooted(path: &str) -> bool {
    let normalized = normalize_separators(path);
    normalized.starts_with('\\') || has_drive_prefix(&normalized)
}

/// Converts `/` to `\` and collapses separator runs, keeping the leading
/// double-backslash of a UNC path.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    let converted = path.replace('/', "\\");
    let leading = converted.chars().take_while(|&c| c == '\\').count();
    let is_unc = leading >= 2 && converted.len() > leading;
    let mut out = String::with_capacity(converted.len() + 1);
    if is_unc {
        out.push('\\');
    }
    let mut prev_sep = false;
    for c in converted.chars() {
        if c == '\\' {
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

/// Joins `path` under `root` unless `path` is rooted. A bare drive root
/// (`C:`) joins without a separator so the result stays drive-relative.
#[must_use]
pub fn ensure_rooted(root: &str, path: &str) -> String {
    if is_rooted(path) {
        return path.to_string();
    }
    if has_drive_prefix(root) && root.len() == 2 {
        return format!("{root}{path}");
    }
    if root.ends_with('/') || root.ends_with('\\') {
        format!("{root}{path}")
    } else {
        format!("{root}\\{path}")
    }
}

/// Returns the parent of `path`, or an empty string when none exists.
///
/// Drive specifiers (`C:`, `C:\`), UNC machine and share roots
/// (`\\server`, `\\server\share`), the bare separator, and separator-free
/// names all have no parent. A single-component drive path parents to the
/// drive itself (`C:\tools` to `C:\`, drive-relative `C:tools` to `C:`).
#[must_use]
pub fn parent_directory(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let normalized = normalize_separators(path);
    let trimmed = trim_trailing_separators(&normalized);
    if trimmed.is_empty() || trimmed == "\\" || is_drive_spec(trimmed) {
        return String::new();
    }
    if let Some(body) = trimmed.strip_prefix("\\\\") {
        if body.matches('\\').count() < 2 {
            return String::new();
        }
        let cut = trimmed.rfind('\\').unwrap_or(0);
        return trimmed[..cut].to_string();
    }
    if has_drive_prefix(trimmed) {
        let cut = match trimmed.rfind('\\') {
            None => 2,
            Some(2) => 3,
            Some(i) => i,
        };
        return trimmed[..cut].to_string();
    }
    match trimmed.rfind('\\') {
        None => String::new(),
        Some(0) => "\\".to_string(),
        Some(i) => trimmed[..i].to_string(),
    }
}

/// Strips trailing `\` characters, leaving lone separators and drive
/// roots (`C:\`) intact. Expects separator-normalized input.
#[must_use]
pub fn trim_trailing_separators(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut end = path.len();
    while end > 1 && bytes[end - 1] == b'\\' {
        if end == 3 && bytes[1] == b':' {
            break;
        }
        end -= 1;
    }
    &path[..end]
}
