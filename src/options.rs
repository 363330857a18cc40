//! src/options.rs
//!
//! The option bag controlling pattern interpretation and matching.

/// Switches that alter how patterns are parsed and matched.
///
/// The defaults follow the conventional glob dialect: dotfiles are matched,
/// braces, globstars and negation are enabled, and case sensitivity follows
/// the host platform (insensitive on Windows).
///
/// Options compose with builder-style setters:
///
/// ```
/// use fileset::MatchOptions;
///
/// let options = MatchOptions::default().with_nocase(true).with_dot(false);
/// assert!(options.nocase);
/// assert!(!options.dot);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Treat `{a,b}` alternation as literal text instead of expanding it.
    pub nobrace: bool,
    /// Treat a `**` segment as an ordinary `*` confined to one segment.
    pub noglobstar: bool,
    /// Allow wildcards to match names that start with a dot.
    pub dot: bool,
    /// Treats extended `@(...)`-style openers as plain text when deriving
    /// find roots. Matching itself never interprets them, so the switch
    /// only changes how deep a traversal starts.
    pub noext: bool,
    /// Compare patterns and candidates case-insensitively.
    pub nocase: bool,
    /// When a pattern matches nothing, report the pattern text itself as
    /// the sole hit.
    pub nonull: bool,
    /// Match a separator-free, unrooted pattern against basenames only.
    pub match_base: bool,
    /// Treat patterns starting with `#` as patterns instead of comments.
    pub nocomment: bool,
    /// Treat leading `!` as literal characters instead of negation.
    pub nonegate: bool,
    /// Invert the include/exclude sense derived from leading `!` counting.
    pub flip_negate: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            nobrace: false,
            noglobstar: false,
            dot: true,
            noext: false,
            nocase: cfg!(windows),
            nonull: false,
            match_base: false,
            nocomment: false,
            nonegate: false,
            flip_negate: false,
        }
    }
}

impl MatchOptions {
    /// Sets whether brace alternation is treated literally.
    #[must_use]
    pub const fn with_nobrace(mut self, yes: bool) -> Self {
        self.nobrace = yes;
        self
    }

    /// Sets whether `**` segments lose their multi-segment meaning.
    #[must_use]
    pub const fn with_noglobstar(mut self, yes: bool) -> Self {
        self.noglobstar = yes;
        self
    }

    /// Sets whether wildcards may match dotfiles.
    #[must_use]
    pub const fn with_dot(mut self, yes: bool) -> Self {
        self.dot = yes;
        self
    }

    /// Sets the extended-glob compatibility switch.
    #[must_use]
    pub const fn with_noext(mut self, yes: bool) -> Self {
        self.noext = yes;
        self
    }

    /// Sets case-insensitive matching.
    #[must_use]
    pub const fn with_nocase(mut self, yes: bool) -> Self {
        self.nocase = yes;
        self
    }

    /// Sets whether unmatched patterns report themselves as hits.
    #[must_use]
    pub const fn with_nonull(mut self, yes: bool) -> Self {
        self.nonull = yes;
        self
    }

    /// Sets basename-only matching for separator-free patterns.
    #[must_use]
    pub const fn with_match_base(mut self, yes: bool) -> Self {
        self.match_base = yes;
        self
    }

    /// Sets whether `#` patterns are processed instead of skipped.
    #[must_use]
    pub const fn with_nocomment(mut self, yes: bool) -> Self {
        self.nocomment = yes;
        self
    }

    /// Sets whether leading `!` characters are literal.
    #[must_use]
    pub const fn with_nonegate(mut self, yes: bool) -> Self {
        self.nonegate = yes;
        self
    }

    /// Sets whether the include/exclude sense of every pattern is flipped.
    #[must_use]
    pub const fn with_flip_negate(mut self, yes: bool) -> Self {
        self.flip_negate = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dotfiles_and_follow_host_case_rules() {
        let options = MatchOptions::default();
        assert!(options.dot);
        assert_eq!(options.nocase, cfg!(windows));
        assert!(!options.nobrace);
        assert!(!options.noglobstar);
        assert!(!options.noext);
        assert!(!options.nonull);
        assert!(!options.match_base);
        assert!(!options.nocomment);
        assert!(!options.nonegate);
        assert!(!options.flip_negate);
    }

    #[test]
    fn setters_compose() {
        let options = MatchOptions::default()
            .with_nobrace(true)
            .with_match_base(true)
            .with_dot(false);
        assert!(options.nobrace);
        assert!(options.match_base);
        assert!(!options.dot);
        assert!(!options.nonegate);
    }
}
