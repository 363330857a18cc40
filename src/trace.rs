//! src/trace.rs
//!
//! Structured diagnostics for pattern resolution. Events are purely
//! observational; no subscriber is installed by this crate.

/// Target for matching-pipeline events.
pub(crate) const MATCH_TARGET: &str = "fileset::match";

/// Target for legacy-translator events.
pub(crate) const LEGACY_TARGET: &str = "fileset::legacy";

#[inline]
pub(crate) fn pattern_classified(pattern: &str, is_include: bool) {
    tracing::debug!(
        target: MATCH_TARGET,
        pattern = %pattern,
        is_include,
        "pattern classified"
    );
}

#[inline]
pub(crate) fn find_plan(pattern: &str, find_root: &str, stat_only: bool) {
    tracing::debug!(
        target: MATCH_TARGET,
        pattern = %pattern,
        find_root = %find_root,
        stat_only,
        "derived find root"
    );
}

#[inline]
pub(crate) fn pattern_hits(pattern: &str, hits: usize) {
    tracing::debug!(
        target: MATCH_TARGET,
        pattern = %pattern,
        hits,
        "pattern applied"
    );
}

#[inline]
pub(crate) fn resolved(operation: &'static str, count: usize) {
    tracing::debug!(
        target: MATCH_TARGET,
        operation,
        count,
        "resolution finished"
    );
}

#[inline]
pub(crate) fn legacy_rule(pattern: &str, is_include: bool) {
    tracing::debug!(
        target: LEGACY_TARGET,
        pattern = %pattern,
        is_include,
        "legacy sub-pattern classified"
    );
}

#[inline]
pub(crate) fn legacy_translated(pattern: &str, regex: &str) {
    tracing::trace!(
        target: LEGACY_TARGET,
        pattern = %pattern,
        regex = %regex,
        "legacy pattern translated"
    );
}
