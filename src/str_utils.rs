/// Utility functions for fast script pre-scans
use regex::Regex;

// Regex compiled once as a lazy static for performance
static EXPLAINABLE_KEYWORD_REGEX: once_cell::sync::Lazy<Regex> = once_cell::sync::Lazy::new(|| {
    Regex::new(r"(?i)\b(select|update|delete|insert)\b").unwrap()
});

/// Check whether a script mentions any explainable keyword at all
///
/// Scripts without one cannot produce spans and can skip scanning entirely.
/// A quoted or commented occurrence still returns true; that only costs the
/// full scan, which then finds nothing.
pub fn contains_explainable_keyword(script: &str) -> bool {
    EXPLAINABLE_KEYWORD_REGEX.is_match(script)
}
