//! Path normalization and wildcard detection.
//!
//! The same normalization runs at registration and at lookup, so stored keys
//! and request paths compare directly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any `{...}` group anywhere in a path (non-greedy, content may be empty)
#[allow(clippy::expect_used)]
static WILDCARD_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("Failed to compile wildcard regex"));

/// Canonical form of a path: `/` is kept, anything else loses its trailing slashes
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    if path == "/" {
        path
    } else {
        path.trim_end_matches('/')
    }
}

/// True when the path contains at least one `{...}` group
#[must_use]
pub fn is_dynamic(path: &str) -> bool {
    WILDCARD_GROUP.is_match(path)
}

/// True when the whole segment is wrapped in braces (`{id}`, `{0}`, `{}`)
///
/// The label between the braces is never interpreted.
#[inline]
#[must_use]
pub fn is_wildcard_segment(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
}

/// Number of wildcard segments in a template
#[must_use]
pub fn wildcard_count(template: &str) -> usize {
    template.split('/').filter(|s| is_wildcard_segment(s)).count()
}
