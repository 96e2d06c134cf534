//! Path normalisation and pattern matching.
//!
//! # Responsibilities
//! - Normalise a raw location into a comparable path
//! - Strip the history-mode base prefix
//! - Match exact literal paths and the catch-all wildcard
//!
//! # Design Decisions
//! - Matching is ASCII case-insensitive
//! - Trailing slash is ignored (`/about/` == `/about`)
//! - Query string and fragment are stripped, never interpreted
//! - No params, no regex: a pattern is a literal path or `*`

use std::fmt;

/// Literal used for the catch-all pattern.
pub const WILDCARD: &str = "*";

/// A route path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPattern {
    /// Exact literal path. Compared in normalised form, so `Exact("/about/")`
    /// and `Exact("/about")` match the same locations.
    Exact(String),
    /// Matches any path not matched by an exact route.
    Wildcard,
}

impl PathPattern {
    /// Parse a pattern as written in a route declaration.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let raw = raw.trim();
        if raw == WILDCARD {
            return Ok(PathPattern::Wildcard);
        }
        if !raw.starts_with('/') {
            return Err(PatternError::NotAbsolute(raw.to_string()));
        }
        if raw.contains('*') || raw.split('/').any(|seg| seg.starts_with(':')) {
            return Err(PatternError::Unsupported(raw.to_string()));
        }
        if raw.contains('?') || raw.contains('#') {
            return Err(PatternError::Unsupported(raw.to_string()));
        }
        Ok(PathPattern::Exact(normalize_path(raw)))
    }

    /// Returns true if this pattern matches an already normalised path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(expected) => normalize_path(expected).eq_ignore_ascii_case(path),
            PathPattern::Wildcard => true,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PathPattern::Wildcard)
    }

    /// Key used for exact lookups.
    pub(crate) fn lookup_key(&self) -> Option<String> {
        match self {
            PathPattern::Exact(path) => Some(normalize_path(path).to_ascii_lowercase()),
            PathPattern::Wildcard => None,
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Exact(path) => f.write_str(path),
            PathPattern::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// Rejected route pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("path '{0}' must start with '/' or be '*'")]
    NotAbsolute(String),

    #[error("path '{0}' uses an unsupported pattern (only literal paths and '*' are allowed)")]
    Unsupported(String),
}

/// Normalise a location for matching.
///
/// Drops the query string and fragment, guarantees a leading `/`, and removes
/// trailing slashes except on the root.
pub fn normalize_path(location: &str) -> String {
    let end = location.find(&['?', '#'][..]).unwrap_or(location.len());
    let path = location[..end].trim();

    let mut normalized = String::with_capacity(path.len() + 1);
    if !path.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(path);

    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// Normalise a configured base prefix to `/` or `/segment` form.
pub fn normalize_base(base: &str) -> String {
    normalize_path(base)
}

/// Strip the base prefix from a location.
///
/// The prefix only counts on a segment boundary; locations outside the base
/// are returned unchanged (normalised).
pub fn strip_base(base: &str, location: &str) -> String {
    let path = normalize_path(location);
    if base == "/" {
        return path;
    }

    let matches_prefix = path
        .get(..base.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(base));
    if !matches_prefix {
        return path;
    }

    match &path[base.len()..] {
        "" => "/".to_string(),
        rest if rest.starts_with('/') => rest.to_string(),
        _ => path,
    }
}

/// Join a base prefix and a route path into an href.
pub fn join_base(base: &str, path: &str) -> String {
    if base == "/" {
        return path.to_string();
    }
    if path == "/" {
        return format!("{}/", base);
    }
    format!("{}{}", base, path)
}
