//! Cache Key Module
//!
//! Derives the lookup key of a read request from its path and query string.

use std::fmt;

use axum::http::Uri;

// == Cache Key ==
/// Identity of a cacheable request, rendered as `<path>?<query>`.
///
/// The path and query are taken verbatim: keys are case-sensitive and two
/// requests share a key only when both path and query match exactly. An
/// absent query and an empty one are the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        Self(format!("{}?{}", path, query.unwrap_or("")))
    }

    pub fn from_uri(uri: &Uri) -> Self {
        Self::from_parts(uri.path(), uri.query())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
