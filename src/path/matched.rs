use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

use super::param::PathParam;

/// Maximum number of bound parameters before heap allocation.
/// Most REST routes have ≤4 variables (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for a single match.
pub type ParamVec = SmallVec<[PathParam; MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path against a compiled pattern.
///
/// Holds the raw path exactly as it was passed in (query string included) and
/// the bound parameters in the order they were encountered. Built fresh for each
/// match and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedPath {
    raw: String,
    params: ParamVec,
}

impl MatchedPath {
    pub(crate) fn new(raw: impl Into<String>, params: ParamVec) -> Self {
        Self {
            raw: raw.into(),
            params,
        }
    }

    /// The request path this match was produced from.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Bound parameters in match order.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[PathParam] {
        &self.params
    }

    /// Get a bound value by parameter name
    ///
    /// Uses "last write wins" semantics: if a template declares the same name
    /// twice (e.g., `/org/{id}/user/{id}`), returns the later binding.
    #[inline]
    #[must_use]
    pub fn value_for(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|p| p.name() == name)
            .map(PathParam::value)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Convert params to a HashMap
    /// Note: This allocates - use value_for() in hot paths instead
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params
            .iter()
            .map(|p| (p.name().to_string(), p.value().to_string()))
            .collect()
    }
}

impl fmt::Display for MatchedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
