//! Parameter names and bound path parameters.

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier of a route variable, e.g. `id` in `/users/{id}`.
///
/// Names are created once when a template is compiled and then shared by every
/// match result, so the backing string is an `Arc<str>`: cloning a name is an
/// atomic increment rather than a copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamName(Arc<str>);

impl ParamName {
    /// Create a parameter name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bind this name to a value, producing a [`PathParam`].
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> PathParam {
        PathParam {
            name: self.clone(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParamName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ParamName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ParamName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ParamName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for ParamName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A variable name bound to the path text it matched.
///
/// Only produced by a successful match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathParam {
    name: ParamName,
    value: String,
}

impl PathParam {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &ParamName {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into `(name, value)`.
    #[must_use]
    pub fn into_parts(self) -> (ParamName, String) {
        (self.name, self.value)
    }
}

impl fmt::Display for PathParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
