use smallvec::SmallVec;
use std::fmt;

use super::param::ParamName;

/// Tokens of a split template or request path.
/// Paths deeper than 16 segments spill to the heap.
pub(crate) type Tokens<'a> = SmallVec<[&'a str; 16]>;

/// Split on `/` the way templates and request paths are both tokenized.
///
/// - a string without any `/` is a single token, even when empty;
/// - a leading `/` yields a leading empty token, which is kept so template and
///   path tokens line up positionally;
/// - trailing empty tokens are dropped, so `/files/` splits like `/files` and `/`
///   yields no tokens at all.
pub(crate) fn split_segments(s: &str) -> Tokens<'_> {
    let mut tokens: Tokens<'_> = s.split('/').collect();
    if tokens.len() > 1 {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }
    tokens
}

/// One compiled segment of a route template.
///
/// | template token | segment                  |
/// |----------------|--------------------------|
/// | `users`        | `Literal("users")`       |
/// | `*`            | `Literal("*")`, matches any single segment |
/// | `{id}`         | `Variable(id)`           |
/// | `{rest*}`      | `Wildcard(rest)`, captures every remaining segment |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Matched by exact text equality, or anything when the text is `*`.
    Literal(String),
    /// Binds exactly one path segment.
    Variable(ParamName),
    /// Greedily binds the rest of the path, `/`-joined.
    Wildcard(ParamName),
}

impl Segment {
    /// Classify a single template token. Never fails: anything that is not
    /// `{name}` or `{name*}` is a literal.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if let Some(inner) = token.strip_prefix('{') {
            if let Some(name) = inner.strip_suffix("*}") {
                return Segment::Wildcard(ParamName::from(name));
            }
            if let Some(name) = inner.strip_suffix('}') {
                return Segment::Variable(ParamName::from(name));
            }
        }
        Segment::Literal(token.to_string())
    }

    /// Literal text for literals, parameter name for variables.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Variable(name) | Segment::Wildcard(name) => name.as_str(),
        }
    }

    /// The parameter name, if this segment binds one.
    #[must_use]
    pub fn param_name(&self) -> Option<&ParamName> {
        match self {
            Segment::Literal(_) => None,
            Segment::Variable(name) | Segment::Wildcard(name) => Some(name),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_variable(&self) -> bool {
        !matches!(self, Segment::Literal(_))
    }

    #[inline]
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }

    /// Whether a literal segment accepts the given path token.
    #[inline]
    pub(crate) fn accepts_literal(text: &str, token: Option<&str>) -> bool {
        text == "*" || token == Some(text)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Variable(name) => write!(f, "{{{name}}}"),
            Segment::Wildcard(name) => write!(f, "{{{name}*}}"),
        }
    }
}
