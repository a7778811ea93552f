//! Segment-by-segment matching of request paths against a [`CompiledPattern`].
//!
//! The scan walks template segments and path tokens side by side, one index at a
//! time, up to the longer of the two. Besides the bound parameters it carries two
//! pieces of state:
//!
//! - `wildcard`: the name of the `{name*}` segment most recently consulted, if the
//!   most recently consulted segment was a wildcard. While set, every path token
//!   is appended to `captured`, whatever segment sits at that index.
//! - `captured`: the `/`-joined text absorbed by the wildcard.
//!
//! The wildcard state follows the last segment *consulted*, not the last segment
//! of the template. A `{rest*}` in the middle of a template therefore absorbs
//! tokens only until the next segment index is reached, and once the template
//! runs out the last consulted segment stays in effect.

use super::matched::{MatchedPath, ParamVec};
use super::param::ParamName;
use super::pattern::CompiledPattern;
use super::segment::{split_segments, Segment, Tokens};

/// Truncate the final token at its first `?`. Interior tokens are never inspected.
fn strip_query_string<'a>(tokens: &mut Tokens<'a>) {
    if let Some(last) = tokens.last_mut() {
        let token: &'a str = *last;
        if let Some(index) = token.find('?') {
            *last = &token[..index];
        }
    }
}

impl CompiledPattern {
    /// Match a request path, returning the bound parameters on success.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` never matches. A miss is an
    /// ordinary outcome and is reported as `None`.
    ///
    /// ```
    /// use routepath::path::compile;
    ///
    /// let pattern = compile("/users/{id}/files/{path*}");
    /// let matched = pattern.match_path("/users/42/files/a/b.txt?dl=1").unwrap();
    /// assert_eq!(matched.value_for("id"), Some("42"));
    /// assert_eq!(matched.value_for("path"), Some("a/b.txt"));
    /// assert!(pattern.match_path(None).is_none());
    /// ```
    #[must_use]
    pub fn match_path<'a>(&self, path: impl Into<Option<&'a str>>) -> Option<MatchedPath> {
        let path = path.into()?;
        let mut tokens = split_segments(path);
        strip_query_string(&mut tokens);

        let segments = self.segments();
        let limit = segments.len().max(tokens.len());

        let mut params = ParamVec::new();
        let mut matches = true;
        let mut wildcard: Option<&ParamName> = None;
        let mut captured = String::new();

        for x in 0..limit {
            let segment = segments.get(x);
            let token = tokens.get(x).copied();

            if wildcard.is_some() {
                if let Some(token) = token {
                    if !token.is_empty() {
                        captured.push('/');
                    }
                    captured.push_str(token);
                }
            } else {
                match segment {
                    // Path is longer than the template and nothing absorbs the rest.
                    None => {
                        matches = false;
                        break;
                    }
                    Some(Segment::Wildcard(_)) => {
                        if let Some(token) = token {
                            captured.push_str(token);
                        }
                    }
                    Some(Segment::Variable(name)) => match token {
                        Some(token) => params.push(name.with_value(token)),
                        None => matches = false,
                    },
                    Some(Segment::Literal(text)) => {
                        if !Segment::accepts_literal(text, token) {
                            matches = false;
                        }
                    }
                }
            }

            if let Some(segment) = segment {
                wildcard = match segment {
                    Segment::Wildcard(name) => Some(name),
                    _ => None,
                };
            }
        }

        if !matches {
            return None;
        }

        if let Some(name) = wildcard {
            if !captured.is_empty() {
                params.push(name.with_value(captured));
            }
        }

        Some(MatchedPath::new(path, params))
    }

    /// Whether the path matches. Same algorithm as [`match_path`](Self::match_path).
    #[must_use]
    pub fn matches<'a>(&self, path: impl Into<Option<&'a str>>) -> bool {
        self.match_path(path).is_some()
    }
}
