use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::param::ParamName;
use super::segment::{split_segments, Segment};

/// Kind of problem found while compiling a template.
///
/// None of these stop compilation; the template still compiles and matches
/// according to the usual rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternIssueKind {
    /// A `{name*}` segment followed by further segments. It absorbs path
    /// segments only until the next descriptor is reached.
    NonTrailingWildcard,
    /// `{}` or `{*}`.
    EmptyVariableName,
    /// The same variable name appears more than once.
    DuplicateVariable,
    /// A token with `{` or `}` that is not a well-formed variable; it is
    /// matched as literal text.
    UnbalancedBrace,
}

impl PatternIssueKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternIssueKind::NonTrailingWildcard => "non_trailing_wildcard",
            PatternIssueKind::EmptyVariableName => "empty_variable_name",
            PatternIssueKind::DuplicateVariable => "duplicate_variable",
            PatternIssueKind::UnbalancedBrace => "unbalanced_brace",
        }
    }
}

impl fmt::Display for PatternIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compile-time diagnostic attached to a [`CompiledPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternIssue {
    /// Index of the offending segment in [`CompiledPattern::segments`]
    pub segment: usize,
    pub kind: PatternIssueKind,
    /// Human-readable description of the problem
    pub message: String,
}

impl PatternIssue {
    fn new(segment: usize, kind: PatternIssueKind, message: impl Into<String>) -> Self {
        Self {
            segment,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for PatternIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment {}: [{}] {}", self.segment, self.kind, self.message)
    }
}

/// A route template compiled into segment descriptors.
///
/// Built once at registration time and never mutated; matching allocates its
/// own working state, so one pattern can serve any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    raw: String,
    segments: Vec<Segment>,
    issues: Vec<PatternIssue>,
}

/// Compile a route template. Shorthand for [`CompiledPattern::new`].
#[must_use]
pub fn compile(template: &str) -> CompiledPattern {
    CompiledPattern::new(template)
}

impl CompiledPattern {
    /// Compile a route template such as `/users/{id}/files/{path*}`.
    ///
    /// Accepts any string. Suspicious templates are compiled anyway; each problem
    /// is logged at `warn` and recorded in [`issues`](Self::issues).
    #[must_use]
    pub fn new(template: &str) -> Self {
        let segments: Vec<Segment> = split_segments(template)
            .into_iter()
            .map(Segment::parse)
            .collect();
        let issues = lint_segments(&segments);
        for issue in &issues {
            warn!(
                template = template,
                segment = issue.segment,
                kind = issue.kind.as_str(),
                "{}",
                issue.message
            );
        }
        Self {
            raw: template.to_string(),
            segments,
            issues,
        }
    }

    /// The template this pattern was compiled from.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Variable names, plain and wildcard, in declaration order.
    #[must_use]
    pub fn var_names(&self) -> Vec<ParamName> {
        self.segments
            .iter()
            .filter_map(Segment::param_name)
            .cloned()
            .collect()
    }

    /// Diagnostics recorded during compilation.
    #[inline]
    #[must_use]
    pub fn issues(&self) -> &[PatternIssue] {
        &self.issues
    }

    /// Whether the last segment is a `{name*}` wildcard.
    #[must_use]
    pub fn has_trailing_wildcard(&self) -> bool {
        self.segments.last().is_some_and(Segment::has_wildcard)
    }
}

impl FromStr for CompiledPattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for CompiledPattern {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn lint_segments(segments: &[Segment]) -> Vec<PatternIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let last = segments.len().saturating_sub(1);

    for (index, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                if text.contains('{') || text.contains('}') {
                    issues.push(PatternIssue::new(
                        index,
                        PatternIssueKind::UnbalancedBrace,
                        format!("'{text}' is not a well-formed variable and matches literally"),
                    ));
                }
            }
            Segment::Variable(name) | Segment::Wildcard(name) => {
                if name.as_str().is_empty() {
                    issues.push(PatternIssue::new(
                        index,
                        PatternIssueKind::EmptyVariableName,
                        "variable has an empty name",
                    ));
                } else if !seen.insert(name.as_str()) {
                    issues.push(PatternIssue::new(
                        index,
                        PatternIssueKind::DuplicateVariable,
                        format!("variable '{name}' is declared more than once"),
                    ));
                }
                if segment.has_wildcard() && index != last {
                    issues.push(PatternIssue::new(
                        index,
                        PatternIssueKind::NonTrailingWildcard,
                        format!(
                            "wildcard '{name}' is not the last segment and only captures until the next segment"
                        ),
                    ));
                }
            }
        }
    }

    issues
}
