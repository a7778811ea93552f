//! # Path Module
//!
//! Compiles route templates and matches request paths against them.
//!
//! ## Template Syntax
//!
//! A template is split on `/` and each token is classified on its own:
//!
//! - `{name}` binds exactly one path segment to `name`
//! - `{name*}` binds every remaining path segment, `/`-joined, to `name`
//! - `*` matches any single segment without binding it
//! - anything else must equal the path segment exactly
//!
//! A leading `/` produces a leading empty segment on both sides, so templates
//! and paths line up position by position. Trailing slashes are ignored on both
//! sides. A query string on the last path segment is dropped before matching.
//!
//! ## Example
//!
//! ```
//! use routepath::path::compile;
//!
//! let pattern = compile("/users/{id}/posts/{postId*}");
//! assert_eq!(pattern.var_names(), ["id", "postId"]);
//!
//! let matched = pattern.match_path("/users/7/posts/2024/hello").unwrap();
//! assert_eq!(matched.value_for("id"), Some("7"));
//! assert_eq!(matched.value_for("postId"), Some("2024/hello"));
//!
//! assert!(!pattern.matches("/users"));
//! ```
//!
//! ## Compilation Never Fails
//!
//! Every string compiles. Templates that are probably mistakes, like a wildcard
//! that is not the last segment, are accepted as written and reported through
//! [`CompiledPattern::issues`] and a `warn` log event.

mod matched;
mod matcher;
mod param;
mod pattern;
mod segment;

pub use matched::{MatchedPath, ParamVec, MAX_INLINE_PARAMS};
pub use param::{ParamName, PathParam};
pub use pattern::{compile, CompiledPattern, PatternIssue, PatternIssueKind};
pub use segment::Segment;
