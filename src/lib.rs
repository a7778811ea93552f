//! # routepath
//!
//! **routepath** compiles route templates such as `/users/{id}/posts/{postId*}`
//! and matches request paths against them, extracting named variables.
//!
//! ## Architecture
//!
//! - **[`path`]** - Template compiler, segment-by-segment matcher and the match
//!   data model (`ParamName`, `PathParam`, `MatchedPath`)
//! - **[`router`]** - Ordered route table with first-match-wins lookup and
//!   atomic hot-swapping
//! - **[`config`]** - Route tables loaded from YAML, TOML or JSON files
//! - **[`logging`]** - `tracing` subscriber setup driven by environment variables
//! - **[`cli`]** - The `routepath` command-line tool
//!
//! ### Request Flow
//!
//! ```text
//! template ──compile──▶ CompiledPattern (once, at registration)
//!                               │
//! request path ──match_path─────┴──▶ Option<MatchedPath> (per request)
//! ```
//!
//! A `CompiledPattern` is immutable and holds no interior state, so it can be
//! shared across threads without locking. Failing to match is an ordinary
//! outcome, reported as `None`.
//!
//! ## Quick Start
//!
//! ```
//! use routepath::path::compile;
//!
//! let pattern = compile("/files/{path*}");
//! let matched = pattern.match_path("/files/a/b/c").unwrap();
//! assert_eq!(matched.value_for("path"), Some("a/b/c"));
//!
//! // An empty wildcard matches but binds nothing.
//! assert!(pattern.match_path("/files").unwrap().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod path;
pub mod router;

pub use config::{load_routes, RouteConfig, RouteDef};
pub use path::{compile, CompiledPattern, MatchedPath, ParamName, PathParam, Segment};
pub use router::{Route, RouteMatch, Router, SharedRouter};
