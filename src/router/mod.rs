//! # Router Module
//!
//! An ordered table of named route templates built on [`crate::path`].
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling route templates once, at registration time
//! - Matching incoming request paths against routes in registration order
//! - Returning the first matching route together with its bound parameters
//!
//! ## Example
//!
//! ```
//! use routepath::router::{Route, Router};
//!
//! let router = Router::new(vec![
//!     Route::new("get_user", "/users/{id}"),
//!     Route::new("get_file", "/files/{path*}"),
//! ]);
//!
//! let m = router.route("/files/docs/readme.md").unwrap();
//! assert_eq!(m.route_name(), "get_file");
//! assert_eq!(m.get_path_param("path"), Some("docs/readme.md"));
//! ```
//!
//! ## Performance
//!
//! Matching is a linear scan over routes, each test being O(max(template
//! segments, path segments)). No locks are taken; [`SharedRouter`] swaps whole
//! tables atomically via `arc-swap`.

mod core;

pub use core::{Route, RouteMatch, Router, SharedRouter};
