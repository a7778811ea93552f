//! # CLI Module
//!
//! Command-line access to the matcher, mainly for checking templates and route
//! tables before deploying them.
//!
//! ## Commands
//!
//! ```bash
//! # Match a single path against a single template
//! routepath match --template '/users/{id}' /users/42
//!
//! # Find the first route in a table that matches
//! routepath route --config routes.yaml '/files/a/b?download=1'
//!
//! # List routes and their variables
//! routepath inspect --config routes.yaml
//!
//! # Report suspicious templates (non-trailing wildcards, duplicate names, ...)
//! routepath lint --config routes.yaml --fail-on-warning
//! ```
//!
//! Match results are printed as JSON. A miss exits with status 1.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
