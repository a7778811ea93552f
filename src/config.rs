//! # Configuration Module
//!
//! Route tables can be declared in a file instead of code. The format is chosen
//! by file extension:
//!
//! - `.yaml` / `.yml` - YAML
//! - `.toml` - TOML
//! - anything else - JSON
//!
//! ```yaml
//! routes:
//!   - name: get_user
//!     template: /users/{id}
//!   - name: get_file
//!     template: /files/{path*}
//! ```
//!
//! Route order in the file is registration order, which is also match order.
//!
//! ## Environment Variables
//!
//! Logging is configured from the environment, see [`crate::logging::LogConfig`]:
//!
//! - `ROUTEPATH_LOG_LEVEL` - `trace`/`debug`/`info`/`warn`/`error` (default `info`)
//! - `ROUTEPATH_LOG_FORMAT` - `json` or `pretty` (default `pretty`)

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A single named route template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    /// Route identifier reported on a match (e.g. a handler name)
    pub name: String,
    /// Route template, e.g. `/users/{id}`
    pub template: String,
}

impl RouteDef {
    #[must_use]
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

/// An ordered list of route definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub routes: Vec<RouteDef>,
}

impl RouteConfig {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("invalid YAML route config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("invalid TOML route config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content).context("invalid JSON route config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot be routed unambiguously.
    ///
    /// Templates themselves are never rejected; only route names must be unique.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut names = HashSet::with_capacity(self.routes.len());
        for route in &self.routes {
            if route.name.is_empty() {
                bail!("route with template '{}' has an empty name", route.template);
            }
            if !names.insert(route.name.as_str()) {
                bail!("duplicate route name '{}'", route.name);
            }
        }
        Ok(())
    }
}

/// Load a route config file, picking the parser from the file extension.
pub fn load_routes(path: &Path) -> anyhow::Result<RouteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route config {}", path.display()))?;
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
    let config = match extension {
        "yaml" | "yml" => RouteConfig::from_yaml_str(&content),
        "toml" => RouteConfig::from_toml_str(&content),
        _ => RouteConfig::from_json_str(&content),
    }
    .with_context(|| format!("failed to load route config {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        routes_count = config.routes.len(),
        "Route config loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_preserves_order() {
        let config = RouteConfig::from_yaml_str(
            r#"
routes:
  - name: b
    template: /b
  - name: a
    template: /a/{id}
"#,
        )
        .unwrap();
        assert_eq!(
            config.routes,
            vec![RouteDef::new("b", "/b"), RouteDef::new("a", "/a/{id}")]
        );
    }

    #[test]
    fn test_toml_config() {
        let config = RouteConfig::from_toml_str(
            r#"
[[routes]]
name = "files"
template = "/files/{path*}"
"#,
        )
        .unwrap();
        assert_eq!(config.routes, vec![RouteDef::new("files", "/files/{path*}")]);
    }

    #[test]
    fn test_json_config() {
        let config =
            RouteConfig::from_json_str(r#"{"routes":[{"name":"root","template":"/"}]}"#).unwrap();
        assert_eq!(config.routes.len(), 1);
    }

    #[test]
    fn test_empty_config_is_allowed() {
        let config = RouteConfig::from_yaml_str("routes: []").unwrap();
        assert!(config.routes.is_empty());
        let config = RouteConfig::from_json_str("{}").unwrap();
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = RouteConfig::from_yaml_str(
            r#"
routes:
  - { name: x, template: /a }
  - { name: x, template: /b }
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate route name 'x'"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(RouteConfig::from_json_str(r#"{"routes":[{"name":"","template":"/"}]}"#).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(RouteConfig::from_yaml_str("routes: [ {name: x").is_err());
    }
}
