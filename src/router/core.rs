use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{RouteConfig, RouteDef};
use crate::path::{CompiledPattern, MatchedPath, ParamName, PatternIssue};

/// A named, compiled route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Route identifier, e.g. the handler name
    pub name: String,
    /// The compiled template
    pub pattern: CompiledPattern,
}

impl Route {
    /// Compile `template` and name the result.
    #[must_use]
    pub fn new(name: impl Into<String>, template: &str) -> Self {
        Self {
            name: name.into(),
            pattern: CompiledPattern::new(template),
        }
    }

    #[inline]
    #[must_use]
    pub fn template(&self) -> &str {
        self.pattern.raw()
    }

    #[must_use]
    pub fn var_names(&self) -> Vec<ParamName> {
        self.pattern.var_names()
    }
}

impl From<&RouteDef> for Route {
    fn from(def: &RouteDef) -> Self {
        Route::new(def.name.clone(), &def.template)
    }
}

/// Result of successfully matching a request path to a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route (Arc to avoid cloning the compiled pattern)
    pub route: Arc<Route>,
    /// The raw path and the parameters bound by the route's pattern
    pub path: MatchedPath,
}

impl RouteMatch {
    /// Name of the route that matched.
    #[inline]
    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.route.name
    }

    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics, see [`MatchedPath::value_for`].
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path.value_for(name)
    }

    /// Convert path params to a HashMap
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path.params_map()
    }
}

/// Ordered route table. The first registered route whose pattern matches wins.
///
/// Immutable once shared: build it, then wrap it in [`SharedRouter`] (or an
/// `Arc`) and match from as many threads as needed.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Arc<Route>>,
}

impl Router {
    /// Create a router from routes in registration order.
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        let routes: Vec<Arc<Route>> = routes.into_iter().map(Arc::new).collect();

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|r| format!("{} {}", r.name, r.template()))
            .collect();
        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Routing table loaded"
        );

        Self { routes }
    }

    /// Build a router from a route config, keeping file order.
    #[must_use]
    pub fn from_config(config: &RouteConfig) -> Self {
        Self::new(config.routes.iter().map(Route::from).collect())
    }

    /// Register another route after all existing ones.
    pub fn add(&mut self, name: impl Into<String>, template: &str) -> &mut Self {
        self.routes.push(Arc::new(Route::new(name, template)));
        self
    }

    /// Match a request path against each route in registration order.
    ///
    /// # Returns
    ///
    /// * `Some(RouteMatch)` - The first route whose pattern matches
    /// * `None` - If no route matches
    #[must_use]
    pub fn route(&self, path: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            if let Some(matched) = route.pattern.match_path(path) {
                debug!(
                    path = %path,
                    route_name = %route.name,
                    route_pattern = %route.template(),
                    path_params = ?matched.params(),
                    "Route matched"
                );
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    path: matched,
                });
            }
        }

        debug!(path = %path, routes_count = self.routes.len(), "No route matched");
        None
    }

    /// Registered routes in match order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|r| &**r)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All templates in registration order.
    #[must_use]
    pub fn get_all_path_patterns(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.template().to_string()).collect()
    }

    /// Compile diagnostics of every route, paired with the route name.
    #[must_use]
    pub fn issues(&self) -> Vec<(&str, &PatternIssue)> {
        self.routes
            .iter()
            .flat_map(|r| r.pattern.issues().iter().map(|i| (r.name.as_str(), i)))
            .collect()
    }
}

/// A [`Router`] that can be replaced while other threads are matching.
///
/// Readers take a cheap snapshot with [`load`](Self::load); a concurrent
/// [`replace`](Self::replace) never blocks them and never tears a lookup.
#[derive(Debug, Clone)]
pub struct SharedRouter {
    inner: Arc<ArcSwap<Router>>,
}

impl SharedRouter {
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(router)),
        }
    }

    /// Snapshot of the current route table.
    #[must_use]
    pub fn load(&self) -> Arc<Router> {
        self.inner.load_full()
    }

    /// Match against the current route table.
    #[must_use]
    pub fn route(&self, path: &str) -> Option<RouteMatch> {
        self.inner.load().route(path)
    }

    /// Swap in a new route table.
    pub fn replace(&self, router: Router) {
        info!(routes_count = router.len(), "Routing table replaced");
        self.inner.store(Arc::new(router));
    }

    /// Rebuild from a route config and swap it in.
    pub fn reload(&self, config: &RouteConfig) {
        self.replace(Router::from_config(config));
    }
}
