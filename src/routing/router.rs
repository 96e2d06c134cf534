//! Route lookup and redirect resolution.
//!
//! # Responsibilities
//! - Strip the history-mode base prefix from incoming locations
//! - Resolve a location to exactly one outcome (redirect, view, no-match)
//! - Follow redirect chains to the effective route
//! - Build paths and hrefs for named routes
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(1) literal lookup via HashMap, wildcard checked last
//! - Explicit NoMatch rather than silent default

use serde::Serialize;

use crate::observability::metrics;
use crate::routing::matcher::{join_base, normalize_base, normalize_path, strip_base, PathPattern};
use crate::routing::route::RouteTarget;
use crate::routing::table::RouteTable;

/// Outcome of resolving one location, without following redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteMatch {
    /// Navigate to `to` instead of rendering.
    Redirect {
        route: String,
        path: String,
        to: String,
    },
    /// Load `component`. `fallback` is set when the wildcard matched.
    View {
        route: String,
        path: String,
        component: String,
        fallback: bool,
    },
    /// Nothing matched and the table has no wildcard.
    NoMatch { path: String },
}

impl RouteMatch {
    fn outcome(&self) -> &'static str {
        match self {
            RouteMatch::Redirect { .. } => "redirect",
            RouteMatch::View { fallback: true, .. } => "fallback",
            RouteMatch::View { .. } => "view",
            RouteMatch::NoMatch { .. } => "no_match",
        }
    }
}

/// Effective route after all redirects were followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedView {
    /// Name of the route that renders.
    pub route: String,
    /// Effective path, relative to the base.
    pub path: String,
    pub component: String,
    pub fallback: bool,
    /// Paths that redirected, in traversal order.
    pub redirected_from: Vec<String>,
}

/// Errors from route resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches '{path}'")]
    NoMatch { path: String },

    #[error("no route named '{0}'")]
    UnknownName(String),

    #[error("route '{0}' has no literal path to navigate to")]
    NotNavigable(String),
}

/// Resolves locations against an immutable route table.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    base: String,
}

impl Router {
    /// Create a router serving from the root base `/`.
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            base: "/".to_string(),
        }
    }

    /// Set the base prefix stripped from every location.
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = normalize_base(base);
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolve a browser location (base included) one step.
    pub fn resolve(&self, location: &str) -> RouteMatch {
        let path = strip_base(&self.base, location);
        self.resolve_path(&path)
    }

    /// Resolve a path relative to the base one step.
    fn resolve_path(&self, path: &str) -> RouteMatch {
        let path = normalize_path(path);
        let matched = match self.table.lookup(&path) {
            None => {
                tracing::warn!(path = %path, "No route matched and no wildcard declared");
                RouteMatch::NoMatch { path }
            }
            Some(route) => match &route.target {
                RouteTarget::Redirect { to } => RouteMatch::Redirect {
                    route: route.name.clone(),
                    path,
                    to: normalize_path(to),
                },
                RouteTarget::Lazy { component } => RouteMatch::View {
                    route: route.name.clone(),
                    path,
                    component: component.clone(),
                    fallback: route.path.is_wildcard(),
                },
            },
        };

        tracing::debug!(outcome = matched.outcome(), "Route resolved");
        metrics::record_resolution(matched.outcome());
        matched
    }

    /// Resolve a location, following redirects to the route that renders.
    ///
    /// Terminates because the table rejects dangling and cyclic redirects.
    pub fn resolve_effective(&self, location: &str) -> Result<ResolvedView, RouteError> {
        let mut path = strip_base(&self.base, location);
        let mut redirected_from = Vec::new();

        loop {
            match self.resolve_path(&path) {
                RouteMatch::View {
                    route,
                    path,
                    component,
                    fallback,
                } => {
                    return Ok(ResolvedView {
                        route,
                        path,
                        component,
                        fallback,
                        redirected_from,
                    })
                }
                RouteMatch::NoMatch { path } => return Err(RouteError::NoMatch { path }),
                RouteMatch::Redirect { path: from, to, .. } => {
                    redirected_from.push(from);
                    tracing::debug!(to = %to, "Following redirect");
                    path = to;
                }
            }
        }
    }

    /// Literal path of a named route.
    pub fn path_for(&self, name: &str) -> Result<&str, RouteError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        match &route.path {
            PathPattern::Exact(path) => Ok(path),
            PathPattern::Wildcard => Err(RouteError::NotNavigable(name.to_string())),
        }
    }

    /// Browser URL of a named route, base included.
    pub fn href(&self, name: &str) -> Result<String, RouteError> {
        Ok(join_base(&self.base, self.path_for(name)?))
    }
}
