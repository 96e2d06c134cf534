//! Route definitions.

use serde::Serialize;

use crate::routing::matcher::PathPattern;

/// What a route does once matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteTarget {
    /// Navigate to another path instead of rendering.
    Redirect { to: String },
    /// Render a view whose code is fetched on first visit.
    Lazy { component: String },
}

/// A single entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: PathPattern,
    pub name: String,
    pub target: RouteTarget,
}

impl Route {
    /// Route rendering `component` lazily.
    pub fn lazy(path: PathPattern, name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
            target: RouteTarget::Lazy {
                component: component.into(),
            },
        }
    }

    /// Route redirecting to `to`.
    pub fn redirect(path: PathPattern, name: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
            target: RouteTarget::Redirect { to: to.into() },
        }
    }

    /// Component loaded by this route, if it renders one.
    pub fn component(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Lazy { component } => Some(component),
            RouteTarget::Redirect { .. } => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect { .. })
    }
}

/// Serializable summary of a route, used for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub name: String,
    #[serde(flatten)]
    pub target: RouteTarget,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path.to_string(),
            name: route.name.clone(),
            target: route.target.clone(),
        }
    }
}
