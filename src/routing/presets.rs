//! Built-in route tables for the site.
//!
//! Two snapshots of the same table exist. `Current` uses lowercase names and
//! adds the not-found wildcard; `Legacy` is the older table with capitalised
//! names and no fallback, so unmatched paths resolve to `NoMatch`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::matcher::PathPattern;
use crate::routing::route::Route;
use crate::routing::table::{InvalidTable, RouteTable};

/// Component rendered by the wildcard route of the current table.
pub const NOT_FOUND_COMPONENT: &str = "NotFound";

/// Selects one of the built-in route tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Current,
    Legacy,
}

impl Preset {
    pub fn routes(self) -> Vec<Route> {
        match self {
            Preset::Current => current_routes(),
            Preset::Legacy => legacy_routes(),
        }
    }

    pub fn table(self) -> Result<RouteTable, InvalidTable> {
        RouteTable::new(self.routes())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Current => f.write_str("current"),
            Preset::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" => Ok(Preset::Current),
            "legacy" => Ok(Preset::Legacy),
            other => Err(format!("unknown preset '{}' (expected 'current' or 'legacy')", other)),
        }
    }
}

/// (path, component) pairs shared by both tables.
const PAGES: [(&str, &str); 5] = [
    ("/home", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/links", "Links"),
    ("/blog", "Blog"),
];

fn literal(path: &'static str) -> PathPattern {
    PathPattern::Exact(path.to_string())
}

fn current_routes() -> Vec<Route> {
    let mut routes = vec![Route::redirect(literal("/"), "root", "/home")];
    routes.extend(
        PAGES
            .iter()
            .map(|&(path, component)| Route::lazy(literal(path), component.to_ascii_lowercase(), component)),
    );
    routes.push(Route::lazy(PathPattern::Wildcard, "notFound", NOT_FOUND_COMPONENT));
    routes
}

fn legacy_routes() -> Vec<Route> {
    let mut routes = vec![Route::redirect(literal("/"), "root", "/home")];
    routes.extend(
        PAGES
            .iter()
            .map(|&(path, component)| Route::lazy(literal(path), component, component)),
    );
    routes
}
