//! Immutable, validated route table.
//!
//! # Responsibilities
//! - Check table invariants once, at construction
//! - Index literal paths and names for O(1) lookup
//! - Keep the wildcard apart so it is always evaluated last
//!
//! # Design Decisions
//! - All invariant violations are reported together, not just the first
//! - Declaration order is kept for listings only; it never affects matching

use std::collections::{HashMap, HashSet};

use crate::routing::matcher::{normalize_path, PathPattern};
use crate::routing::route::{Route, RouteTarget};

/// A violated route table invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("path '{path}' is declared by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("no route matches the root path '/'")]
    MissingRoot,

    #[error("root route '{0}' must redirect")]
    RootNotRedirect(String),

    #[error("wildcard declared by both '{first}' and '{second}'")]
    MultipleWildcards { first: String, second: String },

    #[error("wildcard route '{0}' must render a view")]
    WildcardRedirect(String),

    #[error("route '{name}' redirects to '{to}' which matches no declared path")]
    DanglingRedirect { name: String, to: String },

    #[error("redirects starting at route '{0}' form a cycle")]
    RedirectCycle(String),
}

/// Route table rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route table: {}", join_errors(.0))]
pub struct InvalidTable(pub Vec<TableError>);

fn join_errors(errors: &[TableError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The application's route table. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    exact: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    wildcard: Option<usize>,
}

impl RouteTable {
    /// Validate and index a list of routes.
    pub fn new(routes: Vec<Route>) -> Result<Self, InvalidTable> {
        let errors = check_invariants(&routes);
        if !errors.is_empty() {
            return Err(InvalidTable(errors));
        }

        let mut exact = HashMap::new();
        let mut by_name = HashMap::new();
        let mut wildcard = None;
        for (idx, route) in routes.iter().enumerate() {
            match route.path.lookup_key() {
                Some(key) => {
                    exact.insert(key, idx);
                }
                None => wildcard = Some(idx),
            }
            by_name.insert(route.name.clone(), idx);
        }

        Ok(Self {
            routes,
            exact,
            by_name,
            wildcard,
        })
    }

    /// Route whose literal path equals `path` (already normalised).
    pub fn exact(&self, path: &str) -> Option<&Route> {
        self.exact
            .get(&path.to_ascii_lowercase())
            .map(|&idx| &self.routes[idx])
    }

    /// The catch-all route, if declared.
    pub fn wildcard(&self) -> Option<&Route> {
        self.wildcard.map(|idx| &self.routes[idx])
    }

    /// Match a normalised path: literal first, wildcard last.
    pub fn lookup(&self, path: &str) -> Option<&Route> {
        self.exact(path).or_else(|| self.wildcard())
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Distinct view components referenced by the table.
    pub fn components(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.routes
            .iter()
            .filter_map(Route::component)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Check every table invariant and return all violations.
pub fn check_invariants(routes: &[Route]) -> Vec<TableError> {
    let mut errors = Vec::new();
    let mut names: HashSet<&str> = HashSet::new();
    let mut paths: HashMap<String, &str> = HashMap::new();
    let mut wildcard: Option<&str> = None;

    for route in routes {
        if !names.insert(&route.name) {
            errors.push(TableError::DuplicateName(route.name.clone()));
        }

        match route.path.lookup_key() {
            Some(key) => {
                if let Some(first) = paths.get(&key) {
                    errors.push(TableError::DuplicatePath {
                        path: route.path.to_string(),
                        first: first.to_string(),
                        second: route.name.clone(),
                    });
                } else {
                    paths.insert(key, route.name.as_str());
                }
            }
            None => {
                if let Some(first) = wildcard {
                    errors.push(TableError::MultipleWildcards {
                        first: first.to_string(),
                        second: route.name.clone(),
                    });
                } else {
                    wildcard = Some(route.name.as_str());
                }
                if route.is_redirect() {
                    errors.push(TableError::WildcardRedirect(route.name.clone()));
                }
            }
        }
    }

    match routes
        .iter()
        .find(|r| r.path.lookup_key().as_deref() == Some("/"))
    {
        None => errors.push(TableError::MissingRoot),
        Some(root) if !root.is_redirect() => {
            errors.push(TableError::RootNotRedirect(root.name.clone()))
        }
        Some(_) => {}
    }

    let literal = move |to: &str| {
        let key = normalize_path(to).to_ascii_lowercase();
        routes
            .iter()
            .find(|r| r.path.lookup_key().as_deref() == Some(key.as_str()))
    };

    for route in routes {
        let RouteTarget::Redirect { to } = &route.target else {
            continue;
        };
        if literal(to).is_none() {
            errors.push(TableError::DanglingRedirect {
                name: route.name.clone(),
                to: to.clone(),
            });
            continue;
        }

        // Follow the chain; a cycle revisits a route before reaching a view.
        let mut visited: HashSet<&str> = HashSet::from([route.name.as_str()]);
        let mut next = literal(to);
        while let Some(hop) = next {
            let RouteTarget::Redirect { to } = &hop.target else {
                break;
            };
            if !visited.insert(&hop.name) {
                errors.push(TableError::RedirectCycle(route.name.clone()));
                break;
            }
            next = literal(to);
        }
    }

    errors
}
