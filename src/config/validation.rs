//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Convert declared routes into typed `Route`s
//! - Apply the route table invariants before anything is built
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Table invariants are shared with `RouteTable::new`, not duplicated

use tracing_subscriber::EnvFilter;

use crate::config::schema::{RouteConfig, SiteConfig};
use crate::routing::table::{check_invariants, TableError};
use crate::routing::{PathPattern, PatternError, Route};

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("router.base '{0}' must start with '/'")]
    InvalidBase(String),

    #[error("route #{0} has an empty name")]
    EmptyName(usize),

    #[error("route '{name}': {source}")]
    Pattern {
        name: String,
        #[source]
        source: PatternError,
    },

    #[error("route '{0}' must set exactly one of 'component' or 'redirect'")]
    AmbiguousTarget(String),

    #[error("route '{0}' has an empty component or redirect")]
    EmptyTarget(String),

    #[error("views.extension must not be empty")]
    EmptyExtension,

    #[error("invalid observability.log_level '{0}'")]
    InvalidLogLevel(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.router.base.starts_with('/') {
        errors.push(ValidationError::InvalidBase(config.router.base.clone()));
    }
    if config.views.extension.trim().is_empty() {
        errors.push(ValidationError::EmptyExtension);
    }
    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if !config.routes.is_empty() {
        match build_routes(&config.routes) {
            Ok(routes) => errors.extend(check_invariants(&routes).into_iter().map(Into::into)),
            Err(route_errors) => errors.extend(route_errors),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convert declared routes into typed routes.
pub fn build_routes(declared: &[RouteConfig]) -> Result<Vec<Route>, Vec<ValidationError>> {
    let mut routes = Vec::with_capacity(declared.len());
    let mut errors = Vec::new();

    for (index, decl) in declared.iter().enumerate() {
        match build_route(index, decl) {
            Ok(route) => routes.push(route),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(routes)
    } else {
        Err(errors)
    }
}

fn build_route(index: usize, decl: &RouteConfig) -> Result<Route, ValidationError> {
    let name = decl.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName(index));
    }

    let path = PathPattern::parse(&decl.path).map_err(|source| ValidationError::Pattern {
        name: name.to_string(),
        source,
    })?;

    match (&decl.component, &decl.redirect) {
        (Some(component), None) if !component.trim().is_empty() => {
            Ok(Route::lazy(path, name, component.trim()))
        }
        (None, Some(to)) if !to.trim().is_empty() => Ok(Route::redirect(path, name, to.trim())),
        (Some(_), None) | (None, Some(_)) => Err(ValidationError::EmptyTarget(name.to_string())),
        _ => Err(ValidationError::AmbiguousTarget(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::SiteConfig;

    fn route(path: &str, name: &str, component: Option<&str>, redirect: Option<&str>) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            name: name.into(),
            component: component.map(Into::into),
            redirect: redirect.map(Into::into),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn test_declared_routes() {
        let mut config = SiteConfig::default();
        config.routes = vec![
            route("/", "root", None, Some("/home")),
            route("/home", "home", Some("Home"), None),
            route("*", "notFound", Some("NotFound"), None),
        ];
        assert_eq!(validate_config(&config), Ok(()));

        let routes = build_routes(&config.routes).unwrap();
        assert!(routes[0].is_redirect());
        assert_eq!(routes[1].component(), Some("Home"));
        assert!(routes[2].path.is_wildcard());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = SiteConfig::default();
        config.router.base = "site".into();
        config.views.extension = "".into();
        config.routes = vec![
            route("/", "root", Some("Home"), Some("/home")),
            route("home", "home", Some("Home"), None),
            route("/blog", " ", Some("Blog"), None),
            route("/links", "links", Some(" "), None),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidBase("site".into())));
        assert!(errors.contains(&ValidationError::EmptyExtension));
        assert!(errors.contains(&ValidationError::AmbiguousTarget("root".into())));
        assert!(errors.contains(&ValidationError::Pattern {
            name: "home".into(),
            source: PatternError::NotAbsolute("home".into())
        }));
        assert!(errors.contains(&ValidationError::EmptyName(2)));
        assert!(errors.contains(&ValidationError::EmptyTarget("links".into())));
    }

    #[test]
    fn test_table_invariants_applied() {
        let mut config = SiteConfig::default();
        config.routes = vec![
            route("/", "root", None, Some("/home")),
            route("/home", "home", Some("Home"), None),
            route("/about", "home", Some("About"), None),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::Table(TableError::DuplicateName("home".into()))]
        );
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = SiteConfig::default();
        config.observability.log_level = "site_router=loud".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::InvalidLogLevel("site_router=loud".into())])
        );
    }
}
