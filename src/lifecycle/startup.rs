//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the route table (declared routes or preset)
//! - Create the router with its base path
//! - Pick the view source and register every component
//! - Hand back a ready Navigator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Nothing is fetched at startup; views load on first navigation

use std::path::Path;
use std::sync::Arc;

use crate::config::loader::{apply_base_override, read_config, ConfigOverrides, BASE_URL_ENV};
use crate::config::schema::SiteConfig;
use crate::config::validation::{build_routes, validate_config, ValidationError};
use crate::config::ConfigError;
use crate::navigation::Navigator;
use crate::observability::logging::{init_logging, LoggingError};
use crate::routing::{InvalidTable, RouteTable, Router};
use crate::views::{FileViews, StaticViews, ViewRegistry, ViewSource};

/// Startup failure.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid routes: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Routes(Vec<ValidationError>),

    #[error(transparent)]
    Table(#[from] InvalidTable),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Resolve the effective configuration.
///
/// File (or defaults), then `BASE_URL`, then command-line overrides.
/// Validation runs once, on the merged result.
pub fn prepare_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<SiteConfig, StartupError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => {
            let mut config = SiteConfig::default();
            apply_base_override(&mut config, std::env::var(BASE_URL_ENV).ok());
            config
        }
    };
    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Full startup: configuration, logging, then the navigator.
pub fn start(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Navigator, StartupError> {
    let config = prepare_config(path, overrides)?;
    init_logging(&config.observability)?;
    tracing::debug!(
        path = ?path,
        routes = config.routes.len(),
        preset = %config.router.preset,
        "Configuration loaded"
    );
    build_navigator(&config)
}

/// Build the route table described by `config`.
pub fn build_table(config: &SiteConfig) -> Result<RouteTable, StartupError> {
    if config.routes.is_empty() {
        tracing::debug!(preset = %config.router.preset, "Using preset route table");
        return Ok(config.router.preset.table()?);
    }
    let routes = build_routes(&config.routes).map_err(StartupError::Routes)?;
    Ok(RouteTable::new(routes)?)
}

/// Pick the view source described by `config`.
pub fn build_view_source(config: &SiteConfig, table: &RouteTable) -> Arc<dyn ViewSource> {
    match &config.views.dir {
        Some(dir) => Arc::new(FileViews::new(dir, config.views.extension.clone())),
        None => match &config.views.site_name {
            Some(site) => Arc::new(StaticViews::site_placeholders(site, table.components())),
            None => Arc::new(StaticViews::placeholders(table.components())),
        },
    }
}

/// Wire table, router, views and navigator together.
pub fn build_navigator(config: &SiteConfig) -> Result<Navigator, StartupError> {
    let table = build_table(config)?;
    let source = build_view_source(config, &table);
    let views = Arc::new(ViewRegistry::for_table(source, &table));
    let router = Arc::new(Router::new(table).with_base(&config.router.base));

    tracing::info!(
        routes = router.table().len(),
        wildcard = router.table().has_wildcard(),
        base = %router.base(),
        views = views.len(),
        "Router ready"
    );
    if !router.table().has_wildcard() {
        tracing::warn!("No wildcard route declared; unmatched paths resolve to nothing");
    }

    Ok(Navigator::new(router, views))
}
