//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::Preset;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Router settings (base path, preset).
    pub router: RouterConfig,

    /// Route declarations. When empty, the preset table is used.
    pub routes: Vec<RouteConfig>,

    /// Where view code is fetched from.
    pub views: ViewsConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Base path prefix in history mode (e.g., "/site/").
    pub base: String,

    /// Built-in table used when no routes are declared.
    pub preset: Preset,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
            preset: Preset::Current,
        }
    }
}

/// A declared route. Exactly one of `component` or `redirect` must be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path or "*".
    pub path: String,

    /// Unique route name.
    pub name: String,

    /// View component loaded on first visit.
    pub component: Option<String>,

    /// Path to redirect to instead of rendering.
    pub redirect: Option<String>,
}

/// View source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Directory holding one file per component. In-memory placeholders
    /// are served when unset.
    pub dir: Option<String>,

    /// File extension of view files.
    pub extension: String,

    /// Site name prefixed to placeholder titles (`<site> | <page>`).
    pub site_name: Option<String>,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            dir: None,
            extension: "html".to_string(),
            site_name: None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g., "info", "site_router=debug").
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
