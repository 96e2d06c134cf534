//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(location)
//!     → cancel previous pending navigation
//!     → Router::resolve_effective (redirects followed)
//!     → ViewRegistry::load (suspends on first visit only)
//!     → Navigation { route, view, .. } recorded as current
//! ```
//!
//! # Design Decisions
//! - Explicit Navigator object handed to the renderer, no global router
//! - The view load is the only suspension point
//! - A newer navigation cancels the pending one
//! - Route and view failures are surfaced, never swallowed

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::routing::RouteError;
use crate::views::{View, ViewError};

pub mod navigator;

pub use navigator::Navigator;

/// A completed navigation.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub id: Uuid,
    /// Location as requested, base included.
    pub requested: String,
    /// Effective path after redirects, relative to the base.
    pub path: String,
    /// Name of the route that rendered.
    pub route: String,
    pub redirected_from: Vec<String>,
    /// The not-found view rendered because nothing else matched.
    pub fallback: bool,
    pub view: Arc<View>,
}

impl Navigation {
    /// HTTP-style status for the rendered page.
    pub fn status(&self) -> u16 {
        if self.fallback {
            404
        } else {
            200
        }
    }
}

/// Errors from a navigation.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("navigation to '{0}' was cancelled")]
    Cancelled(String),
}
