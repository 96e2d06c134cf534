//! View loading subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedView.component
//!     → registry.rs (component → LazyView)
//!     → lazy.rs (memoized one-shot load)
//!     → ViewSource::fetch (static.rs | file.rs), first visit only
//!     → Arc<View> handed to the renderer
//! ```
//!
//! # Design Decisions
//! - Views are external: the crate only knows how to fetch them by name
//! - First successful fetch is cached for the life of the process
//! - Failed fetches are not cached; the next navigation retries

use async_trait::async_trait;
use serde::Serialize;

pub mod file;
pub mod lazy;
pub mod registry;
pub mod static_source;

pub use file::FileViews;
pub use lazy::LazyView;
pub use registry::ViewRegistry;
pub use static_source::StaticViews;

/// A loaded view, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub component: String,
    pub title: String,
    pub body: String,
}

/// Errors from fetching a view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("component '{0}' is not referenced by any route")]
    NotRegistered(String),

    #[error("view '{0}' not found")]
    NotFound(String),

    #[error("failed to read view '{component}': {source}")]
    Io {
        component: String,
        #[source]
        source: std::io::Error,
    },

    #[error("view '{component}' unavailable: {reason}")]
    Unavailable { component: String, reason: String },
}

/// Where view code comes from.
#[async_trait]
pub trait ViewSource: Send + Sync + std::fmt::Debug {
    /// Fetch the view for `component`. Called at most once per successful load.
    async fn fetch(&self, component: &str) -> Result<View, ViewError>;
}
