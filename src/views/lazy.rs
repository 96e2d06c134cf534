//! One-shot memoized view loading.
//!
//! # Design Decisions
//! - `tokio::sync::OnceCell`: concurrent loads of the same view share one fetch
//! - Errors are returned, not cached; the cell stays empty for a retry
//! - Dropping a pending load (cancellation) leaves the cell empty

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::OnceCell;

use crate::observability::metrics;
use crate::views::{View, ViewError, ViewSource};

/// A view whose code is fetched on first use.
#[derive(Debug)]
pub struct LazyView {
    component: String,
    cell: OnceCell<Arc<View>>,
    fetches: AtomicU64,
}

impl LazyView {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            cell: OnceCell::new(),
            fetches: AtomicU64::new(0),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// The cached view, if a fetch already succeeded.
    pub fn cached(&self) -> Option<Arc<View>> {
        self.cell.get().cloned()
    }

    /// Number of fetches started, successful or not.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Load the view, fetching it from `source` only if not cached yet.
    pub async fn load(&self, source: &dyn ViewSource) -> Result<Arc<View>, ViewError> {
        let view = self
            .cell
            .get_or_try_init(|| async {
                self.fetches.fetch_add(1, Ordering::Relaxed);
                let start = Instant::now();
                let result = source.fetch(&self.component).await;
                metrics::record_view_load(&self.component, result.is_ok(), start);

                match &result {
                    Ok(_) => tracing::info!(
                        component = %self.component,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "View loaded"
                    ),
                    Err(e) => tracing::warn!(
                        component = %self.component,
                        error = %e,
                        "View load failed"
                    ),
                }
                result.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(view))
    }
}
