//! Component → lazy view registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::table::RouteTable;
use crate::views::{LazyView, View, ViewError, ViewSource};

/// One `LazyView` per component referenced by the route table.
#[derive(Debug)]
pub struct ViewRegistry {
    source: Arc<dyn ViewSource>,
    views: HashMap<String, LazyView>,
}

impl ViewRegistry {
    pub fn new<'a>(source: Arc<dyn ViewSource>, components: impl IntoIterator<Item = &'a str>) -> Self {
        let views = components
            .into_iter()
            .map(|c| (c.to_string(), LazyView::new(c)))
            .collect();
        Self { source, views }
    }

    /// Registry covering every component of `table`.
    pub fn for_table(source: Arc<dyn ViewSource>, table: &RouteTable) -> Self {
        Self::new(source, table.components())
    }

    /// Load a registered view, fetching it on first use.
    pub async fn load(&self, component: &str) -> Result<Arc<View>, ViewError> {
        let lazy = self
            .views
            .get(component)
            .ok_or_else(|| ViewError::NotRegistered(component.to_string()))?;

        if let Some(view) = lazy.cached() {
            tracing::debug!(component = %component, "View served from cache");
            return Ok(view);
        }
        lazy.load(self.source.as_ref()).await
    }

    pub fn get(&self, component: &str) -> Option<&LazyView> {
        self.views.get(component)
    }

    pub fn is_loaded(&self, component: &str) -> bool {
        self.views.get(component).is_some_and(LazyView::is_loaded)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
