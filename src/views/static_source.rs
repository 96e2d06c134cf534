//! In-memory view source.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::routing::presets::NOT_FOUND_COMPONENT;
use crate::views::{View, ViewError, ViewSource};

/// Views held in memory, keyed by component name.
#[derive(Debug, Clone, Default)]
pub struct StaticViews {
    views: HashMap<String, View>,
}

impl StaticViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder page for every component.
    pub fn placeholders<'a>(components: impl IntoIterator<Item = &'a str>) -> Self {
        Self::build(None, components)
    }

    /// Placeholder pages titled `<site> | <page>`.
    pub fn site_placeholders<'a>(
        site_name: &str,
        components: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::build(Some(site_name), components)
    }

    fn build<'a>(site_name: Option<&str>, components: impl IntoIterator<Item = &'a str>) -> Self {
        components.into_iter().fold(Self::new(), |views, component| {
            views.with_view(placeholder(site_name, component))
        })
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.views.insert(view.component.clone(), view);
        self
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

fn placeholder(site_name: Option<&str>, component: &str) -> View {
    let page = if component == NOT_FOUND_COMPONENT {
        "Page Not Found"
    } else {
        component
    };
    let title = match site_name {
        Some(site) => format!("{} | {}", site, page),
        None => page.to_string(),
    };
    View {
        component: component.to_string(),
        body: format!("<main><h1>{}</h1></main>", page),
        title,
    }
}

#[async_trait]
impl ViewSource for StaticViews {
    async fn fetch(&self, component: &str) -> Result<View, ViewError> {
        self.views
            .get(component)
            .cloned()
            .ok_or_else(|| ViewError::NotFound(component.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholders() {
        let views = StaticViews::placeholders(["Home", NOT_FOUND_COMPONENT]);
        assert_eq!(views.len(), 2);

        let home = views.fetch("Home").await.unwrap();
        assert_eq!(home.title, "Home");
        assert_eq!(home.body, "<main><h1>Home</h1></main>");

        let not_found = views.fetch(NOT_FOUND_COMPONENT).await.unwrap();
        assert_eq!(not_found.title, "Page Not Found");
    }

    #[tokio::test]
    async fn test_site_placeholders() {
        let views = StaticViews::site_placeholders("trigex.moe", ["Blog", NOT_FOUND_COMPONENT]);

        let blog = views.fetch("Blog").await.unwrap();
        assert_eq!(blog.title, "trigex.moe | Blog");
        assert_eq!(blog.body, "<main><h1>Blog</h1></main>");

        let not_found = views.fetch(NOT_FOUND_COMPONENT).await.unwrap();
        assert_eq!(not_found.title, "trigex.moe | Page Not Found");
    }

    #[tokio::test]
    async fn test_missing_view() {
        let views = StaticViews::new();
        assert!(views.is_empty());
        assert!(matches!(
            views.fetch("Blog").await,
            Err(ViewError::NotFound(name)) if name == "Blog"
        ));
    }
}
