//! Filesystem view source.
//!
//! Reads `<dir>/<Component>.<extension>` on demand. The page title is taken
//! from the first `<title>` element, falling back to the component name.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::views::{View, ViewError, ViewSource};

/// Views stored as files in a directory.
#[derive(Debug, Clone)]
pub struct FileViews {
    dir: PathBuf,
    extension: String,
}

impl FileViews {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, component: &str) -> Option<PathBuf> {
        // Component names are plain identifiers, never paths.
        let plain = !component.is_empty()
            && component
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        plain.then(|| self.dir.join(format!("{}.{}", component, self.extension)))
    }
}

#[async_trait]
impl ViewSource for FileViews {
    async fn fetch(&self, component: &str) -> Result<View, ViewError> {
        let path = self
            .path_for(component)
            .ok_or_else(|| ViewError::NotFound(component.to_string()))?;

        tracing::debug!(component = %component, path = ?path, "Reading view file");
        let body = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ViewError::NotFound(component.to_string()),
            _ => ViewError::Io {
                component: component.to_string(),
                source: e,
            },
        })?;

        Ok(View {
            component: component.to_string(),
            title: extract_title(&body).unwrap_or(component).to_string(),
            body,
        })
    }
}

fn extract_title(body: &str) -> Option<&str> {
    let start = body.find("<title>")? + "<title>".len();
    let len = body[start..].find("</title>")?;
    let title = body[start..start + len].trim();
    (!title.is_empty()).then_some(title)
}
