//! Navigator: resolves locations and loads their views.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::navigation::{Navigation, NavigationError};
use crate::observability::metrics;
use crate::routing::Router;
use crate::views::ViewRegistry;

#[derive(Debug)]
struct Pending {
    id: Uuid,
    token: CancellationToken,
}

/// Clears the pending slot when a navigation ends, including when its
/// future is dropped before completing.
struct PendingGuard<'a> {
    navigator: &'a Navigator,
    id: Uuid,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.navigator.finish(self.id);
    }
}

/// Explicit router object handed to the rendering layer.
#[derive(Debug)]
pub struct Navigator {
    router: Arc<Router>,
    views: Arc<ViewRegistry>,
    pending: Mutex<Option<Pending>>,
    current: Mutex<Option<Navigation>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Navigator {
    pub fn new(router: Arc<Router>, views: Arc<ViewRegistry>) -> Self {
        Self {
            router,
            views,
            pending: Mutex::new(None),
            current: Mutex::new(None),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Last completed navigation.
    pub fn current(&self) -> Option<Navigation> {
        lock(&self.current).clone()
    }

    pub fn has_pending(&self) -> bool {
        lock(&self.pending).is_some()
    }

    /// Cancel the pending navigation, if any. Returns true if one was cancelled.
    pub fn cancel_pending(&self) -> bool {
        match lock(&self.pending).take() {
            Some(pending) => {
                pending.token.cancel();
                tracing::debug!(navigation_id = %pending.id, "Pending navigation cancelled");
                true
            }
            None => false,
        }
    }

    /// Navigate to a browser location (base included).
    ///
    /// Cancels any navigation still waiting for its view.
    pub async fn navigate(&self, location: &str) -> Result<Navigation, NavigationError> {
        let id = Uuid::new_v4();
        let span = tracing::info_span!("navigation", navigation_id = %id, location = %location);
        async {
            let token = self.begin(id);
            let _guard = PendingGuard { navigator: self, id };
            self.run(id, location, &token).await
        }
        .instrument(span)
        .await
    }

    /// Navigate to a route by name.
    pub async fn navigate_named(&self, name: &str) -> Result<Navigation, NavigationError> {
        let href = self.router.href(name)?;
        self.navigate(&href).await
    }

    fn begin(&self, id: Uuid) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = lock(&self.pending).replace(Pending {
            id,
            token: token.clone(),
        });
        if let Some(previous) = previous {
            previous.token.cancel();
            tracing::debug!(superseded = %previous.id, "Superseding pending navigation");
        }
        token
    }

    fn finish(&self, id: Uuid) {
        let mut pending = lock(&self.pending);
        if pending.as_ref().is_some_and(|p| p.id == id) {
            *pending = None;
        }
    }

    async fn run(
        &self,
        id: Uuid,
        location: &str,
        token: &CancellationToken,
    ) -> Result<Navigation, NavigationError> {
        let resolved = self.router.resolve_effective(location).inspect_err(|e| {
            tracing::warn!(error = %e, "Navigation failed to resolve");
        })?;

        let view = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            loaded = self.views.load(&resolved.component) => Some(loaded?),
        };

        let navigation = view.map(|view| Navigation {
            id,
            requested: location.to_string(),
            path: resolved.path,
            route: resolved.route,
            redirected_from: resolved.redirected_from,
            fallback: resolved.fallback,
            view,
        });

        // Checked under the lock so a superseded navigation never overwrites
        // the one that replaced it.
        let mut current = lock(&self.current);
        match navigation {
            Some(navigation) if !token.is_cancelled() => {
                tracing::info!(
                    route = %navigation.route,
                    path = %navigation.path,
                    status = navigation.status(),
                    "Navigation complete"
                );
                *current = Some(navigation.clone());
                Ok(navigation)
            }
            _ => {
                metrics::record_navigation_cancelled();
                tracing::info!("Navigation cancelled before its view loaded");
                Err(NavigationError::Cancelled(location.to_string()))
            }
        }
    }
}
