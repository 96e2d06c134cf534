//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use site_router::navigation::Navigator;
use site_router::routing::{Preset, Router};
use site_router::views::{View, ViewError, ViewRegistry, ViewSource};

/// View source that counts fetches per component and can be scripted to
/// fail or block.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    calls: Mutex<HashMap<String, u32>>,
    failures: Mutex<HashMap<String, u32>>,
    blocked: Mutex<HashMap<String, Arc<Notify>>>,
    total: AtomicU32,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `count` fetches of `component`.
    pub fn fail(self, component: &str, count: u32) -> Self {
        self.failures.lock().unwrap().insert(component.to_string(), count);
        self
    }

    /// Block fetches of `component` until the returned handle is notified.
    pub fn block(&self, component: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.blocked
            .lock()
            .unwrap()
            .insert(component.to_string(), notify.clone());
        notify
    }

    pub fn calls(&self, component: &str) -> u32 {
        self.calls.lock().unwrap().get(component).copied().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn total_calls(&self) -> u32 {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ViewSource for ScriptedSource {
    async fn fetch(&self, component: &str) -> Result<View, ViewError> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(component.to_string())
            .or_default() += 1;
        self.total.fetch_add(1, Ordering::SeqCst);

        let gate = self.blocked.lock().unwrap().get(component).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let failing = {
            let mut failures = self.failures.lock().unwrap();
            match failures.get_mut(component) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    true
                }
                _ => false,
            }
        };
        if failing {
            return Err(ViewError::Unavailable {
                component: component.to_string(),
                reason: "network error".into(),
            });
        }

        Ok(View {
            component: component.to_string(),
            title: component.to_string(),
            body: format!("<main>{}</main>", component),
        })
    }
}

/// Navigator over a preset table backed by `source`.
pub fn navigator(preset: Preset, source: Arc<ScriptedSource>) -> Arc<Navigator> {
    let table = preset.table().unwrap();
    let views = Arc::new(ViewRegistry::for_table(source, &table));
    Arc::new(Navigator::new(Arc::new(Router::new(table)), views))
}

/// Wait until the navigator has a pending navigation.
pub async fn wait_for_pending(navigator: &Navigator) {
    for _ in 0..200 {
        if navigator.has_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("navigation never became pending");
}
