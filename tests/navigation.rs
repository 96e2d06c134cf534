//! Navigation scenarios across routing and lazy view loading.

use std::sync::Arc;
use std::time::Duration;

use site_router::navigation::NavigationError;
use site_router::routing::{Preset, RouteError};
use site_router::views::ViewError;

mod common;

use common::{navigator, wait_for_pending, ScriptedSource};

#[tokio::test]
async fn test_site_scenarios() {
    let source = Arc::new(ScriptedSource::new());
    let nav = navigator(Preset::Current, source.clone());

    let root = nav.navigate("/").await.unwrap();
    assert_eq!(root.redirected_from, vec!["/".to_string()]);
    assert_eq!(root.path, "/home");
    assert_eq!(root.view.component, "Home");

    let about = nav.navigate("/about").await.unwrap();
    assert_eq!(about.route, "about");
    assert_eq!(about.view.component, "About");

    let missing = nav.navigate("/nonexistent").await.unwrap();
    assert!(missing.fallback);
    assert_eq!(missing.view.component, "NotFound");

    let links = nav.navigate("/links").await.unwrap();
    assert_eq!(links.view.component, "Links");
    assert_eq!(nav.current().unwrap().route, "links");
}

#[tokio::test]
async fn test_views_fetched_once() {
    let source = Arc::new(ScriptedSource::new());
    let nav = navigator(Preset::Current, source.clone());

    for _ in 0..3 {
        nav.navigate("/about").await.unwrap();
    }
    nav.navigate("/").await.unwrap();
    nav.navigate("/home").await.unwrap();

    assert_eq!(source.calls("About"), 1);
    assert_eq!(source.calls("Home"), 1);
    assert_eq!(source.calls("Blog"), 0);
}

#[tokio::test]
async fn test_failed_load_surfaces_then_retries() {
    let source = Arc::new(ScriptedSource::new().fail("About", 1));
    let nav = navigator(Preset::Current, source.clone());

    let err = nav.navigate("/about").await.unwrap_err();
    assert!(matches!(
        err,
        NavigationError::View(ViewError::Unavailable { .. })
    ));
    assert!(nav.current().is_none());
    assert!(!nav.views().is_loaded("About"));

    let about = nav.navigate("/about").await.unwrap();
    assert_eq!(about.view.component, "About");
    assert_eq!(source.calls("About"), 2);
}

#[tokio::test]
async fn test_newer_navigation_cancels_pending() {
    let source = Arc::new(ScriptedSource::new());
    let gate = source.block("Blog");
    let nav = navigator(Preset::Current, source.clone());

    let slow = {
        let nav = nav.clone();
        tokio::spawn(async move { nav.navigate("/blog").await })
    };
    wait_for_pending(&nav).await;

    let about = nav.navigate("/about").await.unwrap();
    assert_eq!(about.route, "about");

    let superseded = slow.await.unwrap();
    assert!(matches!(superseded, Err(NavigationError::Cancelled(ref l)) if l == "/blog"));
    assert_eq!(nav.current().unwrap().route, "about");
    assert!(!nav.views().is_loaded("Blog"));
    assert!(!nav.has_pending());

    // The abandoned fetch left nothing cached, so the next visit fetches again
    gate.notify_one();
    let blog = nav.navigate("/blog").await.unwrap();
    assert_eq!(blog.view.component, "Blog");
    assert_eq!(source.calls("Blog"), 2);
}

#[tokio::test]
async fn test_explicit_cancel() {
    let source = Arc::new(ScriptedSource::new());
    let _gate = source.block("Projects");
    let nav = navigator(Preset::Current, source.clone());

    let pending = {
        let nav = nav.clone();
        tokio::spawn(async move { nav.navigate("/projects").await })
    };
    wait_for_pending(&nav).await;

    assert!(nav.cancel_pending());
    assert!(matches!(
        pending.await.unwrap(),
        Err(NavigationError::Cancelled(_))
    ));
    assert!(nav.current().is_none());
    assert!(!nav.cancel_pending());
}

#[tokio::test]
async fn test_dropped_navigation_clears_pending() {
    let source = Arc::new(ScriptedSource::new());
    let gate = source.block("Blog");
    let nav = navigator(Preset::Current, source.clone());

    let timed_out = tokio::time::timeout(Duration::from_millis(20), nav.navigate("/blog")).await;
    assert!(timed_out.is_err());

    assert!(!nav.has_pending());
    assert!(!nav.cancel_pending());
    assert!(nav.current().is_none());
    assert!(!nav.views().is_loaded("Blog"));

    gate.notify_one();
    let blog = nav.navigate("/blog").await.unwrap();
    assert_eq!(blog.view.component, "Blog");
    assert!(!nav.has_pending());
}

#[tokio::test]
async fn test_legacy_table_leaves_unmatched_paths_unresolved() {
    let source = Arc::new(ScriptedSource::new());
    let nav = navigator(Preset::Legacy, source.clone());

    let about = nav.navigate("/about").await.unwrap();
    assert_eq!(about.route, "About");

    let err = nav.navigate("/nonexistent").await.unwrap_err();
    assert!(matches!(
        err,
        NavigationError::Route(RouteError::NoMatch { .. })
    ));
    assert_eq!(source.total_calls(), 1);
}
