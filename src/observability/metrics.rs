//! Metrics collection.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolution steps by outcome
//! - `router_view_loads_total` (counter): view fetches by component, result
//! - `router_view_load_duration_seconds` (histogram): fetch latency
//! - `router_navigations_cancelled_total` (counter): superseded navigations
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no exporter is bundled
//! - Without an installed recorder every call is a no-op
//! - Only real fetches are counted, cache hits are not

use std::time::Instant;

/// Record one resolution step. `outcome` is redirect, view, fallback or no_match.
pub fn record_resolution(outcome: &'static str) {
    metrics::counter!("router_resolutions_total", "outcome" => outcome).increment(1);
}

/// Record a completed view fetch.
pub fn record_view_load(component: &str, success: bool, start: Instant) {
    let result = if success { "ok" } else { "error" };
    metrics::counter!(
        "router_view_loads_total",
        "component" => component.to_string(),
        "result" => result
    )
    .increment(1);
    metrics::histogram!(
        "router_view_load_duration_seconds",
        "component" => component.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a navigation cancelled before its view loaded.
pub fn record_navigation_cancelled() {
    metrics::counter!("router_navigations_cancelled_total").increment(1);
}
