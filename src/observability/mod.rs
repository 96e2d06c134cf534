//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / views / navigation produce:
//!     → logging.rs (structured log events, one span per navigation)
//!     → metrics.rs (counters, histograms via the metrics facade)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (navigation_id, route, component) on every event
//! - Navigation ID flows through all events of a navigation
//! - Metrics are cheap and no-ops without a recorder

pub mod logging;
pub mod metrics;
