//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build table → Router → Views → Navigator
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then routing, then views
//! - The table is frozen before the first navigation

pub mod startup;

pub use startup::{build_navigator, prepare_config, start, StartupError};
