//! Site Router Library
//!
//! Route table, resolver and lazy view loading for a single-page site.

pub mod config;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::SiteConfig;
pub use navigation::{Navigation, NavigationError, Navigator};
pub use routing::{RouteMatch, RouteTable, Router};
