//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, BASE_URL override)
//!     → validation.rs (semantic checks, route table invariants)
//!     → SiteConfig (validated, immutable)
//!     → lifecycle::startup builds the route table once
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; the route table never changes afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError, ConfigOverrides};
pub use schema::{LogFormat, ObservabilityConfig, RouteConfig, RouterConfig, SiteConfig, ViewsConfig};
pub use validation::ValidationError;
