//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Location (base + path, history mode)
//!     → matcher.rs (strip base, normalise)
//!     → table.rs (literal lookup, wildcard last)
//!     → router.rs (RouteMatch: Redirect | View | NoMatch)
//!
//! Table Construction (at startup):
//!     Route[] (config or presets.rs)
//!     → check invariants (names, paths, root, wildcard, redirects)
//!     → index literal paths and names
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once, immutable at runtime
//! - No regex, no params: literal paths and a single `*`
//! - Deterministic: same input always matches same route
//! - Literal match always beats the wildcard, whatever the declaration order

pub mod matcher;
pub mod presets;
pub mod route;
pub mod router;
pub mod table;

pub use matcher::{PathPattern, PatternError};
pub use presets::Preset;
pub use route::{Route, RouteSummary, RouteTarget};
pub use router::{ResolvedView, RouteError, RouteMatch, Router};
pub use table::{InvalidTable, RouteTable, TableError};
