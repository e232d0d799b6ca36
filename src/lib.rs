//! # trashroute
//!
//! Client-side logic for the TrashRoute waste-collection marketplace:
//! ordering collection stops for the route map, and validating the
//! household and company signup forms.
//!
//! ## Modules
//!
//! - [`models`] — Map points and ordered tours
//! - [`distance`] — Distance matrix over map points
//! - [`evaluation`] — Open-path length
//! - [`constructive`] — Nearest-neighbor tour builder and [`order_path`](constructive::order_path)
//! - [`local_search`] — Open-path 2-opt refinement
//! - [`validation`] — Declarative form schemas, sanitizers, password strength
//! - [`error`] — Error types
//!
//! With the `wasm` feature the same operations are exported to JavaScript;
//! with the `cli` feature a `trashroute` binary wraps them for the shell.

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod validation;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use constructive::{nearest_neighbor, order_path, PathOrderConfig};
pub use error::{RouteError, SchemaError};
pub use models::{Point, Stop, Tour};
pub use validation::{FormData, FormKind, FormSchema};
