//! Constructive heuristics for ordering map points.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`order_path`] — Nearest-neighbor tour with optional 2-opt refinement
//!   and an input-order fallback

mod nearest_neighbor;
mod order_path;

pub use nearest_neighbor::nearest_neighbor;
pub use order_path::{order_path, PathOrderConfig};
