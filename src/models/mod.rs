//! Domain model types for route ordering.
//!
//! Points are the raw coordinates handed over by the map layer; a tour is
//! those points reordered into a visitation sequence.

mod point;
mod tour;

pub use point::Point;
pub use tour::{Stop, Tour};
