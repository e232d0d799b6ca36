//! Tour length evaluation.
//!
//! Paths are open: a rendered route starts at the first stop and ends at the
//! last one, so no return leg is counted.

mod length;

pub use length::{order_length, path_length};
