//! Distance matrices.
//!
//! Provides a dense distance matrix over map points.

mod matrix;

pub use matrix::DistanceMatrix;
