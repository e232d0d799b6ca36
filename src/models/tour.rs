//! Ordered tour and stop marker types.

use serde::Serialize;

use super::Point;
use crate::evaluation::path_length;

/// A sequential stop marker for map rendering.
///
/// `sequence` is the 1-based label drawn on the marker; `source_index` is
/// the position of the point in the caller's original array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// 1-based visit number.
    pub sequence: usize,
    /// Index of this point in the input sequence.
    pub source_index: usize,
    /// The visited point.
    pub point: Point,
}

/// The input points reordered into a visitation sequence.
///
/// A tour is always a permutation of the points it was built from, and its
/// first element is the first input point. `order[k]` is the input index of
/// the point visited at position `k`.
///
/// # Examples
///
/// ```
/// use trashroute::models::{Point, Tour};
///
/// let input = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 0.0)];
/// let tour = Tour::from_order(&input, vec![0, 2, 1]);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.points()[1], Point::new(1.0, 0.0));
/// assert!((tour.length() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    points: Vec<Point>,
    order: Vec<usize>,
}

impl Tour {
    /// Creates an empty tour.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Builds a tour by picking `points[order[k]]` for each position `k`.
    ///
    /// # Panics
    ///
    /// Panics if an index in `order` is out of bounds.
    pub fn from_order(points: &[Point], order: Vec<usize>) -> Self {
        let visited = order.iter().map(|&i| points[i]).collect();
        Self {
            points: visited,
            order,
        }
    }

    /// Points in visit order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Input indices in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total open-path length (no return leg to the start).
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }

    /// `[latitude, longitude]` pairs in visit order, for drawing the route line.
    pub fn polyline(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(Point::to_pair).collect()
    }

    /// Numbered stop markers in visit order.
    pub fn stops(&self) -> Vec<Stop> {
        self.points
            .iter()
            .zip(&self.order)
            .enumerate()
            .map(|(k, (&point, &source_index))| Stop {
                sequence: k + 1,
                source_index,
                point,
            })
            .collect()
    }

    /// Consumes the tour, returning the reordered points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
