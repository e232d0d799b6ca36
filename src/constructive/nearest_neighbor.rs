//! Nearest-neighbor tour builder.
//!
//! Starting from the first input point, always move to the nearest point
//! not yet visited until every point is in the tour.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space. Routes drawn on the collection map carry only a
//! handful of stops, so no spatial index is needed.
//!
//! # Reference
//!
//! The simplest constructive heuristic for TSP. Tours are typically 15-25%
//! longer than optimal, which is fine for drawing a plausible route line.

use tracing::{debug, warn};

use crate::error::RouteError;
use crate::models::{Point, Tour};

/// Orders points into a greedy nearest-neighbor tour.
///
/// The first input point is the fixed start. Distances are Euclidean over
/// raw latitude/longitude values. Among equidistant candidates the one with
/// the lowest input index wins.
///
/// An empty input yields an empty tour; a single point yields itself.
///
/// # Errors
///
/// Returns [`RouteError::NonFiniteCoordinate`] if any coordinate is NaN or
/// infinite, and [`RouteError::OutOfRange`] if a point lies outside
/// latitude ±90° / longitude ±180°. Bounded coordinates keep every
/// distance finite.
///
/// # Examples
///
/// ```
/// use trashroute::models::Point;
/// use trashroute::constructive::nearest_neighbor;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let tour = nearest_neighbor(&points).unwrap();
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// ```
pub fn nearest_neighbor(points: &[Point]) -> Result<Tour, RouteError> {
    ensure_coordinates(points)?;

    let n = points.len();
    if n == 0 {
        return Ok(Tour::empty());
    }

    let mut visited = vec![false; n];
    visited[0] = true; // fixed start

    let mut order = Vec::with_capacity(n);
    order.push(0);
    let mut current = 0;

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for i in 1..n {
            if visited[i] {
                continue;
            }
            let d = points[current].distance_to(&points[i]);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                order.push(next);
                current = next;
            }
            None => break,
        }
    }

    let tour = Tour::from_order(points, order);
    debug!(points = n, length = tour.length(), "built nearest-neighbor tour");
    Ok(tour)
}

/// Rejects NaN, infinite, or out-of-range coordinates.
fn ensure_coordinates(points: &[Point]) -> Result<(), RouteError> {
    for (index, p) in points.iter().enumerate() {
        let (latitude, longitude) = (p.latitude(), p.longitude());
        if !p.is_finite() {
            warn!(index, "rejecting point with non-finite coordinate");
            return Err(RouteError::NonFiniteCoordinate {
                index,
                latitude,
                longitude,
            });
        }
        if !p.in_range() {
            warn!(index, latitude, longitude, "rejecting out-of-range point");
            return Err(RouteError::OutOfRange {
                index,
                latitude,
                longitude,
            });
        }
    }
    Ok(())
}
