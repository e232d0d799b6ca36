//! Open-path length evaluation.

use crate::distance::DistanceMatrix;
use crate::models::Point;

/// Total length of the open path `points[0] → points[1] → … → points[n-1]`.
///
/// There is no return leg to the start. Fewer than two points yield `0.0`.
///
/// # Examples
///
/// ```
/// use trashroute::models::Point;
/// use trashroute::evaluation::path_length;
///
/// let pts = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 0.0)];
/// assert!((path_length(&pts) - 9.0).abs() < 1e-10);
/// ```
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Total length of the open path visiting matrix locations in `order`.
pub fn order_length(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]
    }

    #[test]
    fn test_path_length_empty_and_single() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(5.0, 5.0)]), 0.0);
    }

    #[test]
    fn test_path_length_line() {
        assert!((path_length(&line_points()) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_order_length_matches_path_length() {
        let pts = line_points();
        let dm = DistanceMatrix::from_points(&pts);
        let order = vec![0, 3, 1, 2];
        let reordered: Vec<Point> = order.iter().map(|&i| pts[i]).collect();
        // 0→3→1→2 = 3 + 2 + 1
        assert!((order_length(&order, &dm) - 6.0).abs() < 1e-10);
        assert!((order_length(&order, &dm) - path_length(&reordered)).abs() < 1e-10);
    }

    #[test]
    fn test_order_length_short_orders() {
        let dm = DistanceMatrix::from_points(&line_points());
        assert_eq!(order_length(&[], &dm), 0.0);
        assert_eq!(order_length(&[2], &dm), 0.0);
    }
}
