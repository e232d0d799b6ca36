//! Packed symmetric distance matrix.

use crate::models::Point;

/// Pairwise distances between map points.
///
/// Distances over raw latitude/longitude are symmetric and zero on the
/// diagonal, so only the strict upper triangle is stored: n·(n−1)/2 values
/// instead of n².
///
/// # Examples
///
/// ```
/// use trashroute::models::Point;
/// use trashroute::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.get(2, 0), dm.get(0, 2));
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    upper: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes Euclidean distances between every pair of points.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut upper = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                upper.push(points[i].distance_to(&points[j]));
            }
        }
        Self { upper, size: n }
    }

    /// Returns the distance between locations `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        assert!(a < self.size && b < self.size, "location out of bounds");
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Less => self.upper[self.offset(a, b)],
            std::cmp::Ordering::Greater => self.upper[self.offset(b, a)],
        }
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    // Row i of the upper triangle starts after rows 0..i, which hold
    // (n-1) + (n-2) + ... + (n-i) entries.
    fn offset(&self, i: usize, j: usize) -> usize {
        i * (2 * self.size - i - 1) / 2 + (j - i - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
            Point::new(3.0, 0.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 4);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(1, 3) - 4.0).abs() < 1e-10);
        assert_eq!(dm.get(2, 2), 0.0);
    }

    #[test]
    fn test_every_pair_matches_point_distance() {
        let points = sample_points();
        let dm = DistanceMatrix::from_points(&points);
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate() {
                assert_eq!(dm.get(i, j), a.distance_to(b), "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_packed_storage_size() {
        assert_eq!(DistanceMatrix::from_points(&sample_points()).upper.len(), 6);
        assert!(DistanceMatrix::from_points(&[Point::new(1.0, 1.0)]).upper.is_empty());
    }

    #[test]
    fn test_empty_matrix() {
        let dm = DistanceMatrix::from_points(&[]);
        assert_eq!(dm.size(), 0);
    }

    #[test]
    #[should_panic(expected = "location out of bounds")]
    fn test_out_of_bounds() {
        DistanceMatrix::from_points(&sample_points()).get(0, 4);
    }
}
