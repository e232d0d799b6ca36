//! Open-path 2-opt improvement with a fixed start.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < j < n`, compute the change in length
//! from reversing the segment `r[i..=j]`:
//!
//! ```text
//! delta = d(r[i-1], r[j]) + d(r[i], r[j+1]) - d(r[i-1], r[i]) - d(r[j], r[j+1])
//! ```
//!
//! The second pair of terms is absent when `j` is the last position, since
//! the path does not return to its start. If delta < 0, reverse the segment
//! and keep going; repeat until a full pass finds no improvement
//! (first-improvement strategy). Position 0 never moves.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::evaluation::order_length;

/// Applies 2-opt to an open path given as location indices.
///
/// Returns the improved order and its total length. The first location
/// stays first.
///
/// # Examples
///
/// ```
/// use trashroute::models::Point;
/// use trashroute::distance::DistanceMatrix;
/// use trashroute::local_search::two_opt_improve;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let (improved, dist) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!((dist - 3.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(order: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = order.to_vec();
    let n = current.len();
    if n < 3 {
        let dist = order_length(&current, distances);
        return (current, dist);
    }

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(&current, distances, i, j) < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let dist = order_length(&current, distances);
    (current, dist)
}

/// Computes the length change from reversing `order[i..=j]`.
///
/// Before: ... - order[i-1] - order[i] - ... - order[j] - order[j+1] - ...
/// After:  ... - order[i-1] - order[j] - ... - order[i] - order[j+1] - ...
fn two_opt_delta(order: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let prev = order[i - 1];
    let mut old_cost = distances.get(prev, order[i]);
    let mut new_cost = distances.get(prev, order[j]);

    if let Some(&next) = order.get(j + 1) {
        old_cost += distances.get(order[j], next);
        new_cost += distances.get(order[i], next);
    }

    new_cost - old_cost
}
