//! Path ordering entry point used by the map layer.

use serde::Deserialize;
use tracing::debug;

use super::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::RouteError;
use crate::evaluation::path_length;
use crate::local_search::two_opt_improve;
use crate::models::{Point, Tour};

/// Post-processing options for [`order_path`].
///
/// Deserializes from the camelCase options object the front end passes;
/// missing keys take their defaults.
///
/// # Examples
///
/// ```
/// use trashroute::constructive::PathOrderConfig;
///
/// let config = PathOrderConfig::default().with_two_opt(true);
/// assert!(config.refine_with_two_opt());
/// assert!(config.never_worse_than_input());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PathOrderConfig {
    refine_with_two_opt: bool,
    never_worse_than_input: bool,
}

impl Default for PathOrderConfig {
    fn default() -> Self {
        Self {
            refine_with_two_opt: false,
            never_worse_than_input: true,
        }
    }
}

impl PathOrderConfig {
    /// Enables or disables 2-opt refinement of the greedy tour.
    pub fn with_two_opt(mut self, enabled: bool) -> Self {
        self.refine_with_two_opt = enabled;
        self
    }

    /// Enables or disables falling back to the input order when it is shorter.
    pub fn with_input_fallback(mut self, enabled: bool) -> Self {
        self.never_worse_than_input = enabled;
        self
    }

    /// Whether the greedy tour is refined with 2-opt.
    pub fn refine_with_two_opt(&self) -> bool {
        self.refine_with_two_opt
    }

    /// Whether a shorter input order replaces the computed tour.
    pub fn never_worse_than_input(&self) -> bool {
        self.never_worse_than_input
    }
}

/// Orders map points for drawing a route line and numbered stop markers.
///
/// Builds a nearest-neighbor tour, optionally refines it with 2-opt, and
/// by default returns the input order instead whenever that order is
/// strictly shorter. The first point always stays first.
///
/// # Errors
///
/// Returns [`RouteError::NonFiniteCoordinate`] or [`RouteError::OutOfRange`]
/// for points the tour builder rejects.
///
/// # Examples
///
/// ```
/// use trashroute::models::Point;
/// use trashroute::constructive::{order_path, PathOrderConfig};
///
/// let stops = vec![
///     Point::new(6.9271, 79.8612),
///     Point::new(6.9500, 79.8700),
///     Point::new(6.9300, 79.8650),
/// ];
/// let tour = order_path(&stops, &PathOrderConfig::default()).unwrap();
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// assert_eq!(tour.stops()[2].sequence, 3);
/// ```
pub fn order_path(points: &[Point], config: &PathOrderConfig) -> Result<Tour, RouteError> {
    let mut tour = nearest_neighbor(points)?;
    if tour.len() < 3 {
        return Ok(tour);
    }

    if config.refine_with_two_opt {
        let distances = DistanceMatrix::from_points(points);
        let (order, _) = two_opt_improve(tour.order(), &distances);
        tour = Tour::from_order(points, order);
    }

    if config.never_worse_than_input {
        let input_length = path_length(points);
        if input_length < tour.length() {
            debug!(
                input_length,
                tour_length = tour.length(),
                "input order is shorter, keeping it"
            );
            tour = Tour::from_order(points, (0..points.len()).collect());
        }
    }

    Ok(tour)
}
