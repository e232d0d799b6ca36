//! Geographic point type.

use serde::{Deserialize, Serialize};

/// A geographic coordinate as supplied by the map front end.
///
/// Points carry no identity beyond their position. Distances between points
/// are plain Euclidean distances over the raw latitude/longitude values,
/// which is good enough for ordering markers on a map but is not a geodesic
/// distance.
///
/// # Examples
///
/// ```
/// use trashroute::models::Point;
///
/// let depot = Point::new(6.9271, 79.8612);
/// assert_eq!(depot.latitude(), 6.9271);
/// assert!(depot.is_finite());
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Creates a point. Coordinates are not checked here; the tour builder
    /// rejects non-finite and out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Returns `true` if latitude is within ±90° and longitude within ±180°.
    pub fn in_range(&self) -> bool {
        self.latitude.abs() <= 90.0 && self.longitude.abs() <= 180.0
    }

    /// Euclidean distance to another point on raw coordinate values.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }

    /// `[latitude, longitude]` pair, the shape map polylines expect.
    pub fn to_pair(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl From<(f64, f64)> for Point {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
