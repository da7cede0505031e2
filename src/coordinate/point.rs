//! Point structures for the two sides of the converter

use std::fmt;

/// A position in a projected system, meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Easting
    pub x: f64,
    /// Northing
    pub y: f64,
}

impl ProjectedPoint {
    /// Create a new projected point
    pub fn new(x: f64, y: f64) -> Self {
        ProjectedPoint { x, y }
    }

    /// Coordinates in (x, y) order
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Planar distance to another point in meters
    pub fn distance_to(&self, other: &ProjectedPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for ProjectedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        ProjectedPoint::new(x, y)
    }
}

impl fmt::Display for ProjectedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
