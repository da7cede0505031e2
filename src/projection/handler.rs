//! Projection strategy trait definition

use std::fmt::Debug;

/// Strategy trait for a map projection
///
/// Angles are in radians relative to Greenwich after the prime meridian has
/// been applied; projected coordinates are in meters, false easting and
/// northing included. Out-of-domain input yields NaN rather than an error.
pub trait Projection: Send + Sync + Debug {
    /// Geodetic (longitude, latitude) to projected (x, y)
    fn forward(&self, lam: f64, phi: f64) -> (f64, f64);

    /// Projected (x, y) to geodetic (longitude, latitude)
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);

    /// proj4 name of this projection
    fn name(&self) -> &'static str;

    /// Whether coordinates are angular (degrees at the interface)
    fn is_geographic(&self) -> bool {
        false
    }
}
