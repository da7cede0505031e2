//! Geographic point as stored in the data set

use serde::{Deserialize, Serialize};

/// Mean Earth radius (IUGG) in meters
const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

/// WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lon, lat }
    }

    /// Great-circle distance in meters (haversine)
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dphi = (other.lat - self.lat).to_radians();
        let dlam = (other.lon - self.lon).to_radians();

        let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlam / 2.0).sin().powi(2);
        2.0 * MEAN_EARTH_RADIUS * h.sqrt().min(1.0).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_one_degree_latitude() {
        let a = GeoPoint::new(48.0, 2.0);
        let b = GeoPoint::new(49.0, 2.0);
        assert!((a.distance_to(&b) - 111_195.0).abs() < 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
