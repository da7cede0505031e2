//! Point transformation between two coordinate reference systems

use std::sync::Arc;

use super::datum::{geocentric_to_geodetic, geodetic_to_geocentric};
use super::definition::CrsDefinition;

/// A resolved source/target pair
///
/// Geographic systems take and return `(longitude, latitude)` in degrees,
/// projected systems `(x, y)` in their linear unit. Conversion never fails:
/// input outside the domain of a projection comes back as NaN.
#[derive(Debug, Clone)]
pub struct Transformer {
    source: Arc<CrsDefinition>,
    target: Arc<CrsDefinition>,
    shift_datum: bool,
}

impl Transformer {
    /// Create a transformer between two definitions
    pub fn new(source: Arc<CrsDefinition>, target: Arc<CrsDefinition>) -> Self {
        let shift_datum = source.datum().needs_shift_to(target.datum());
        Transformer {
            source,
            target,
            shift_datum,
        }
    }

    /// Transform one point
    pub fn convert(&self, (a, b): (f64, f64)) -> (f64, f64) {
        let (lam, phi) = self.to_geodetic(a, b);
        let (lam, phi) = self.shift(lam, phi);
        self.from_geodetic(lam, phi)
    }

    /// Transform a batch of points
    pub fn convert_all(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        points.iter().map(|&point| self.convert(point)).collect()
    }

    /// Transformer running in the opposite direction
    pub fn reversed(&self) -> Transformer {
        Transformer::new(Arc::clone(&self.target), Arc::clone(&self.source))
    }

    /// Source coordinates to geodetic radians relative to Greenwich
    fn to_geodetic(&self, a: f64, b: f64) -> (f64, f64) {
        let source = &self.source;
        let (lam, phi) = if source.is_geographic() {
            (a.to_radians(), b.to_radians())
        } else {
            let to_meter = source.to_meter();
            source.projection().inverse(a * to_meter, b * to_meter)
        };
        (lam + source.from_greenwich(), phi)
    }

    fn shift(&self, lam: f64, phi: f64) -> (f64, f64) {
        if !self.shift_datum {
            return (lam, phi);
        }

        let source = self.source.datum();
        let target = self.target.datum();

        let geocentric = geodetic_to_geocentric(&source.ellipsoid, lam, phi, 0.0);
        let geocentric = target.from_wgs84(source.to_wgs84(geocentric));
        let (lam, phi, _) = geocentric_to_geodetic(&target.ellipsoid, geocentric);

        (lam, phi)
    }

    /// Geodetic radians relative to Greenwich to target coordinates
    fn from_geodetic(&self, lam: f64, phi: f64) -> (f64, f64) {
        let target = &self.target;
        let lam = lam - target.from_greenwich();

        if target.is_geographic() {
            (lam.to_degrees(), phi.to_degrees())
        } else {
            let (x, y) = target.projection().forward(lam, phi);
            let to_meter = target.to_meter();
            (x / to_meter, y / to_meter)
        }
    }
}
