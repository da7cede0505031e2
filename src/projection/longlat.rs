//! Geographic pseudo-projection

use super::handler::Projection;

/// Identity projection for latitude/longitude systems (`+proj=longlat`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LongLat;

impl Projection for LongLat {
    fn forward(&self, lam: f64, phi: f64) -> (f64, f64) {
        (lam, phi)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn name(&self) -> &'static str {
        "longlat"
    }

    fn is_geographic(&self) -> bool {
        true
    }
}
