//! Conversion between the projected and the geographic system
//!
//! The converter is built once from a registry and is immutable afterwards;
//! it can be shared between threads. Conversions never fail: input outside
//! the domain of the projection comes back as NaN.

use log::debug;

use super::point::ProjectedPoint;
use crate::config::ProjectionConfig;
use crate::errors::MetroResult;
use crate::model::GeoPoint;
use crate::projection::{CrsRegistry, Transformer};

/// Bidirectional converter between a projected system (Lambert 93 by
/// default) and a geographic one (WGS84 by default)
#[derive(Debug, Clone)]
pub struct CoordinateConverter {
    to_geographic: Transformer,
    to_projected: Transformer,
}

impl CoordinateConverter {
    /// Resolve both directions between two registered systems
    pub fn new(registry: &CrsRegistry, projected_id: &str, geographic_id: &str) -> MetroResult<Self> {
        let to_geographic = registry.transformer(projected_id, geographic_id)?;
        let to_projected = registry.transformer(geographic_id, projected_id)?;

        debug!("Coordinate converter ready: {} <-> {}", projected_id, geographic_id);

        Ok(CoordinateConverter {
            to_geographic,
            to_projected,
        })
    }

    /// Converter for the pair named in a configuration
    pub fn from_config(config: &ProjectionConfig) -> MetroResult<Self> {
        let registry = config.registry()?;
        Self::new(&registry, &config.projected.id, &config.geographic.id)
    }

    /// Lambert 93 <-> WGS84 converter from the built-in definitions
    pub fn lambert93() -> MetroResult<Self> {
        Self::from_config(ProjectionConfig::builtin())
    }

    /// Projected (x, y) to geographic, returned as (latitude, longitude)
    pub fn to_geographic(&self, x: f64, y: f64) -> (f64, f64) {
        let (lon, lat) = self.to_geographic.convert((x, y));
        (lat, lon)
    }

    /// Geographic latitude/longitude to projected, returned as (x, y)
    pub fn to_projected(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        self.to_projected.convert((longitude, latitude))
    }

    /// Projected coordinates as a [`GeoPoint`]
    pub fn geo_point(&self, x: f64, y: f64) -> GeoPoint {
        let (lat, lon) = self.to_geographic(x, y);
        GeoPoint { lon, lat }
    }

    /// A [`GeoPoint`] as projected coordinates
    pub fn projected_point(&self, point: &GeoPoint) -> ProjectedPoint {
        self.to_projected(point.lat, point.lon).into()
    }
}
