//! Factory for creating projections from proj4 parameters

use super::ellipsoid::Ellipsoid;
use super::handler::Projection;
use super::lcc::LambertConformalConic;
use super::longlat::LongLat;
use super::mercator::Mercator;
use super::params::ProjParams;
use crate::errors::{MetroError, MetroResult};

/// Factory for creating projection strategies
pub struct ProjectionFactory;

impl ProjectionFactory {
    /// Create the projection named by `+proj`
    pub fn create(params: &ProjParams, ellipsoid: &Ellipsoid) -> MetroResult<Box<dyn Projection>> {
        let name = params.get_str("proj").ok_or_else(|| {
            MetroError::InvalidDefinition("missing +proj parameter".to_string())
        })?;

        match name.to_lowercase().as_str() {
            "longlat" | "latlong" | "lonlat" | "latlon" => Ok(Box::new(LongLat)),
            "lcc" => Ok(Box::new(LambertConformalConic::from_params(params, ellipsoid)?)),
            "merc" => Ok(Box::new(Mercator::from_params(params, ellipsoid)?)),
            other => Err(MetroError::UnsupportedProjection(format!(
                "{} (supported: {})",
                other,
                Self::supported_projections().join(", ")
            ))),
        }
    }

    /// Names accepted for `+proj`
    pub fn supported_projections() -> &'static [&'static str] {
        &["longlat", "latlong", "lonlat", "latlon", "lcc", "merc"]
    }
}
