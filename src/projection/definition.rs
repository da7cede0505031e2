//! Parsed coordinate reference system definitions

use std::fmt;

use super::datum::Datum;
use super::factory::ProjectionFactory;
use super::handler::Projection;
use super::params::ProjParams;
use crate::errors::{MetroError, MetroResult};

/// Paris meridian east of Greenwich, in degrees
const PARIS_MERIDIAN: f64 = 2.337229166667;

/// A coordinate reference system built from a proj4 string
pub struct CrsDefinition {
    /// The parameter string this definition was parsed from
    pub source: String,
    projection: Box<dyn Projection>,
    datum: Datum,
    /// Prime meridian offset from Greenwich in radians
    from_greenwich: f64,
    /// Size of one linear unit in meters
    to_meter: f64,
}

impl CrsDefinition {
    /// Parse a proj4 parameter string
    pub fn parse(definition: &str) -> MetroResult<Self> {
        let params = ProjParams::parse(definition)?;
        let datum = Datum::from_params(&params)?;
        let projection = ProjectionFactory::create(&params, &datum.ellipsoid)?;

        let from_greenwich = match params.get_str("pm") {
            None => 0.0,
            Some(pm) => Self::prime_meridian(pm)?.to_radians(),
        };

        let to_meter = match params.get_f64("to_meter")? {
            Some(factor) => factor,
            None => match params.get_str("units") {
                None | Some("m") => 1.0,
                Some("km") => 1000.0,
                Some("cm") => 0.01,
                Some(other) => {
                    return Err(MetroError::InvalidDefinition(format!("unsupported units '{}'", other)))
                }
            },
        };

        Ok(CrsDefinition {
            source: definition.trim().to_string(),
            projection,
            datum,
            from_greenwich,
            to_meter,
        })
    }

    fn prime_meridian(pm: &str) -> MetroResult<f64> {
        match pm.to_lowercase().as_str() {
            "greenwich" => Ok(0.0),
            "paris" => Ok(PARIS_MERIDIAN),
            other => other.parse::<f64>().map_err(|_| {
                MetroError::InvalidDefinition(format!("unknown prime meridian '{}'", pm))
            }),
        }
    }

    /// Projection strategy of this system
    pub fn projection(&self) -> &dyn Projection {
        self.projection.as_ref()
    }

    /// Datum of this system
    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    /// Whether coordinates are longitude/latitude in degrees
    pub fn is_geographic(&self) -> bool {
        self.projection.is_geographic()
    }

    pub fn from_greenwich(&self) -> f64 {
        self.from_greenwich
    }

    pub fn to_meter(&self) -> f64 {
        self.to_meter
    }
}

impl fmt::Debug for CrsDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrsDefinition")
            .field("source", &self.source)
            .field("projection", &self.projection.name())
            .field("datum", &self.datum)
            .finish()
    }
}
