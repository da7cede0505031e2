//! Projection engine
//!
//! A small proj4-compatible engine: definitions are parsed from parameter
//! strings, registered under an identifier and used to transform points.
//! Supported projections are `longlat`, `lcc` and `merc`.

mod datum;
mod definition;
mod ellipsoid;
mod factory;
mod handler;
mod lcc;
mod longlat;
mod math;
mod mercator;
mod params;
mod registry;
mod transform;
#[cfg(test)]
mod tests;

pub use self::datum::{Datum, DatumShift};
pub use self::definition::CrsDefinition;
pub use self::ellipsoid::Ellipsoid;
pub use self::factory::ProjectionFactory;
pub use self::handler::Projection;
pub use self::lcc::LambertConformalConic;
pub use self::longlat::LongLat;
pub use self::mercator::Mercator;
pub use self::params::ProjParams;
pub use self::registry::CrsRegistry;
pub use self::transform::Transformer;
