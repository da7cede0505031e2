//! Coordinate handling
//!
//! Identifiers for the supported coordinate systems, point types and the
//! Lambert 93 <-> WGS84 converter built on the projection engine.

mod converter;
mod crs;
mod point;

pub use self::converter::CoordinateConverter;
pub use self::crs::{CoordinateSystem, CoordinateSystemFactory};
pub use self::point::ProjectedPoint;
