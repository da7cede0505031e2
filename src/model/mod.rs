//! Metro map domain model
//!
//! Shapes of the stop areas, accesses and lines handled by the data
//! pipeline. Each type reads both the raw open-data column names and its
//! own field names, and always writes its own field names.

mod access;
mod geo_point;
mod lax;
mod line;
mod relationships;
mod zone;
#[cfg(test)]
mod tests;

pub use self::access::Access;
pub use self::geo_point::GeoPoint;
pub use self::line::Line;
pub use self::relationships::{ZoneAccessRelationship, ZoneLineRelationship, METRO_MODE};
pub use self::zone::{Zone, METRO_STATION_TYPE};
