//! Station access (entrance)

use serde::{Deserialize, Serialize};

use super::geo_point::GeoPoint;
use super::lax;
use crate::coordinate::ProjectedPoint;

/// An entrance of a stop area
///
/// Raw exports use the `acc*` column names; clean files use the field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Access {
    #[serde(alias = "accid")]
    pub id: String,
    #[serde(alias = "accname")]
    pub name: String,
    /// Short number shown on signage, when there is one
    #[serde(alias = "accshortname", default, deserialize_with = "lax::optional_integer")]
    pub short_name: Option<i64>,
    #[serde(alias = "accxespg2154", deserialize_with = "lax::integer")]
    pub x_lambert_93: i64,
    #[serde(alias = "accyespg2154", deserialize_with = "lax::integer")]
    pub y_lambert_93: i64,
    #[serde(alias = "accgeopoint")]
    pub geo_point: GeoPoint,
}

impl Access {
    /// Stored Lambert 93 position
    pub fn projected(&self) -> ProjectedPoint {
        ProjectedPoint::new(self.x_lambert_93 as f64, self.y_lambert_93 as f64)
    }
}
