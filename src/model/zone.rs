//! Stop area (zone d'arrêt)

use serde::{Deserialize, Serialize};

use super::access::Access;
use super::lax;
use super::line::Line;

/// `type` value of metro stations
pub const METRO_STATION_TYPE: &str = "metroStation";

/// A stop area with its accesses and lines
///
/// Raw exports use the `zda*` column names. `accesses` and `lines` are
/// absent from raw exports and filled in by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(alias = "zdaid")]
    pub id: String,
    #[serde(alias = "zdaname")]
    pub name: String,
    #[serde(rename = "type", alias = "zdatype", default)]
    pub kind: Option<String>,
    #[serde(alias = "zdatown")]
    pub town: String,
    #[serde(alias = "zdapostalregion")]
    pub postal_region: String,
    #[serde(alias = "zdaxepsg2154", deserialize_with = "lax::integer")]
    pub x_lambert_93: i64,
    #[serde(alias = "zdayepsg2154", deserialize_with = "lax::integer")]
    pub y_lambert_93: i64,
    #[serde(default)]
    pub accesses: Vec<Access>,
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Zone {
    pub fn is_metro_station(&self) -> bool {
        self.kind.as_deref() == Some(METRO_STATION_TYPE)
    }
}
