//! Join records between zones, accesses and lines

use serde::{Deserialize, Serialize};

use super::lax;

/// Transport mode of lines kept by the pipeline
pub const METRO_MODE: &str = "METRO";

/// Links an access to the zone it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAccessRelationship {
    #[serde(alias = "zdaid")]
    pub zone_id: String,
    #[serde(alias = "accid")]
    pub access_id: String,
}

/// Links a line to a zone it serves
///
/// The raw station export nests the pictogram URL under `picto.url` and
/// may give the zone id as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawZoneLineRelationship")]
pub struct ZoneLineRelationship {
    pub zone_id: String,
    pub line_id: String,
    pub line_name: String,
    pub line_icon_url: Option<String>,
    pub mode: String,
}

impl ZoneLineRelationship {
    pub fn is_metro(&self) -> bool {
        self.mode == METRO_MODE
    }
}

#[derive(Deserialize)]
struct Picto {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Deserialize)]
struct RawZoneLineRelationship {
    #[serde(alias = "id_ref_zda", deserialize_with = "lax::string_or_number")]
    zone_id: String,
    #[serde(alias = "idrefliga")]
    line_id: String,
    #[serde(alias = "res_com")]
    line_name: String,
    #[serde(default)]
    picto: Option<Picto>,
    #[serde(default)]
    line_icon_url: Option<String>,
    mode: String,
}

impl From<RawZoneLineRelationship> for ZoneLineRelationship {
    fn from(raw: RawZoneLineRelationship) -> Self {
        let line_icon_url = raw.picto.and_then(|p| p.url).or(raw.line_icon_url);
        ZoneLineRelationship {
            zone_id: raw.zone_id,
            line_id: raw.line_id,
            line_name: raw.line_name,
            line_icon_url,
            mode: raw.mode,
        }
    }
}
