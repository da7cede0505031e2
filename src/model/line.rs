//! Transit line

use serde::{Deserialize, Serialize};

/// A metro line serving a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    /// Display colour, not present in the open-data exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
