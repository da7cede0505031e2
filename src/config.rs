//! Coordinate system configuration
//!
//! The converter pair and any extra systems are described in a TOML file.
//! A copy of `crs_definitions.toml` is embedded at compile time and used
//! unless the user supplies another file.

use std::fs;

use lazy_static::lazy_static;
use log::warn;

use crate::errors::{MetroError, MetroResult};
use crate::projection::CrsRegistry;

/// Lambert 93 (EPSG:2154)
pub const LAMBERT93_ID: &str = "EPSG:2154";
pub const LAMBERT93_DEFINITION: &str = "+proj=lcc +lat_1=49 +lat_2=44 +lat_0=46.5 +lon_0=3 +x_0=700000 +y_0=6600000 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs";

/// WGS84 latitude/longitude (EPSG:4326)
pub const WGS84_ID: &str = "EPSG:4326";
pub const WGS84_DEFINITION: &str = "+proj=longlat +datum=WGS84 +no_defs";

lazy_static! {
    // Parse the embedded definitions at first use
    static ref BUILTIN_CONFIG: ProjectionConfig = {
        let content = include_str!("../crs_definitions.toml");
        ProjectionConfig::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in CRS definitions, using defaults: {}", e);
            ProjectionConfig::default()
        })
    };
}

/// One named coordinate reference system
#[derive(Debug, Clone, PartialEq)]
pub struct CrsEntry {
    /// Identifier used for lookups, e.g. `EPSG:2154`
    pub id: String,
    /// Human readable name
    pub name: Option<String>,
    /// proj4 parameter string
    pub definition: String,
}

impl CrsEntry {
    pub fn new(id: &str, definition: &str) -> Self {
        CrsEntry {
            id: id.to_string(),
            name: None,
            definition: definition.to_string(),
        }
    }
}

/// Systems used by the coordinate converter plus extra registrations
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Projected (metric) side of the converter
    pub projected: CrsEntry,
    /// Geographic (degrees) side of the converter
    pub geographic: CrsEntry,
    /// Additional systems available to `transform`
    pub definitions: Vec<CrsEntry>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        ProjectionConfig {
            projected: CrsEntry::new(LAMBERT93_ID, LAMBERT93_DEFINITION),
            geographic: CrsEntry::new(WGS84_ID, WGS84_DEFINITION),
            definitions: Vec::new(),
        }
    }
}

impl ProjectionConfig {
    /// Configuration embedded in the binary
    pub fn builtin() -> &'static ProjectionConfig {
        &BUILTIN_CONFIG
    }

    /// Parse a configuration from a TOML string
    pub fn from_str(content: &str) -> MetroResult<Self> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| MetroError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let projected = Self::parse_entry(&table, "projected")?;
        let geographic = Self::parse_entry(&table, "geographic")?;

        let mut definitions = Vec::new();
        if let Some(extra) = table.get("definitions") {
            let extra = extra.as_table().ok_or_else(|| {
                MetroError::ConfigError("[definitions] must be a table".to_string())
            })?;
            for (id, value) in extra {
                let definition = value.as_str().ok_or_else(|| {
                    MetroError::ConfigError(format!("definition of {} must be a string", id))
                })?;
                definitions.push(CrsEntry::new(id, definition));
            }
        }

        Ok(ProjectionConfig {
            projected,
            geographic,
            definitions,
        })
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> MetroResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_entry(table: &toml::Table, section: &str) -> MetroResult<CrsEntry> {
        let entry = table
            .get(section)
            .and_then(|v| v.as_table())
            .ok_or_else(|| MetroError::ConfigError(format!("missing [{}] section", section)))?;

        let field = |key: &str| -> MetroResult<String> {
            entry
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| MetroError::ConfigError(format!("[{}] needs a string '{}'", section, key)))
        };

        Ok(CrsEntry {
            id: field("id")?,
            name: entry.get("name").and_then(|v| v.as_str()).map(str::to_string),
            definition: field("definition")?,
        })
    }

    /// All entries, converter pair first
    pub fn entries(&self) -> impl Iterator<Item = &CrsEntry> {
        [&self.projected, &self.geographic]
            .into_iter()
            .chain(self.definitions.iter())
    }

    /// Build a registry holding every configured system
    pub fn registry(&self) -> MetroResult<CrsRegistry> {
        let mut registry = CrsRegistry::new();
        for entry in self.entries() {
            registry.define(&entry.id, &entry.definition)?;
        }
        Ok(registry)
    }
}
