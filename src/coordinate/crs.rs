//! Coordinate Reference System identifiers

use crate::errors::{MetroError, MetroResult};

/// Identifier for common coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// RGF93 / Lambert-93 (EPSG:2154)
    Lambert93,
    /// WGS 84 (EPSG:4326)
    WGS84,
    /// Web Mercator (EPSG:3857)
    WebMercator,
    /// Other EPSG code
    Other(u32),
}

impl CoordinateSystem {
    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        match self {
            CoordinateSystem::Lambert93 => 2154,
            CoordinateSystem::WGS84 => 4326,
            CoordinateSystem::WebMercator => 3857,
            CoordinateSystem::Other(code) => *code,
        }
    }

    /// Registry identifier, e.g. `EPSG:2154`
    pub fn identifier(&self) -> String {
        format!("EPSG:{}", self.epsg_code())
    }

    /// Get a description of this coordinate system
    pub fn description(&self) -> String {
        match self {
            CoordinateSystem::Lambert93 => "RGF93 / Lambert-93 (EPSG:2154)".to_string(),
            CoordinateSystem::WGS84 => "WGS 84 (EPSG:4326)".to_string(),
            CoordinateSystem::WebMercator => "Web Mercator (EPSG:3857)".to_string(),
            CoordinateSystem::Other(code) => format!("EPSG:{}", code),
        }
    }

    /// Whether coordinates are expressed in degrees
    pub fn is_geographic(&self) -> bool {
        matches!(self, CoordinateSystem::WGS84)
    }
}

/// Factory for creating coordinate systems
pub struct CoordinateSystemFactory;

impl CoordinateSystemFactory {
    /// Create a coordinate system from an EPSG code
    pub fn from_epsg(epsg: u32) -> CoordinateSystem {
        match epsg {
            2154 => CoordinateSystem::Lambert93,
            4326 => CoordinateSystem::WGS84,
            3857 => CoordinateSystem::WebMercator,
            _ => CoordinateSystem::Other(epsg),
        }
    }

    /// Parse a coordinate system from a string (e.g. "EPSG:2154" or "4326")
    pub fn from_string(crs_str: &str) -> MetroResult<CoordinateSystem> {
        let crs_str = crs_str.trim().to_uppercase();
        let code = crs_str.strip_prefix("EPSG:").unwrap_or(&crs_str);

        code.parse::<u32>()
            .map(Self::from_epsg)
            .map_err(|_| MetroError::UnknownCrs(format!("Unsupported CRS format: {}", crs_str)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(CoordinateSystemFactory::from_string("EPSG:2154").unwrap(), CoordinateSystem::Lambert93);
        assert_eq!(CoordinateSystemFactory::from_string(" epsg:4326 ").unwrap(), CoordinateSystem::WGS84);
        assert_eq!(CoordinateSystemFactory::from_string("3857").unwrap(), CoordinateSystem::WebMercator);
        assert_eq!(CoordinateSystemFactory::from_string("27572").unwrap(), CoordinateSystem::Other(27572));
        assert!(CoordinateSystemFactory::from_string("lambert").is_err());
    }

    #[test]
    fn test_identifier() {
        assert_eq!(CoordinateSystem::Lambert93.identifier(), "EPSG:2154");
        assert_eq!(CoordinateSystem::Other(27572).identifier(), "EPSG:27572");
        assert!(CoordinateSystem::WGS84.is_geographic());
        assert!(!CoordinateSystem::Lambert93.is_geographic());
    }
}
