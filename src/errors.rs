//! Custom error types for metrokit

use std::fmt;
use std::io;

/// Error types for projection setup, configuration and data preparation
#[derive(Debug)]
pub enum MetroError {
    /// I/O error
    IoError(io::Error),
    /// JSON (de)serialization error
    JsonError(serde_json::Error),
    /// Malformed or incomplete configuration file
    ConfigError(String),
    /// proj4 definition string that cannot be parsed
    InvalidDefinition(String),
    /// Projection name not handled by the engine
    UnsupportedProjection(String),
    /// Coordinate system identifier that was never registered
    UnknownCrs(String),
    /// Zone/access relationship pointing at an access that does not exist
    MissingAccess { zone_id: String, access_id: String },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for MetroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetroError::IoError(e) => write!(f, "I/O error: {}", e),
            MetroError::JsonError(e) => write!(f, "JSON error: {}", e),
            MetroError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MetroError::InvalidDefinition(msg) => write!(f, "Invalid CRS definition: {}", msg),
            MetroError::UnsupportedProjection(name) => write!(f, "Unsupported projection: {}", name),
            MetroError::UnknownCrs(id) => write!(f, "Unknown coordinate system: {}", id),
            MetroError::MissingAccess { zone_id, access_id } => write!(
                f,
                "Access {} referenced by zone {} not found",
                access_id, zone_id
            ),
            MetroError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for MetroError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MetroError::IoError(e) => Some(e),
            MetroError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MetroError {
    fn from(error: io::Error) -> Self {
        MetroError::IoError(error)
    }
}

impl From<serde_json::Error> for MetroError {
    fn from(error: serde_json::Error) -> Self {
        MetroError::JsonError(error)
    }
}

impl From<String> for MetroError {
    fn from(msg: String) -> Self {
        MetroError::GenericError(msg)
    }
}

/// Result type for metrokit operations
pub type MetroResult<T> = Result<T, MetroError>;
