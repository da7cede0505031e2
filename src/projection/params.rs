//! proj4 parameter string parsing
//!
//! A definition such as `+proj=lcc +lat_1=49 +no_defs` is split into
//! `key -> optional value` pairs. Keys the engine does not know about are
//! kept but ignored by the consumers.

use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{MetroError, MetroResult};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"^\+([A-Za-z_][A-Za-z0-9_]*)(?:=(.*))?$")
        .expect("token pattern is valid");
}

/// Parsed `+key=value` parameters of a proj4 definition
#[derive(Debug, Clone, Default)]
pub struct ProjParams {
    values: HashMap<String, Option<String>>,
}

impl ProjParams {
    /// Parse a proj4 parameter string
    pub fn parse(definition: &str) -> MetroResult<Self> {
        let mut values = HashMap::new();

        for token in definition.split_whitespace() {
            let captures = TOKEN.captures(token).ok_or_else(|| {
                MetroError::InvalidDefinition(format!("unexpected token '{}' in '{}'", token, definition))
            })?;
            let key = captures[1].to_lowercase();
            let value = captures.get(2).map(|m| m.as_str().to_string());
            values.insert(key, value);
        }

        if values.is_empty() {
            return Err(MetroError::InvalidDefinition("empty definition".to_string()));
        }

        Ok(ProjParams { values })
    }

    /// Whether a key is present, with or without a value
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Raw string value of a key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_deref())
    }

    /// Numeric value of a key, `None` when absent
    pub fn get_f64(&self, key: &str) -> MetroResult<Option<f64>> {
        match self.get_str(key) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
                MetroError::InvalidDefinition(format!("+{} expects a number, got '{}'", key, raw))
            }),
        }
    }

    /// Angle in degrees converted to radians, `None` when absent
    pub fn get_radians(&self, key: &str) -> MetroResult<Option<f64>> {
        Ok(self.get_f64(key)?.map(f64::to_radians))
    }

    /// Comma separated list of numbers
    pub fn get_list(&self, key: &str) -> MetroResult<Option<Vec<f64>>> {
        match self.get_str(key) {
            None => Ok(None),
            Some(raw) => raw
                .split(',')
                .map(|part| {
                    part.trim().parse::<f64>().map_err(|_| {
                        MetroError::InvalidDefinition(format!("+{} expects numbers, got '{}'", key, raw))
                    })
                })
                .collect::<MetroResult<Vec<f64>>>()
                .map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags_and_values() {
        let params = ProjParams::parse("+proj=lcc +lat_1=49 +no_defs +towgs84=0,0,0").unwrap();
        assert_eq!(params.get_str("proj"), Some("lcc"));
        assert_eq!(params.get_f64("lat_1").unwrap(), Some(49.0));
        assert!(params.has("no_defs"));
        assert_eq!(params.get_str("no_defs"), None);
        assert_eq!(params.get_list("towgs84").unwrap(), Some(vec![0.0, 0.0, 0.0]));
        assert_eq!(params.get_f64("lat_2").unwrap(), None);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let params = ProjParams::parse("+PROJ=longlat +Datum=WGS84").unwrap();
        assert_eq!(params.get_str("proj"), Some("longlat"));
        assert_eq!(params.get_str("datum"), Some("WGS84"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(ProjParams::parse("proj=lcc").is_err());
        assert!(ProjParams::parse("   ").is_err());
        let params = ProjParams::parse("+lat_0=north").unwrap();
        assert!(params.get_f64("lat_0").is_err());
    }
}
