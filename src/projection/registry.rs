//! Registry of named coordinate reference systems

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use super::definition::CrsDefinition;
use super::transform::Transformer;
use crate::errors::{MetroError, MetroResult};

/// Maps identifiers such as `EPSG:2154` to parsed definitions
///
/// Identifiers are compared case-insensitively. A registry is filled once
/// and then shared read-only; transformers keep their own handles to the
/// definitions they use.
#[derive(Debug, Clone, Default)]
pub struct CrsRegistry {
    definitions: HashMap<String, Arc<CrsDefinition>>,
}

impl CrsRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        CrsRegistry::default()
    }

    fn key(identifier: &str) -> String {
        identifier.trim().to_uppercase()
    }

    /// Register (or replace) a definition under `identifier`
    pub fn define(&mut self, identifier: &str, parameters: &str) -> MetroResult<()> {
        let definition = CrsDefinition::parse(parameters).map_err(|e| match e {
            MetroError::InvalidDefinition(msg) => {
                MetroError::InvalidDefinition(format!("{}: {}", identifier, msg))
            }
            other => other,
        })?;

        debug!("Registered {} as {:?}", identifier, definition);
        self.definitions.insert(Self::key(identifier), Arc::new(definition));
        Ok(())
    }

    /// Whether `identifier` has been registered
    pub fn contains(&self, identifier: &str) -> bool {
        self.definitions.contains_key(&Self::key(identifier))
    }

    /// Look up a definition
    pub fn get(&self, identifier: &str) -> MetroResult<Arc<CrsDefinition>> {
        self.definitions
            .get(&Self::key(identifier))
            .cloned()
            .ok_or_else(|| MetroError::UnknownCrs(identifier.to_string()))
    }

    /// Registered identifiers in sorted order
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve a transformer between two registered systems
    pub fn transformer(&self, source: &str, target: &str) -> MetroResult<Transformer> {
        Ok(Transformer::new(self.get(source)?, self.get(target)?))
    }

    /// Transform one point between two registered systems
    ///
    /// Geographic coordinates are `(longitude, latitude)`.
    pub fn transform(&self, source: &str, target: &str, point: (f64, f64)) -> MetroResult<(f64, f64)> {
        Ok(self.transformer(source, target)?.convert(point))
    }
}
