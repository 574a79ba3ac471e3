//! Inspector setup
//!
//! Everything a session needs besides the gateway, built once from the
//! configuration and shared by every nested session.

use crate::config::InspectorConfig;
use crate::domain::services::{EnumeratorOptions, ShapeRegistry};
use crate::domain::value_objects::NumberFormat;

/// Engine setup shared by all sessions
#[derive(Debug, Clone)]
pub struct Inspector {
    pub registry: ShapeRegistry,
    pub format: NumberFormat,
    pub options: EnumeratorOptions,
}

impl Inspector {
    pub fn new(registry: ShapeRegistry, format: NumberFormat, options: EnumeratorOptions) -> Self {
        Self {
            registry,
            format,
            options,
        }
    }

    /// Standard registry with the configured precision and walk options
    pub fn from_config(config: &InspectorConfig) -> Self {
        Self::new(
            ShapeRegistry::standard(),
            config.number_format(),
            config.enumerator_options(),
        )
    }

    pub fn with_registry(mut self, registry: ShapeRegistry) -> Self {
        self.registry = registry;
        self
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::from_config(&InspectorConfig::default())
    }
}
