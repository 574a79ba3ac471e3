//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::EnumeratorOptions;
use crate::domain::value_objects::{NumberFormat, DEFAULT_PRECISION};
use crate::error::InspectResult;

use super::loader::{self, ConfigWarning};

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places of reals, points and vectors
    #[serde(default = "default_precision")]
    pub precision: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

/// Property sheet configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertiesConfig {
    /// Types where the member walk stops (exclusive)
    #[serde(default = "default_stop_ancestors")]
    pub stop_ancestors: Vec<String>,

    /// Show "Referenced by" (walks the whole store per selection)
    #[serde(default = "default_true")]
    pub back_references: bool,
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            stop_ancestors: default_stop_ancestors(),
            back_references: true,
        }
    }
}

fn default_stop_ancestors() -> Vec<String> {
    EnumeratorOptions::default().stop_ancestors
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter, used when RUST_LOG is unset
    #[serde(default)]
    pub filter: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub properties: PropertiesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl InspectorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> InspectResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> InspectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (DBINSPECT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.display.precision)
    }

    pub fn enumerator_options(&self) -> EnumeratorOptions {
        EnumeratorOptions {
            stop_ancestors: self.properties.stop_ancestors.clone(),
            back_references: self.properties.back_references,
        }
    }
}
