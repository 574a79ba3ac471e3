//! Configuration module for dbinspect
//!
//! Configuration hierarchy:
//! 1. Environment variables (DBINSPECT_*) (highest priority)
//! 2. Project config (.dbinspect.toml)
//! 3. User config (~/.config/dbinspect/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{load_or_default, load_with_warnings, with_env_overrides};
pub use types::{DisplayConfig, InspectorConfig, LoggingConfig, PropertiesConfig};
