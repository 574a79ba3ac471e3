//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::MAX_PRECISION;
use crate::error::{InspectError, InspectResult};

use super::types::InspectorConfig;

pub use crate::domain::value_objects::ConfigWarning;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG: &str = ".dbinspect.toml";

/// Load configuration and collect non-fatal warnings (unknown keys,
/// out-of-range precision).
pub fn load_with_warnings(path: &Path) -> InspectResult<(InspectorConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: InspectorConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InspectError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    if config.display.precision > MAX_PRECISION {
        warnings.push(ConfigWarning {
            key: "precision".to_string(),
            file: path.to_path_buf(),
            line: find_line_number(&content, "precision"),
            suggestion: Some(MAX_PRECISION.to_string()),
        });
        config.display.precision = MAX_PRECISION;
    }

    for warning in &warnings {
        warn!(key = %warning.key, file = %warning.file.display(), line = ?warning.line, "configuration warning");
    }

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> InspectorConfig {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, _warnings)) => {
                debug!(path = %path.display(), "loaded configuration");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable configuration"),
        }
    }

    with_env_overrides(InspectorConfig::default())
}

/// Apply environment variable overrides (DBINSPECT_* prefix)
pub fn with_env_overrides(config: InspectorConfig) -> InspectorConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(super) fn apply_overrides(
    mut config: InspectorConfig,
    var: impl Fn(&str) -> Option<String>,
) -> InspectorConfig {
    if let Some(precision) = var("DBINSPECT_PRECISION") {
        match precision.trim().parse::<u8>() {
            Ok(value) => config.display.precision = value.min(MAX_PRECISION),
            Err(_) => warn!(value = %precision, "ignoring invalid DBINSPECT_PRECISION"),
        }
    }

    if let Some(filter) = var("DBINSPECT_LOG") {
        if !filter.trim().is_empty() {
            config.logging.filter = Some(filter);
        }
    }

    if let Some(val) = var("DBINSPECT_BACK_REFERENCES") {
        config.properties.back_references = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dbinspect").join("config.toml"))
}

/// Keys of every section, for "did you mean" suggestions
const KNOWN_KEYS: &[&str] = &[
    "display",
    "precision",
    "properties",
    "stop_ancestors",
    "back_references",
    "logging",
    "filter",
];

/// Line (1-based) where `key` is assigned or opens a table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start().trim_start_matches('[');
            line.strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with(['=', ']']))
        })
        .map(|index| index + 1)
}

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }
    row[b.len()]
}
