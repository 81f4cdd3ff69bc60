//! Configuration schema (YAML v1) and validation

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};

/// Environment variable overriding `inference.max_resolution_depth`
pub const MAX_DEPTH_ENV: &str = "CARETYPE_MAX_RESOLUTION_DEPTH";

const SUPPORTED_VERSIONS: &[u32] = &[1];
const MAX_RESOLUTION_DEPTH_LIMIT: usize = 1024;

/// Top-level configuration (schema v1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaretypeConfig {
    /// Schema version (always 1 for v1)
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub status_bar: StatusBarConfig,
}

/// Type inference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Maximum number of reference hops followed while classifying one value.
    /// Past this depth the label degrades to `"?"`.
    #[serde(default = "default_max_resolution_depth")]
    pub max_resolution_depth: usize,
}

/// Status bar presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusBarConfig {
    /// Widget identifier reported to the host
    #[serde(default = "default_widget_id")]
    pub widget_id: String,

    /// Label shown when no variable is under the cursor
    #[serde(default = "default_empty_label")]
    pub empty_label: String,

    /// Name shown when no variable is under the cursor
    #[serde(default = "default_unknown_name")]
    pub unknown_name: String,
}

fn default_version() -> u32 {
    1
}
fn default_max_resolution_depth() -> usize {
    32
}
fn default_widget_id() -> String {
    "CaretTypeStatusBar".to_string()
}
fn default_empty_label() -> String {
    ":(".to_string()
}
fn default_unknown_name() -> String {
    "unknown :(".to_string()
}

impl Default for CaretypeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            inference: InferenceConfig::default(),
            status_bar: StatusBarConfig::default(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_resolution_depth: default_max_resolution_depth(),
        }
    }
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            widget_id: default_widget_id(),
            empty_label: default_empty_label(),
            unknown_name: default_unknown_name(),
        }
    }
}

impl InferenceConfig {
    /// Builder-style setter for the hop limit
    pub fn max_resolution_depth(mut self, depth: usize) -> Self {
        self.max_resolution_depth = depth;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_resolution_depth == 0 || self.max_resolution_depth > MAX_RESOLUTION_DEPTH_LIMIT
        {
            return Err(ConfigError::range_with_hint(
                "max_resolution_depth",
                self.max_resolution_depth,
                1,
                MAX_RESOLUTION_DEPTH_LIMIT,
                "At least one hop is needed to resolve `x = y`",
            ));
        }
        Ok(())
    }
}

impl StatusBarConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("widget_id", &self.widget_id),
            ("empty_label", &self.empty_label),
            ("unknown_name", &self.unknown_name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "status_bar.{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

impl CaretypeConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // An empty document deserializes to unit, not to a map
        let config: CaretypeConfig = if content.trim().is_empty() {
            CaretypeConfig::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loading configuration from {}", path.as_ref().display());
        Self::from_yaml_str(&content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            let depth = raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Validation(format!(
                    "{} must be a positive integer, got '{}'",
                    MAX_DEPTH_ENV, raw
                ))
            })?;
            self.inference.max_resolution_depth = depth;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        self.inference.validate()?;
        self.status_bar.validate()
    }
}
