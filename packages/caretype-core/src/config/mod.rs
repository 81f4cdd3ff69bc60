//! Configuration
//!
//! Defaults cover every field, so an empty YAML document (or no file at all)
//! yields a working configuration.
//!
//! ```rust,ignore
//! use caretype_core::config::CaretypeConfig;
//!
//! let config = CaretypeConfig::from_yaml_file("caretype.yaml")?.with_env_overrides()?;
//! ```

pub mod caretype_config;
pub mod error;

pub use caretype_config::{CaretypeConfig, InferenceConfig, StatusBarConfig, MAX_DEPTH_ENV};
pub use error::{ConfigError, ConfigResult};
