//! Configuration module for cpe-tools.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument overrides
//!
//! # Quick Start
//!
//! ```
//! use cpe_tools::config::{AppConfig, Validatable};
//! use cpe_tools::CpeFormat;
//!
//! let config = AppConfig::builder()
//!     .output_format(CpeFormat::Uri)
//!     .matching_preset("lenient")
//!     .build();
//! assert!(config.is_valid());
//! assert!(config.matching.to_options().version_wildcards);
//! ```
//!
//! # Configuration File
//!
//! Place a `.cpe-tools.yaml` file in your project root or `~/.config/cpe-tools/`:
//!
//! ```yaml
//! output:
//!   format: uri
//! matching:
//!   preset: lenient
//! behavior:
//!   fail_on_no_match: true
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, MatchingConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.cpe-tools.yaml` config files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
