//! Configuration types for cpe-tools.

use crate::matching::MatchOptions;
use crate::parsers::CpeFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with
/// [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Matching configuration (preset and per-option overrides)
    pub matching: MatchingConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: CpeFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the matching preset.
    pub fn matching_preset(mut self, preset: impl Into<String>) -> Self {
        self.config.matching.preset = preset.into();
        self
    }

    /// Enable dotted-version comparison for the `version` attribute.
    pub const fn version_wildcards(mut self, enabled: bool) -> Self {
        self.config.matching.version_wildcards = Some(enabled);
        self
    }

    /// Compare concrete values case-insensitively.
    pub const fn ignore_case(mut self, enabled: bool) -> Self {
        self.config.matching.ignore_case = Some(enabled);
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit with code 1 when a match run finds nothing.
    pub const fn fail_on_no_match(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_no_match = fail;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Settings given explicitly on the command line.
///
/// Every `Some` field replaces the file value, even when it equals the
/// built-in default. The boolean flags can only switch a behavior on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<CpeFormat>,
    pub output_file: Option<PathBuf>,
    pub preset: Option<String>,
    pub include_part: Option<bool>,
    pub include_sw_edition: Option<bool>,
    pub version_wildcards: Option<bool>,
    pub ignore_case: Option<bool>,
    pub quiet: bool,
    pub fail_on_no_match: bool,
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Binding used when printing CPEs (wfn, uri, formatted-string)
    pub format: CpeFormat,
    /// Output file path (stdout if omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Matching settings.
///
/// `preset` selects a base [`MatchOptions`]; any option set here overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Preset: default, strict, lenient
    pub preset: String,
    /// Compare the `part` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_part: Option<bool>,
    /// Compare the `sw_edition` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sw_edition: Option<bool>,
    /// Treat `version` as a dotted version with a trailing wildcard
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_wildcards: Option<bool>,
    /// Compare concrete values case-insensitively
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
            include_part: None,
            include_sw_edition: None,
            version_wildcards: None,
            ignore_case: None,
        }
    }
}

impl MatchingConfig {
    /// Resolve the preset and overrides into matcher options.
    ///
    /// An unknown preset resolves to the defaults; [`Validatable`] reports it.
    ///
    /// [`Validatable`]: super::Validatable
    #[must_use]
    pub fn to_options(&self) -> MatchOptions {
        let mut options = MatchOptions::from_preset(&self.preset).unwrap_or_default();
        if let Some(v) = self.include_part {
            options.include_part = v;
        }
        if let Some(v) = self.include_sw_edition {
            options.include_sw_edition = v;
        }
        if let Some(v) = self.version_wildcards {
            options.version_wildcards = v;
        }
        if let Some(v) = self.ignore_case {
            options.ignore_case = v;
        }
        options
    }
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 if a match run finds no matching CPE
    pub fail_on_no_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, CpeFormat::FormattedString);
        assert_eq!(config.matching.preset, "default");
        assert_eq!(config.matching.to_options(), MatchOptions::default());
        assert!(!config.behavior.fail_on_no_match);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_format(CpeFormat::Uri)
            .matching_preset("strict")
            .ignore_case(true)
            .fail_on_no_match(true)
            .build();

        assert_eq!(config.output.format, CpeFormat::Uri);
        let options = config.matching.to_options();
        assert!(options.include_sw_edition);
        assert!(options.ignore_case);
        assert!(!options.version_wildcards);
        assert!(config.behavior.fail_on_no_match);
    }

    #[test]
    fn test_overrides_beat_preset() {
        let matching = MatchingConfig {
            preset: "lenient".to_string(),
            version_wildcards: Some(false),
            ..MatchingConfig::default()
        };
        let options = matching.to_options();
        assert!(!options.version_wildcards);
        assert!(options.ignore_case);
    }
}
