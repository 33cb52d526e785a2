//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".cpe-tools.yaml",
    ".cpe-tools.yml",
    "cpe-tools.yaml",
    "cpe-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/cpe-tools/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist, searching defaults", path.display());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("cpe-tools")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Command-line Overrides
// ============================================================================

impl AppConfig {
    /// Layer command-line settings over this config.
    ///
    /// Whatever the user passed wins, including a value equal to the default
    /// (`--to formatted-string` over a file that says `uri`).
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }

        if let Some(preset) = &overrides.preset {
            self.matching.preset.clone_from(preset);
        }
        if overrides.include_part.is_some() {
            self.matching.include_part = overrides.include_part;
        }
        if overrides.include_sw_edition.is_some() {
            self.matching.include_sw_edition = overrides.include_sw_edition;
        }
        if overrides.version_wildcards.is_some() {
            self.matching.version_wildcards = overrides.version_wildcards;
        }
        if overrides.ignore_case.is_some() {
            self.matching.ignore_case = overrides.ignore_case;
        }

        if overrides.quiet {
            self.behavior.quiet = true;
        }
        if overrides.fail_on_no_match {
            self.behavior.fail_on_no_match = true;
        }
    }

    /// Load from file and apply CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r"# cpe-tools configuration
# Place this file at .cpe-tools.yaml in your project root or ~/.config/cpe-tools/
#
# CLI arguments always override file settings.

# Output configuration
output:
  # Format: wfn, uri, formatted-string
  format: formatted-string
  # Output file path (omit for stdout)
  # file: matches.txt

# Matching configuration
matching:
  # Preset: default, strict, lenient
  preset: default
  # Overrides, each optional
  # include_part: true
  # include_sw_edition: false
  # version_wildcards: false
  # ignore_case: false

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 1 if a match run finds nothing
  fail_on_no_match: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
