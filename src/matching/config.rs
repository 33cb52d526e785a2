//! Matching configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options controlling which attributes take part in a match and how they
/// are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchOptions {
    /// Compare the `part` attribute
    pub include_part: bool,
    /// Compare the `sw_edition` attribute
    pub include_sw_edition: bool,
    /// Compare `version` with dotted-version equality (so `8.0.*` matches
    /// `8.0.6001`) instead of string equality
    pub version_wildcards: bool,
    /// Compare concrete values case-insensitively
    pub ignore_case: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            include_part: true,
            include_sw_edition: false,
            version_wildcards: false,
            ignore_case: false,
        }
    }
}

impl MatchOptions {
    /// Every attribute compared, exact string equality.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            include_sw_edition: true,
            ..Self::default()
        }
    }

    /// Version wildcards and case-insensitive values.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            version_wildcards: true,
            ignore_case: true,
            ..Self::default()
        }
    }

    /// Look up a named preset (`default`, `strict`, `lenient`).
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "reference" => Some(Self::default()),
            "strict" | "exact" => Some(Self::strict()),
            "lenient" | "loose" => Some(Self::lenient()),
            _ => None,
        }
    }
}
