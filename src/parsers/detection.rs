//! Prefix-based format detection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three textual CPE bindings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CpeFormat {
    /// Well-Formed Name literal, `wfn:[part="a",...]`
    Wfn,
    /// Legacy CPE 2.2 URI, `cpe:/a:vendor:product`
    Uri,
    /// CPE 2.3 formatted string, `cpe:2.3:a:vendor:product:...`
    #[default]
    #[serde(alias = "fs")]
    #[value(alias = "fs")]
    FormattedString,
}

impl CpeFormat {
    /// All formats, in detection order.
    pub const ALL: [Self; 3] = [Self::Wfn, Self::Uri, Self::FormattedString];

    /// Prefix that identifies this format.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Wfn => "wfn:",
            Self::Uri => "cpe:/",
            Self::FormattedString => "cpe:2.3:",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wfn => "WFN",
            Self::Uri => "URI",
            Self::FormattedString => "formatted string",
        }
    }

    /// Identify the format of `input` by its prefix.
    ///
    /// Returns `None` when no prefix matches.
    #[must_use]
    pub fn detect(input: &str) -> Option<Self> {
        let detected = Self::ALL
            .iter()
            .copied()
            .find(|format| input.starts_with(format.prefix()));

        tracing::trace!("Format detection for {:?}: {:?}", input, detected);
        detected
    }
}

impl fmt::Display for CpeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
