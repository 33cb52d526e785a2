//! **Parse, convert, match and compare Common Platform Enumeration (CPE) names.**
//!
//! `cpe-tools` reads a CPE in any of its three textual bindings into one
//! eleven-attribute model, writes it back out in any binding, decides whether
//! two CPEs match, and orders dotted version strings.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Cpe`], eleven [`AttributeValue`]s in canonical order.
//!   Each value is concrete, ANY (wildcard) or NA (not applicable).
//! - **[`parsers`]**: one parser per binding plus [`parse`], which picks the
//!   parser from the input's prefix.
//! - **[`writers`]**: one serializer per binding.
//! - **[`matching`]**: the wildcard-aware [`CpeMatcher`].
//! - **[`utils`]**: the dotted [`Version`] comparator.
//! - **[`escape`]**: the per-binding escaping rules.
//!
//! ## Getting Started
//!
//! ```
//! use cpe_tools::{parse, Cpe};
//!
//! let cpe = parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
//! assert_eq!(
//!     cpe.to_formatted_string(),
//!     "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta::::::"
//! );
//!
//! let any_ie: Cpe = "cpe:2.3:a:microsoft:internet_explorer:*:*:*:*:*:*:*:*".parse().unwrap();
//! assert!(cpe.matches(&any_ie));
//! ```
//!
//! ## Comparing Versions
//!
//! ```
//! use cpe_tools::Version;
//!
//! let old = Version::parse("1.9").unwrap();
//! let new = Version::parse("1.10").unwrap();
//! assert!(old < new);
//! assert!(Version::parse("1.*").unwrap() == new);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `cpe-tools` binary wraps these operations as `convert`, `match`,
//! `version` and `inspect` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod escape;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod utils;
pub mod writers;

// Re-export main types for convenience
pub use config::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, MatchingConfig, OutputConfig,
};
pub use config::{ConfigError, Validatable};
pub use error::{CpeError, MalformedKind, Result};
pub use matching::{matches, CpeMatcher, CpeMatching, MatchExplanation, MatchOptions};
pub use model::{Attribute, AttributeValue, Cpe, CpeBuilder, CpePart};
pub use parsers::{parse, parse_as, CpeFormat, CpeParser};
pub use utils::{compare_versions, Version};
pub use writers::CpeWriter;
