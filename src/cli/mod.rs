//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements one subcommand and returns the process exit code.

mod convert;
mod inspect;
mod matches;
mod output;
mod version;

pub use convert::{render_convert, run_convert};
pub use inspect::{run_inspect, AttributeReport, InspectReport};
pub use matches::{find_matches, run_match, MatchCommand, MatchOutcome};
pub use output::{write_output, OutputTarget};
pub use version::{run_version, version_symbol};

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code when a match run finds nothing and `fail_on_no_match` is set
pub const EXIT_NO_MATCH: i32 = 1;
