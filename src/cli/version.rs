//! Version command handler.

use super::EXIT_OK;
use crate::utils::compare_versions;
use anyhow::Result;
use std::cmp::Ordering;

/// `<`, `=` or `>`
#[must_use]
pub const fn version_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Run the version command: print how `a` orders against `b`.
pub fn run_version(a: &str, b: &str) -> Result<i32> {
    let ordering = compare_versions(a, b)?;
    tracing::debug!("{} vs {}: {:?}", a, b, ordering);
    println!("{}", version_symbol(ordering));
    Ok(EXIT_OK)
}
