//! Wildcard-aware CPE matching.
//!
//! The default rule compares ten attributes (`sw_edition` is left out) and
//! treats ANY as matching anything and NA as matching only NA:
//!
//! ```
//! use cpe_tools::{matching, parse};
//!
//! let wildcard = parse("cpe:2.3:*:*:*:*:*:*:*:*:*:*:*").unwrap();
//! let ie = parse("cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*").unwrap();
//! assert!(matching::matches(&wildcard, &ie));
//! assert!(matching::matches(&ie, &wildcard));
//! ```
//!
//! Matching is not an equivalence relation. Do not use it for
//! deduplication or as a hash key.
//!
//! [`CpeMatcher`] with [`MatchOptions`] adjusts which attributes take part
//! and how versions and case are compared.

mod config;
mod matcher;
mod traits;

pub use config::MatchOptions;
pub use matcher::CpeMatcher;
pub use traits::{AttributeMismatch, CpeMatching, MatchExplanation};

use crate::model::{Attribute, AttributeValue, Cpe};

/// Whether two CPEs match under the default rule.
#[must_use]
pub fn matches(a: &Cpe, b: &Cpe) -> bool {
    CpeMatcher::default().matches(a, b)
}

/// Default single-attribute rule: ANY matches anything, otherwise equality.
#[must_use]
pub fn attr_match(left: &AttributeValue, right: &AttributeValue) -> bool {
    CpeMatcher::default().attr_match(Attribute::Other, left, right)
}
