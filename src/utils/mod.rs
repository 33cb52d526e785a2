//! Shared utilities.

mod version;

pub use version::{compare_versions, Version};
