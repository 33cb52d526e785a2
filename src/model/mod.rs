//! CPE data model.
//!
//! A [`Cpe`] is a fixed record of eleven [`Attribute`]s, each holding a
//! three-valued [`AttributeValue`]: a concrete string, the ANY wildcard, or
//! NA (not applicable).

mod attribute;
mod cpe;

pub use attribute::{Attribute, AttributeValue};
pub use cpe::{Cpe, CpeBuilder, CpePart};
