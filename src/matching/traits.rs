//! Trait definitions for CPE matching strategies.

use crate::model::{Attribute, AttributeValue, Cpe};

/// A single attribute that failed to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMismatch {
    pub attribute: Attribute,
    pub left: AttributeValue,
    pub right: AttributeValue,
}

/// Human-readable explanation of why two CPEs matched (or didn't).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchExplanation {
    /// Whether every compared attribute matched
    pub is_match: bool,
    /// Attributes that were compared, in canonical order
    pub compared: Vec<Attribute>,
    /// Attributes that did not match
    pub mismatches: Vec<AttributeMismatch>,
}

impl MatchExplanation {
    /// Summary line such as `no match: version ("8.0" vs "9.0")`
    #[must_use]
    pub fn summary(&self) -> String {
        if self.is_match {
            return format!("match ({} attributes compared)", self.compared.len());
        }
        let reasons: Vec<String> = self
            .mismatches
            .iter()
            .map(|m| format!("{} ({} vs {})", m.attribute, describe(&m.left), describe(&m.right)))
            .collect();
        format!("no match: {}", reasons.join(", "))
    }
}

fn describe(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Value(v) => format!("{v:?}"),
        other => other.to_string(),
    }
}

/// Trait for CPE matching strategies.
pub trait CpeMatching: Send + Sync {
    /// Compare a single attribute.
    fn attr_match(&self, attr: Attribute, left: &AttributeValue, right: &AttributeValue) -> bool;

    /// Attributes taken into account, in canonical order.
    fn compared_attributes(&self) -> Vec<Attribute>;

    /// Whether two CPEs match.
    fn is_match(&self, a: &Cpe, b: &Cpe) -> bool {
        self.compared_attributes()
            .into_iter()
            .all(|attr| self.attr_match(attr, a.get(attr), b.get(attr)))
    }

    /// Explain a match decision attribute by attribute.
    fn explain(&self, a: &Cpe, b: &Cpe) -> MatchExplanation {
        let compared = self.compared_attributes();
        let mismatches: Vec<AttributeMismatch> = compared
            .iter()
            .copied()
            .filter(|attr| !self.attr_match(*attr, a.get(*attr), b.get(*attr)))
            .map(|attribute| AttributeMismatch {
                attribute,
                left: a.get(attribute).clone(),
                right: b.get(attribute).clone(),
            })
            .collect();

        MatchExplanation {
            is_match: mismatches.is_empty(),
            compared,
            mismatches,
        }
    }
}
