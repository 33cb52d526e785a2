//! Attribute-wildcard CPE matcher.

use super::config::MatchOptions;
use super::traits::CpeMatching;
use crate::model::{Attribute, AttributeValue, Cpe};
use crate::utils::Version;

/// Wildcard-aware CPE matcher.
///
/// Two attribute values match when either is ANY or when they are equal; NA
/// only equals NA. The relation is symmetric but not transitive: an ANY
/// version matches both `8.0` and `9.0`, which do not match each other.
#[derive(Debug, Clone, Default)]
pub struct CpeMatcher {
    options: MatchOptions,
}

impl CpeMatcher {
    /// Create a matcher with the given options
    #[must_use]
    pub const fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// The options in use
    #[must_use]
    pub const fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Whether `a` and `b` match under this matcher's options.
    #[must_use]
    pub fn matches(&self, a: &Cpe, b: &Cpe) -> bool {
        let matched = self.is_match(a, b);
        tracing::trace!("Match {} vs {}: {}", a, b, matched);
        matched
    }

    fn values_equal(&self, left: &str, right: &str) -> bool {
        if self.options.ignore_case {
            left.to_lowercase() == right.to_lowercase()
        } else {
            left == right
        }
    }

    fn versions_equal(&self, left: &str, right: &str) -> bool {
        match (Version::parse(left), Version::parse(right)) {
            (Ok(a), Ok(b)) => a == b,
            _ => {
                tracing::debug!(
                    "Falling back to string comparison for versions {:?} and {:?}",
                    left,
                    right
                );
                self.values_equal(left, right)
            }
        }
    }
}

impl CpeMatching for CpeMatcher {
    fn attr_match(&self, attr: Attribute, left: &AttributeValue, right: &AttributeValue) -> bool {
        match (left, right) {
            (AttributeValue::Any, _) | (_, AttributeValue::Any) => true,
            (AttributeValue::Na, AttributeValue::Na) => true,
            (AttributeValue::Value(l), AttributeValue::Value(r)) => {
                if attr == Attribute::Version && self.options.version_wildcards {
                    self.versions_equal(l, r)
                } else {
                    self.values_equal(l, r)
                }
            }
            _ => false,
        }
    }

    fn compared_attributes(&self) -> Vec<Attribute> {
        Attribute::ALL
            .iter()
            .copied()
            .filter(|attr| match attr {
                Attribute::Part => self.options.include_part,
                Attribute::SwEdition => self.options.include_sw_edition,
                _ => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse;

    fn cpe(s: &str) -> Cpe {
        parse(s).unwrap()
    }

    #[test]
    fn test_default_skips_sw_edition() {
        let a = Cpe::builder().part("a").sw_edition("pro").build();
        let b = Cpe::builder().part("a").sw_edition("home").build();
        assert!(CpeMatcher::default().matches(&a, &b));
        assert!(!CpeMatcher::new(MatchOptions::strict()).matches(&a, &b));
    }

    #[test]
    fn test_part_can_be_excluded() {
        let a = Cpe::builder().part("a").vendor("x").build();
        let o = Cpe::builder().part("o").vendor("x").build();
        assert!(!CpeMatcher::default().matches(&a, &o));

        let options = MatchOptions {
            include_part: false,
            ..MatchOptions::default()
        };
        assert!(CpeMatcher::new(options).matches(&a, &o));
    }

    #[test]
    fn test_version_wildcards() {
        let pattern = cpe("cpe:2.3:a:microsoft:internet_explorer:8.0.*:beta:*:*:*:*:*:*");
        let concrete = cpe("cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*");
        let newer = cpe("cpe:2.3:a:microsoft:internet_explorer:9.0.0:beta:*:*:*:*:*:*");

        assert!(!CpeMatcher::default().matches(&pattern, &concrete));

        let matcher = CpeMatcher::new(MatchOptions::lenient());
        assert!(matcher.matches(&pattern, &concrete));
        assert!(matcher.matches(&concrete, &pattern));
        assert!(!matcher.matches(&pattern, &newer));
    }

    #[test]
    fn test_version_wildcards_fall_back_on_invalid_versions() {
        let a = Cpe::builder().version("1.*.2").build();
        let b = Cpe::builder().version("1.*.2").build();
        let c = Cpe::builder().version("1.3.2").build();
        let matcher = CpeMatcher::new(MatchOptions::lenient());
        assert!(matcher.matches(&a, &b));
        assert!(!matcher.matches(&a, &c));
    }

    #[test]
    fn test_ignore_case() {
        let a = Cpe::builder().part("a").vendor("Microsoft").build();
        let b = Cpe::builder().part("a").vendor("microsoft").build();
        assert!(!CpeMatcher::default().matches(&a, &b));
        assert!(CpeMatcher::new(MatchOptions::lenient()).matches(&a, &b));
    }

    #[test]
    fn test_explain() {
        let a = cpe("cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*");
        let b = cpe("cpe:2.3:a:microsoft:internet_explorer:9.0.0::*:*:*:*:*:*");
        let explanation = CpeMatcher::default().explain(&a, &b);

        assert!(!explanation.is_match);
        assert_eq!(explanation.compared.len(), 10);
        let failed: Vec<Attribute> = explanation.mismatches.iter().map(|m| m.attribute).collect();
        assert_eq!(failed, vec![Attribute::Version, Attribute::Update]);
        assert_eq!(
            explanation.summary(),
            r#"no match: version ("8.0.6001" vs "9.0.0"), update ("beta" vs NA)"#
        );

        let same = CpeMatcher::default().explain(&a, &a);
        assert!(same.is_match);
        assert_eq!(same.summary(), "match (10 attributes compared)");
    }

    #[test]
    fn test_presets() {
        assert_eq!(MatchOptions::from_preset("Strict"), Some(MatchOptions::strict()));
        assert_eq!(MatchOptions::from_preset("default"), Some(MatchOptions::default()));
        assert_eq!(MatchOptions::from_preset("fuzzy"), None);
    }
}
