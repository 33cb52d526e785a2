//! Dotted version comparison with trailing wildcards.

use crate::error::{CpeError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Wildcard token allowed as the last dotted part.
const WILDCARD: &str = "*";

/// A dotted version such as `8.0.6001` or `1.*`.
///
/// Every parsed version ends in a wildcard part: an explicit trailing `*` is
/// kept, otherwise one is appended. Comparison stops at the first wildcard on
/// either side and reports equality, so `1.0` equals `1.0.1` and `1.*` equals
/// `1.1.2.3`.
///
/// Equality is therefore not transitive (`1.*` equals both `1.1` and `1.2`),
/// which is why `Version` implements only `PartialEq`/`PartialOrd`.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    parts: Vec<String>,
}

impl Version {
    /// Parse a dotted version string.
    ///
    /// Fails if `*` appears anywhere but the last part.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts: Vec<String> = s.split('.').map(str::to_string).collect();
        while parts.last().is_some_and(String::is_empty) {
            parts.pop();
        }

        match parts.iter().position(|p| p == WILDCARD) {
            None => parts.push(WILDCARD.to_string()),
            Some(index) if index + 1 < parts.len() => {
                return Err(CpeError::invalid_version(
                    s,
                    format!("wildcard must be the last part, found at position {}", index + 1),
                ));
            }
            Some(_) => {}
        }

        Ok(Self {
            raw: s.to_string(),
            parts,
        })
    }

    /// Dotted parts, including the trailing wildcard
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Order two versions part by part.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.parts.iter().zip(other.parts.iter()) {
            if a == WILDCARD || b == WILDCARD {
                break;
            }
            let ordering = leading_integer(a).cmp(&leading_integer(b));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Arbitrary-size integer kept as its decimal digits.
///
/// `digits` has no leading zeros, so zero is the empty string and is never
/// negative.
#[derive(Debug, PartialEq, Eq)]
struct Integer {
    negative: bool,
    digits: String,
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = self
            .digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits));
        match (self.negative, other.negative) {
            (false, false) => magnitude,
            (true, true) => magnitude.reverse(),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Integer-or-zero projection: optional sign and leading digits, else 0.
///
/// A single `_` between two digits is a separator. `"beta"` projects to 0,
/// `"10rc1"` to 10 and `"1_000"` to 1000.
fn leading_integer(s: &str) -> Integer {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let bytes = rest.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'_' if end > 0 && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) => end += 1,
            _ => break,
        }
    }

    let digits: String = rest[..end]
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|c| *c == '0')
        .collect();
    Integer {
        negative: negative && !digits.is_empty(),
        digits,
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl FromStr for Version {
    type Err = CpeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Compare two version strings.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering> {
    Ok(Version::parse(a)?.compare(&Version::parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_compare_versions() {
        assert_eq!(compare_versions("1.0.0", "1.0.1"), Ok(Ordering::Less));
        assert_eq!(compare_versions("1.0.1", "1.0.0"), Ok(Ordering::Greater));
        assert_eq!(compare_versions("1.0.0", "1.0.0"), Ok(Ordering::Equal));
        assert!(compare_versions("1.*.0", "1.0").is_err());
    }

    #[test]
    fn test_implicit_trailing_wildcard() {
        assert_eq!(v("1.0.1").parts(), ["1", "0", "1", "*"]);
        assert_eq!(v("1.*").parts(), ["1", "*"]);
        assert_eq!(v("").parts(), ["*"]);
        assert_eq!(v("1.").parts(), ["1", "*"]);
    }

    #[test]
    fn test_wildcard_position() {
        let err = Version::parse("1.*.2").unwrap_err();
        assert!(err.is_invalid_version());
        assert!(Version::parse("*.1").is_err());
        assert!(Version::parse("*").is_ok());
    }

    #[test]
    fn test_matches_itself() {
        let ver = v("1.0.1");
        assert_eq!(ver, ver);
    }

    #[test]
    fn test_wildcard_equality_both_directions() {
        assert_eq!(v("1.*"), v("1.1.2.3"));
        assert_eq!(v("1.1.2.3"), v("1.*"));
        assert_ne!(v("1.*"), v("2.0"));
        assert_ne!(v("2.0"), v("1.*"));
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.0") < v("2.0"));
        assert!(v("2.0") > v("1.0"));
        assert!(v("1.*") < v("2.*"));
        assert!(v("2.*") > v("1.*"));
        assert!(v("8.0.6001") < v("9.0.0"));
        assert!(v("1.10") > v("1.9"));
    }

    #[test]
    fn test_shorter_version_equals_longer() {
        assert_eq!(v("1.0").compare(&v("1.0.1")), Ordering::Equal);
    }

    #[test]
    fn test_non_numeric_parts_project_to_integers() {
        assert_eq!(v("1.beta").compare(&v("1.0")), Ordering::Equal);
        assert_eq!(v("1.beta").compare(&v("1.alpha")), Ordering::Equal);
        assert_eq!(v("1.10rc1").compare(&v("1.9")), Ordering::Greater);
        assert_eq!(v("1.rc").compare(&v("1.1")), Ordering::Less);
    }

    #[test]
    fn test_huge_parts_do_not_overflow() {
        let big = "9".repeat(60);
        assert_eq!(v(&big).compare(&v("1")), Ordering::Greater);
    }

    #[test]
    fn test_huge_parts_compare_exactly() {
        let smaller = format!("1.{}", "9".repeat(40));
        let larger = format!("1.1{}", "0".repeat(40));
        assert_eq!(v(&smaller).compare(&v(&larger)), Ordering::Less);
        assert_eq!(v(&larger).compare(&v(&smaller)), Ordering::Greater);

        let a = format!("{}1", "4".repeat(45));
        let b = format!("{}2", "4".repeat(45));
        assert_ne!(v(&a), v(&b));
        assert_eq!(v(&format!("-{a}")).compare(&v(&format!("-{b}"))), Ordering::Greater);
    }

    #[test]
    fn test_signs_and_leading_zeros() {
        assert_eq!(v("1.007").compare(&v("1.7")), Ordering::Equal);
        assert_eq!(v("1.-0").compare(&v("1.0")), Ordering::Equal);
        assert_eq!(v("1.+5").compare(&v("1.5")), Ordering::Equal);
        assert_eq!(v("1.-2").compare(&v("1.-10")), Ordering::Greater);
        assert_eq!(v("1.-1").compare(&v("1.beta")), Ordering::Less);
    }

    #[test]
    fn test_underscore_digit_separators() {
        assert_eq!(v("1_0").compare(&v("10")), Ordering::Equal);
        assert_eq!(v("2.1_000").compare(&v("2.1000")), Ordering::Equal);
        assert_eq!(v("1__0").compare(&v("1")), Ordering::Equal);
        assert_eq!(v("1_").compare(&v("1")), Ordering::Equal);
        assert_eq!(v("_1").compare(&v("0")), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(v("8.0.6001").to_string(), "8.0.6001");
        assert_eq!("1.*".parse::<Version>().unwrap().to_string(), "1.*");
    }
}
