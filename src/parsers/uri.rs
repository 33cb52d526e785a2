//! CPE 2.2 URI parser.
//!
//! `cpe:/` followed by up to seven positional fields,
//! `part:vendor:product:version:update:edition:language`. Trailing fields
//! may be left out entirely.

use super::detection::CpeFormat;
use super::traits::CpeParser;
use crate::error::{MalformedKind, Result};
use crate::escape::decode_uri_component;
use crate::model::{Attribute, AttributeValue, Cpe};

/// Parser for `cpe:/...` URIs
#[derive(Debug, Clone, Copy, Default)]
pub struct UriParser;

impl UriParser {
    /// Create a new URI parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CpeParser for UriParser {
    fn format(&self) -> CpeFormat {
        CpeFormat::Uri
    }

    fn parse_body(&self, input: &str, body: &str) -> Result<Cpe> {
        let mut cpe = Cpe::new();
        if body.is_empty() {
            return Ok(cpe);
        }

        let fields: Vec<&str> = body.split(':').collect();
        if fields.len() > Attribute::URI.len() {
            return Err(self.malformed(
                input,
                MalformedKind::TooManyFields {
                    max: Attribute::URI.len(),
                    found: fields.len(),
                },
            ));
        }

        for (attr, field) in Attribute::URI.iter().zip(fields) {
            if !field.is_empty() {
                cpe.set(*attr, AttributeValue::new(decode_uri_component(field)));
            }
        }
        Ok(cpe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Cpe> {
        UriParser::new().parse_str(s)
    }

    #[test]
    fn test_parse_empty_uri() {
        assert_eq!(parse("cpe:/").unwrap(), Cpe::new());
    }

    #[test]
    fn test_parse_uri() {
        let cpe = parse("cpe:/a:microsoft:internet_explorer:8.%02:sp%01").unwrap();
        assert_eq!(cpe.part().as_str(), Some("a"));
        assert_eq!(cpe.vendor().as_str(), Some("microsoft"));
        assert_eq!(cpe.product().as_str(), Some("internet_explorer"));
        assert_eq!(cpe.version().as_str(), Some("8.*"));
        assert_eq!(cpe.update().as_str(), Some("sp?"));
        assert!(cpe.edition().is_na());
        assert!(cpe.language().is_na());
    }

    #[test]
    fn test_fields_past_language_are_always_na() {
        let cpe = parse("cpe:/a:b:c:d:e:f:g").unwrap();
        assert_eq!(cpe.language().as_str(), Some("g"));
        assert!(cpe.sw_edition().is_na());
        assert!(cpe.target_sw().is_na());
        assert!(cpe.target_hw().is_na());
        assert!(cpe.other().is_na());
    }

    #[test]
    fn test_too_many_fields() {
        let err = parse("cpe:/a:b:c:d:e:f:g:h").unwrap_err();
        assert_eq!(
            err.malformed_kind(),
            Some(&MalformedKind::TooManyFields { max: 7, found: 8 })
        );
    }

    #[test]
    fn test_empty_components_are_na() {
        let cpe = parse("cpe:/a::product").unwrap();
        assert!(cpe.vendor().is_na());
        assert_eq!(cpe.product().as_str(), Some("product"));

        let trailing = parse("cpe:/a:vendor:").unwrap();
        assert!(trailing.product().is_na());
    }

    #[test]
    fn test_encoded_wildcard_component_is_any() {
        let cpe = parse("cpe:/a:%02:product").unwrap();
        assert!(cpe.vendor().is_any());
    }

    #[test]
    fn test_part_is_lowercased() {
        let cpe = parse("cpe:/O:Microsoft:Windows").unwrap();
        assert_eq!(cpe.part().as_str(), Some("o"));
        assert_eq!(cpe.vendor().as_str(), Some("Microsoft"));
    }
}
