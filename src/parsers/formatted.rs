//! CPE 2.3 formatted-string parser.
//!
//! `cpe:2.3:` followed by exactly eleven `:`-separated fields. A `\` makes
//! the next character literal, so `\:` stays inside its field.

use super::detection::CpeFormat;
use super::traits::CpeParser;
use crate::error::{MalformedKind, Result};
use crate::escape::{split_formatted, unescape_formatted};
use crate::model::{Attribute, AttributeValue, Cpe};

/// Parser for `cpe:2.3:...` strings
#[derive(Debug, Clone, Copy, Default)]
pub struct FormattedStringParser;

impl FormattedStringParser {
    /// Create a new formatted-string parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// ANY is decided on the raw token, so an escaped `\*` stays literal.
    fn parse_field(token: &str) -> AttributeValue {
        match token {
            "" => AttributeValue::Na,
            "*" => AttributeValue::Any,
            _ => AttributeValue::Value(unescape_formatted(token)),
        }
    }
}

impl CpeParser for FormattedStringParser {
    fn format(&self) -> CpeFormat {
        CpeFormat::FormattedString
    }

    fn parse_body(&self, input: &str, body: &str) -> Result<Cpe> {
        let fields =
            split_formatted(body).ok_or_else(|| self.malformed(input, MalformedKind::TrailingEscape))?;

        if fields.len() != Attribute::ALL.len() {
            return Err(self.malformed(
                input,
                MalformedKind::FieldCount {
                    expected: Attribute::ALL.len(),
                    found: fields.len(),
                },
            ));
        }

        let mut cpe = Cpe::new();
        for (attr, token) in Attribute::ALL.iter().zip(fields) {
            cpe.set(*attr, Self::parse_field(token));
        }
        Ok(cpe)
    }
}
