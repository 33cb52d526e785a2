//! Parser trait definition.

use super::detection::CpeFormat;
use crate::error::{CpeError, MalformedKind, Result};
use crate::model::Cpe;

/// Trait for CPE format parsers
///
/// Implementors parse one textual binding. The dispatcher in
/// [`parse`](super::parse) selects an implementor by prefix; calling a parser
/// directly with input of another format yields
/// [`MalformedKind::MissingPrefix`].
pub trait CpeParser {
    /// The format this parser reads
    fn format(&self) -> CpeFormat;

    /// Parse the text following this format's prefix
    fn parse_body(&self, input: &str, body: &str) -> Result<Cpe>;

    /// Parse a complete CPE string, prefix included
    fn parse_str(&self, input: &str) -> Result<Cpe> {
        let body = input
            .strip_prefix(self.format().prefix())
            .ok_or_else(|| self.malformed(input, MalformedKind::MissingPrefix))?;
        self.parse_body(input, body)
    }

    /// Quick check if this parser can handle the content
    fn can_parse(&self, input: &str) -> bool {
        input.starts_with(self.format().prefix())
    }

    /// Build a malformed-input error tagged with this parser's format
    fn malformed(&self, input: &str, kind: MalformedKind) -> CpeError {
        CpeError::malformed(self.format(), input, kind)
    }
}
