//! WFN literal parser.
//!
//! Reads `wfn:[name=value,name=value,...]` where each value is `ANY`, `NA`
//! or a double-quoted literal. Assignment order does not matter and
//! unassigned attributes are NA.

use super::detection::CpeFormat;
use super::traits::CpeParser;
use crate::error::{MalformedKind, Result};
use crate::escape::unescape_wfn;
use crate::model::{Attribute, AttributeValue, Cpe};

/// Parser for `wfn:[...]` literals
#[derive(Debug, Clone, Copy, Default)]
pub struct WfnParser;

impl WfnParser {
    /// Create a new WFN parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CpeParser for WfnParser {
    fn format(&self) -> CpeFormat {
        CpeFormat::Wfn
    }

    fn parse_body(&self, input: &str, body: &str) -> Result<Cpe> {
        let err = |kind| self.malformed(input, kind);
        let mut scanner = Scanner::new(body);
        let mut cpe = Cpe::new();
        let mut seen = [false; 11];

        scanner.skip_whitespace();
        if !scanner.eat('[') {
            return Err(err(MalformedKind::MissingBracket));
        }
        scanner.skip_whitespace();

        if !scanner.eat(']') {
            loop {
                let (attr, value) = scanner.assignment().map_err(err)?;
                if seen[attr.index()] {
                    return Err(err(MalformedKind::DuplicateAttribute(attr.name().to_string())));
                }
                seen[attr.index()] = true;
                cpe.set(attr, value);

                scanner.skip_whitespace();
                let separator_at = scanner.pos;
                match scanner.bump() {
                    Some(',') => {}
                    Some(']') => break,
                    None => return Err(err(MalformedKind::UnterminatedBracket)),
                    Some(_) => {
                        return Err(err(MalformedKind::TrailingInput(
                            scanner.rest_from(separator_at).to_string(),
                        )))
                    }
                }
            }
        }

        scanner.skip_whitespace();
        if !scanner.is_at_end() {
            return Err(err(MalformedKind::TrailingInput(scanner.rest().to_string())));
        }

        tracing::trace!(
            "Parsed WFN with {} assigned attributes",
            seen.iter().filter(|assigned| **assigned).count()
        );
        Ok(cpe)
    }
}

/// Byte-position cursor over the bracketed part of a WFN.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn rest_from(&self, pos: usize) -> &'a str {
        &self.src[pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    /// Text from `start` up to the next `,` or `]`, for error messages.
    fn snippet(&self, start: usize) -> String {
        let tail = &self.src[start..];
        let end = tail.find([',', ']']).unwrap_or(tail.len());
        tail[..end].trim().to_string()
    }

    /// `name = value`
    fn assignment(&mut self) -> std::result::Result<(Attribute, AttributeValue), MalformedKind> {
        self.skip_whitespace();
        let start = self.pos;
        let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
        self.skip_whitespace();
        if !self.eat('=') {
            return Err(MalformedKind::MissingAssignment(self.snippet(start)));
        }
        let attr = Attribute::from_name(name)
            .ok_or_else(|| MalformedKind::UnknownAttribute(name.to_string()))?;
        self.skip_whitespace();
        let value = self.value()?;
        Ok((attr, value))
    }

    /// `ANY`, `NA` or a quoted literal
    fn value(&mut self) -> std::result::Result<AttributeValue, MalformedKind> {
        if self.eat('"') {
            let start = self.pos;
            loop {
                match self.bump() {
                    Some('\\') => {
                        if self.bump().is_none() {
                            return Err(MalformedKind::UnterminatedQuote);
                        }
                    }
                    Some('"') => break,
                    Some(_) => {}
                    None => return Err(MalformedKind::UnterminatedQuote),
                }
            }
            let inner = &self.src[start..self.pos - 1];
            // Only an unescaped `"*"` is ANY; `"\*"` is a literal asterisk.
            return Ok(match inner {
                "*" => AttributeValue::Any,
                _ => AttributeValue::Value(unescape_wfn(inner)),
            });
        }

        let start = self.pos;
        match self.take_while(|c| c.is_ascii_alphanumeric() || c == '_') {
            "ANY" => Ok(AttributeValue::Any),
            "NA" => Ok(AttributeValue::Na),
            _ => Err(MalformedKind::InvalidValue(self.snippet(start))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Cpe> {
        WfnParser::new().parse_str(s)
    }

    fn kind(s: &str) -> MalformedKind {
        parse(s)
            .unwrap_err()
            .malformed_kind()
            .cloned()
            .expect("expected a malformed-input error")
    }

    #[test]
    fn test_parse_empty_wfn() {
        assert_eq!(parse("wfn:[]").unwrap(), Cpe::new());
        assert_eq!(parse("wfn:[ ]").unwrap(), Cpe::new());
    }

    #[test]
    fn test_parse_wfn() {
        let cpe = parse(
            r#"wfn:[part="a",vendor="microsoft",product="internet_explorer",version="8.0.6001",update="beta",edition=NA]"#,
        )
        .unwrap();
        assert_eq!(cpe.part().as_str(), Some("a"));
        assert_eq!(cpe.vendor().as_str(), Some("microsoft"));
        assert_eq!(cpe.product().as_str(), Some("internet_explorer"));
        assert_eq!(cpe.version().as_str(), Some("8.0.6001"));
        assert_eq!(cpe.update().as_str(), Some("beta"));
        assert!(cpe.edition().is_na());
        assert!(cpe.language().is_na());
    }

    #[test]
    fn test_any_and_na_tokens() {
        let cpe = parse("wfn:[part=ANY,vendor=NA]").unwrap();
        assert!(cpe.part().is_any());
        assert!(cpe.vendor().is_na());
    }

    #[test]
    fn test_order_is_irrelevant() {
        let a = parse(r#"wfn:[vendor="apache",part="a"]"#).unwrap();
        let b = parse(r#"wfn:[part="a",vendor="apache"]"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let cpe = parse(r#"wfn:[ part = "a" , vendor = ANY ]"#).unwrap();
        assert_eq!(cpe.part().as_str(), Some("a"));
        assert!(cpe.vendor().is_any());
    }

    #[test]
    fn test_escaped_literals() {
        let cpe = parse(r#"wfn:[version="8\.0\.6001",other="say \"hi\", ok"]"#).unwrap();
        assert_eq!(cpe.version().as_str(), Some("8.0.6001"));
        assert_eq!(cpe.other().as_str(), Some("say \"hi\", ok"));
    }

    #[test]
    fn test_escaped_star_is_literal() {
        let cpe = parse(r#"wfn:[version="\*",update="*"]"#).unwrap();
        assert_eq!(cpe.version(), &AttributeValue::Value("*".to_string()));
        assert!(cpe.update().is_any());
    }

    #[test]
    fn test_quoted_literal_may_contain_brackets() {
        let cpe = parse(r#"wfn:[product="a]b"]"#).unwrap();
        assert_eq!(cpe.product().as_str(), Some("a]b"));
    }

    #[test]
    fn test_duplicate_attribute() {
        assert_eq!(
            kind(r#"wfn:[part="a",part="o"]"#),
            MalformedKind::DuplicateAttribute("part".to_string())
        );
    }

    #[test]
    fn test_unknown_attribute() {
        assert_eq!(
            kind(r#"wfn:[color="red"]"#),
            MalformedKind::UnknownAttribute("color".to_string())
        );
    }

    #[test]
    fn test_unterminated_input() {
        assert_eq!(kind(r#"wfn:[part="a""#), MalformedKind::UnterminatedBracket);
        assert_eq!(kind(r#"wfn:[part="a]"#), MalformedKind::UnterminatedQuote);
        assert_eq!(kind(r#"wfn:[part="a\"#), MalformedKind::UnterminatedQuote);
        assert_eq!(kind("wfn:part=\"a\"]"), MalformedKind::MissingBracket);
    }

    #[test]
    fn test_bad_values_and_assignments() {
        assert_eq!(
            kind("wfn:[part=a]"),
            MalformedKind::InvalidValue("a".to_string())
        );
        assert_eq!(
            kind("wfn:[part]"),
            MalformedKind::MissingAssignment("part".to_string())
        );
        assert_eq!(
            kind(r#"wfn:[part="a",]"#),
            MalformedKind::MissingAssignment(String::new())
        );
        assert_eq!(
            kind(r#"wfn:[part="a"] extra"#),
            MalformedKind::TrailingInput("extra".to_string())
        );
        assert_eq!(
            kind(r#"wfn:[part="a" vendor="b"]"#),
            MalformedKind::TrailingInput(r#"vendor="b"]"#.to_string())
        );
    }
}
