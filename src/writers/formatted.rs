//! CPE 2.3 formatted-string serializer.

use super::CpeWriter;
use crate::escape::escape_formatted;
use crate::model::{AttributeValue, Cpe};
use crate::parsers::CpeFormat;

/// Writes `cpe:2.3:...` strings: ANY is `*`, NA is an empty field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormattedStringWriter;

impl CpeWriter for FormattedStringWriter {
    fn format(&self) -> CpeFormat {
        CpeFormat::FormattedString
    }

    fn write(&self, cpe: &Cpe) -> String {
        let fields: Vec<String> = cpe
            .iter()
            .map(|(_, value)| match value {
                AttributeValue::Any => "*".to_string(),
                AttributeValue::Na => String::new(),
                AttributeValue::Value(v) if v == "*" => r"\*".to_string(),
                AttributeValue::Value(v) => escape_formatted(&v.to_lowercase()),
            })
            .collect();
        format!("{}{}", CpeFormat::FormattedString.prefix(), fields.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse;

    #[test]
    fn test_to_str_round_trip() {
        let s = "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta:*:*:*:*:*:*";
        assert_eq!(FormattedStringWriter.write(&parse(s).unwrap()), s);
    }

    #[test]
    fn test_na_is_empty_field() {
        let cpe = Cpe::builder().part("o").vendor("linux").build();
        assert_eq!(
            FormattedStringWriter.write(&cpe),
            "cpe:2.3:o:linux:::::::::"
        );
    }

    #[test]
    fn test_colon_is_escaped() {
        let cpe = Cpe::builder().part("a").product("foo:bar").build();
        let s = FormattedStringWriter.write(&cpe);
        assert_eq!(s, r"cpe:2.3:a::foo\:bar::::::::");
        assert_eq!(parse(&s).unwrap(), cpe);
    }

    #[test]
    fn test_literal_star_is_escaped() {
        let cpe = Cpe::builder()
            .part("a")
            .version(AttributeValue::Value("*".to_string()))
            .update("8.0.*")
            .build();
        let s = FormattedStringWriter.write(&cpe);
        assert_eq!(s, r"cpe:2.3:a:::\*:8.0.*::::::");
        assert_eq!(parse(&s).unwrap(), cpe);
    }

    #[test]
    fn test_lowercased_output() {
        let cpe = Cpe::builder().part("A").vendor("Apache").build();
        assert!(FormattedStringWriter.write(&cpe).starts_with("cpe:2.3:a:apache:"));
    }
}
