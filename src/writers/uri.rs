//! CPE 2.2 URI serializer.

use super::CpeWriter;
use crate::escape::encode_uri_component;
use crate::model::{Attribute, AttributeValue, Cpe};
use crate::parsers::CpeFormat;

/// Writes `cpe:/...` URIs.
///
/// Only the first seven attributes exist in this form. Trailing NA
/// attributes are dropped; an NA between two present attributes becomes an
/// empty component.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriWriter;

impl CpeWriter for UriWriter {
    fn format(&self) -> CpeFormat {
        CpeFormat::Uri
    }

    fn write(&self, cpe: &Cpe) -> String {
        let mut values: Vec<&AttributeValue> =
            Attribute::URI.iter().map(|attr| cpe.get(*attr)).collect();
        while values.last().is_some_and(|v| v.is_na()) {
            values.pop();
        }

        let components: Vec<String> = values
            .into_iter()
            .map(|value| match value {
                AttributeValue::Any => encode_uri_component("*"),
                AttributeValue::Na => String::new(),
                AttributeValue::Value(v) => encode_uri_component(v),
            })
            .collect();
        format!("{}{}", CpeFormat::Uri.prefix(), components.join(":").to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse;

    #[test]
    fn test_uri_round_trip() {
        let uri = "cpe:/a:microsoft:internet_explorer:8.%02:sp%01";
        assert_eq!(UriWriter.write(&parse(uri).unwrap()), uri);
    }

    #[test]
    fn test_trailing_na_dropped_middle_kept() {
        let cpe = Cpe::builder().part("a").product("foo").build();
        assert_eq!(UriWriter.write(&cpe), "cpe:/a::foo");
        assert_eq!(UriWriter.write(&Cpe::new()), "cpe:/");
    }

    #[test]
    fn test_extended_attributes_are_not_written() {
        let cpe = Cpe::builder().part("a").target_sw("windows").build();
        assert_eq!(UriWriter.write(&cpe), "cpe:/a");
    }

    #[test]
    fn test_any_and_case() {
        let cpe = Cpe::builder()
            .part("a")
            .vendor("Microsoft")
            .product(AttributeValue::Any)
            .build();
        assert_eq!(UriWriter.write(&cpe), "cpe:/a:microsoft:%02");
    }
}
