//! WFN literal serializer.

use super::CpeWriter;
use crate::escape::escape_wfn;
use crate::model::{AttributeValue, Cpe};
use crate::parsers::CpeFormat;

/// Writes `wfn:[...]` literals.
///
/// All eleven attributes are always emitted, so an attribute that was never
/// assigned comes back as `NA`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WfnWriter;

impl CpeWriter for WfnWriter {
    fn format(&self) -> CpeFormat {
        CpeFormat::Wfn
    }

    fn write(&self, cpe: &Cpe) -> String {
        let attrs: Vec<String> = cpe
            .iter()
            .map(|(attr, value)| {
                let rendered = match value {
                    AttributeValue::Any => "ANY".to_string(),
                    AttributeValue::Na => "NA".to_string(),
                    AttributeValue::Value(v) if v == "*" => r#""\*""#.to_string(),
                    AttributeValue::Value(v) => format!("\"{}\"", escape_wfn(&v.to_lowercase())),
                };
                format!("{}={}", attr.name(), rendered)
            })
            .collect();
        format!("{}[{}]", CpeFormat::Wfn.prefix(), attrs.join(","))
    }
}
