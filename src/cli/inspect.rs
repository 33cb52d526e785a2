//! Inspect command handler.
//!
//! Dumps a parsed CPE as JSON: detected format, each attribute and every
//! binding of the result.

use super::output::{write_output, OutputTarget};
use super::EXIT_OK;
use crate::config::AppConfig;
use crate::model::AttributeValue;
use crate::parsers::{parse, CpeFormat};
use anyhow::{Context, Result};
use serde::Serialize;

/// One attribute in an [`InspectReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeReport {
    pub name: &'static str,
    /// `any`, `na` or `value`
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// JSON view of a parsed CPE
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub input: String,
    pub format: CpeFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_kind: Option<&'static str>,
    pub attributes: Vec<AttributeReport>,
    pub wfn: String,
    pub uri: String,
    pub formatted_string: String,
}

impl InspectReport {
    /// Parse `input` and describe it.
    pub fn build(input: &str) -> crate::Result<Self> {
        let input = input.trim();
        let cpe = parse(input)?;
        let format = CpeFormat::detect(input).unwrap_or_default();

        let attributes = cpe
            .iter()
            .map(|(attr, value)| {
                let (kind, value) = match value {
                    AttributeValue::Any => ("any", None),
                    AttributeValue::Na => ("na", None),
                    AttributeValue::Value(v) => ("value", Some(v.clone())),
                };
                AttributeReport {
                    name: attr.name(),
                    kind,
                    value,
                }
            })
            .collect();

        Ok(Self {
            input: input.to_string(),
            format,
            part_kind: cpe.part_kind().map(|kind| kind.name()),
            attributes,
            wfn: cpe.to_wfn(),
            uri: cpe.to_uri(),
            formatted_string: cpe.to_formatted_string(),
        })
    }
}

/// Run the inspect command
pub fn run_inspect(input: &str, config: &AppConfig) -> Result<i32> {
    let report =
        InspectReport::build(input).with_context(|| format!("Failed to parse {input:?}"))?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&json, &target, config.behavior.quiet)?;
    Ok(EXIT_OK)
}
