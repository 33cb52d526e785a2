//! Convert command handler.
//!
//! Parses a CPE in any binding and prints it in one or all of the others.

use super::output::{write_output, OutputTarget};
use super::EXIT_OK;
use crate::config::AppConfig;
use crate::model::Cpe;
use crate::parsers::{parse, CpeFormat};
use anyhow::{Context, Result};

/// Render `cpe` in `format`, or in every format (one per line) when `all` is set.
#[must_use]
pub fn render_convert(cpe: &Cpe, format: CpeFormat, all: bool) -> String {
    if all {
        CpeFormat::ALL
            .iter()
            .map(|f| cpe.to_format(*f))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        cpe.to_format(format)
    }
}

/// Run the convert command
pub fn run_convert(input: &str, to: Option<CpeFormat>, all: bool, config: &AppConfig) -> Result<i32> {
    let cpe = parse(input.trim()).with_context(|| format!("Failed to parse {input:?}"))?;
    let format = to.unwrap_or(config.output.format);
    tracing::debug!("Converting to {}", format);

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&render_convert(&cpe, format, all), &target, config.behavior.quiet)?;
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_format() {
        let cpe = parse("cpe:/a:microsoft:internet_explorer:8.0.6001:beta").unwrap();
        assert_eq!(
            render_convert(&cpe, CpeFormat::FormattedString, false),
            "cpe:2.3:a:microsoft:internet_explorer:8.0.6001:beta::::::"
        );
    }

    #[test]
    fn test_render_all_formats() {
        let cpe = parse("cpe:2.3:o:linux:linux_kernel:*:*:*:*:*:*:*:*").unwrap();
        let rendered = render_convert(&cpe, CpeFormat::Wfn, true);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("wfn:[part=\"o\""));
        assert_eq!(lines[1], "cpe:/o:linux:linux_kernel:%02:%02:%02:%02");
        assert_eq!(lines[2], "cpe:2.3:o:linux:linux_kernel:*:*:*:*:*:*:*:*");
    }

    #[test]
    fn test_run_convert_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");
        let config = AppConfig::builder()
            .output_file(Some(path.clone()))
            .output_format(CpeFormat::Uri)
            .quiet(true)
            .build();

        let code = run_convert("cpe:2.3:a:apache:log4j:2.14.1:*:*:*:*:*:*:*", None, false, &config)
            .unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "cpe:/a:apache:log4j:2.14.1:%02:%02:%02\n"
        );
    }

    #[test]
    fn test_run_convert_rejects_garbage() {
        let err = run_convert("pkg:npm/lodash", None, false, &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
