//! Match command handler.
//!
//! Parses a pattern and a batch of candidate CPEs, then prints every
//! candidate that matches the pattern.

use super::output::{write_output, OutputTarget};
use super::{EXIT_NO_MATCH, EXIT_OK};
use crate::config::AppConfig;
use crate::matching::{CpeMatcher, CpeMatching};
use crate::model::Cpe;
use crate::parsers::parse;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::BufRead;
use std::path::PathBuf;

/// Inputs to the match command
#[derive(Debug, Clone, Default)]
pub struct MatchCommand {
    /// Pattern CPE
    pub pattern: String,
    /// Candidate CPEs given on the command line
    pub candidates: Vec<String>,
    /// File with one candidate per line
    pub file: Option<PathBuf>,
    /// Print the reason for each decision instead of the matching CPEs
    pub explain: bool,
}

/// Result of matching a batch of candidates
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    /// Candidates that matched, in input order
    pub matched: Vec<Cpe>,
    /// Per-candidate explanation lines (only filled in explain mode)
    pub explanations: Vec<String>,
    /// Candidate lines that failed to parse
    pub invalid: Vec<String>,
}

/// Match `candidates` against `pattern`.
///
/// Blank lines and lines starting with `#` are ignored. Unparseable lines are
/// reported in [`MatchOutcome::invalid`] rather than failing the batch.
#[must_use]
pub fn find_matches(
    pattern: &Cpe,
    candidates: &[String],
    matcher: &CpeMatcher,
    explain: bool,
) -> MatchOutcome {
    let lines: Vec<&str> = candidates
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let parsed: Vec<(&str, crate::Result<Cpe>)> =
        lines.par_iter().map(|line| (*line, parse(line))).collect();

    let mut outcome = MatchOutcome::default();
    for (line, result) in parsed {
        match result {
            Ok(cpe) => {
                let is_match = if explain {
                    let explanation = matcher.explain(pattern, &cpe);
                    outcome
                        .explanations
                        .push(format!("{line}\t{}", explanation.summary()));
                    explanation.is_match
                } else {
                    matcher.matches(pattern, &cpe)
                };
                if is_match {
                    outcome.matched.push(cpe);
                }
            }
            Err(e) => {
                tracing::warn!("Skipping invalid CPE {:?}: {}", line, e);
                outcome.invalid.push(line.to_string());
            }
        }
    }
    outcome
}

fn read_candidates(command: &MatchCommand) -> Result<Vec<String>> {
    if !command.candidates.is_empty() {
        return Ok(command.candidates.clone());
    }
    if let Some(path) = &command.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidates from {}", path.display()))?;
        return Ok(content.lines().map(str::to_string).collect());
    }
    tracing::debug!("Reading candidate CPEs from stdin");
    std::io::stdin()
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("Failed to read candidates from stdin")
}

/// Run the match command
pub fn run_match(command: &MatchCommand, config: &AppConfig) -> Result<i32> {
    let pattern = parse(command.pattern.trim())
        .with_context(|| format!("Failed to parse pattern {:?}", command.pattern))?;
    let candidates = read_candidates(command)?;
    let matcher = CpeMatcher::new(config.matching.to_options());

    let outcome = find_matches(&pattern, &candidates, &matcher, command.explain);
    if !config.behavior.quiet {
        tracing::info!(
            "{} of {} candidates matched ({} invalid)",
            outcome.matched.len(),
            candidates.len(),
            outcome.invalid.len()
        );
    }

    let content = if command.explain {
        outcome.explanations.join("\n")
    } else {
        outcome
            .matched
            .iter()
            .map(|cpe| cpe.to_format(config.output.format))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let target = OutputTarget::from_option(config.output.file.clone());
    if !content.is_empty() || matches!(target, OutputTarget::File(_)) {
        write_output(&content, &target, config.behavior.quiet)?;
    }

    if outcome.matched.is_empty() && config.behavior.fail_on_no_match {
        return Ok(EXIT_NO_MATCH);
    }
    Ok(EXIT_OK)
}
