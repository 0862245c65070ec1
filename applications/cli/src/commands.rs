//! Subcommand implementations
//!
//! Each command returns plain outcome values; printing and exit codes are
//! decided by the caller.

use crate::error::{CliError, Result};
use kara_pattern::{CompiledPattern, PatternError, PatternSet, SetMatch};
use serde::Serialize;

/// Result of validating one format specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub spec: String,
    pub result: std::result::Result<CompiledPattern, PatternError>,
}

impl CheckOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Result of resolving one path against the configured patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    pub path: String,
    #[serde(flatten)]
    pub matched: Option<SetMatch>,
    /// One rejection reason per pattern, only filled when nothing matched
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
}

impl ParseOutcome {
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

pub fn check<I, S>(specs: I) -> Vec<CheckOutcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    specs
        .into_iter()
        .map(|spec| {
            let spec = spec.into();
            let result = CompiledPattern::compile(&spec);
            if let Err(e) = &result {
                tracing::debug!("Rejected '{}': {}", spec, e);
            }
            CheckOutcome { spec, result }
        })
        .collect()
}

pub fn regex(spec: &str) -> Result<String> {
    kara_pattern::get_regex_equivalent(spec).map_err(|source| CliError::Pattern {
        spec: spec.to_string(),
        source,
    })
}

/// Resolve every path, first matching pattern wins
pub fn parse<I, S>(set: &PatternSet, paths: I) -> Vec<ParseOutcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths
        .into_iter()
        .map(|path| parse_one(set, path.into()))
        .collect()
}

fn parse_one(set: &PatternSet, path: String) -> ParseOutcome {
    if let Some(matched) = set.match_first(&path) {
        tracing::debug!("'{}' matched pattern {}", path, matched.pattern_index);
        return ParseOutcome {
            path,
            matched: Some(matched),
            reasons: Vec::new(),
        };
    }

    let reasons = set
        .iter()
        .filter_map(|pattern| pattern.match_path(&path).err())
        .map(|reason| reason.to_string())
        .collect();

    tracing::info!("No pattern matched '{}'", path);
    ParseOutcome {
        path,
        matched: None,
        reasons,
    }
}
