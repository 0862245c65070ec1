use crate::commands::{CheckOutcome, ParseOutcome};
use kara_pattern::{SongMetadata, TokenName};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOut<'a> {
    ok: bool,
    results: &'a [ParseOutcome],
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total: usize,
    matched: usize,
    unmatched: usize,
}

pub fn render_parse_json(outcomes: &[ParseOutcome]) -> String {
    let matched = outcomes.iter().filter(|o| o.is_match()).count();

    let out = JsonOut {
        ok: matched == outcomes.len(),
        results: outcomes,
        summary: JsonSummary {
            total: outcomes.len(),
            matched,
            unmatched: outcomes.len() - matched,
        },
    };

    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{\"ok\":false}".to_string())
}

pub fn render_parse_human(outcomes: &[ParseOutcome]) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        match &outcome.matched {
            Some(matched) => {
                out.push_str(&format!(
                    "OK {} [pattern {}]\n",
                    outcome.path, matched.pattern_index
                ));
                push_metadata(&mut out, &matched.metadata);
            }
            None => {
                out.push_str(&format!("NO MATCH {}\n", outcome.path));
                for reason in &outcome.reasons {
                    out.push_str(&format!("    {reason}\n"));
                }
            }
        }
    }

    out
}

fn push_metadata(out: &mut String, metadata: &SongMetadata) {
    for token in TokenName::ALL {
        if let Some(value) = metadata.get(token) {
            out.push_str(&format!("    {token}: {value}\n"));
        }
    }
}

pub fn render_check(outcomes: &[CheckOutcome]) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        match &outcome.result {
            Ok(pattern) => out.push_str(&format!("OK {pattern}\n")),
            Err(e) => out.push_str(&format!("INVALID {}: {e}\n", outcome.spec)),
        }
    }

    out
}
