//! Textual regex projection of a format specification
//!
//! Diagnostic only: matching goes through [`CompiledPattern::match_path`],
//! which keeps folder alignment explicit. The projection matches full paths
//! written with `/` separators, extension included.

use crate::compile::{CompiledPattern, Piece, Segment};
use crate::types::TokenName;
use crate::Result;
use std::collections::BTreeSet;

/// Regex equivalent of a format specification
///
/// Fails with the same [`PatternError`](crate::PatternError) as
/// [`compile`](crate::compile).
pub fn get_regex_equivalent(spec: &str) -> Result<String> {
    Ok(CompiledPattern::compile(spec)?.regex_equivalent())
}

impl CompiledPattern {
    pub fn regex_equivalent(&self) -> String {
        let mut named = BTreeSet::new();
        let mut out = String::from("^");

        if self.double_wildcard().is_some() {
            out.push_str("/?");
        } else {
            // Leading folders the pattern does not describe
            out.push_str("(?:[^/]*/)*");
        }

        for folder in self.folders() {
            match folder {
                Segment::DoubleWildcard => out.push_str("(?:[^/]+/)*"),
                other => {
                    push_segment(&mut out, other, &mut named);
                    out.push('/');
                }
            }
        }

        push_segment(&mut out, self.file(), &mut named);
        out.push_str(r"(?:\.[^/.]*)?$");
        out
    }
}

fn push_segment(out: &mut String, segment: &Segment, named: &mut BTreeSet<TokenName>) {
    match segment {
        Segment::Literal(text) => out.push_str(&regex::escape(text)),
        Segment::Token(token) => push_token(out, *token, named),
        Segment::SingleWildcard => out.push_str("[^/]+"),
        Segment::DoubleWildcard => out.push_str("(?:[^/]+/)*"),
        Segment::Composite(composite) => {
            for piece in composite.pieces() {
                match piece {
                    Piece::Literal(text) => out.push_str(&regex::escape(text)),
                    Piece::Token(token) => push_token(out, *token, named),
                    Piece::Wildcard => out.push_str("[^/]*?"),
                }
            }
        }
    }
}

/// Only the first occurrence of a token gets a named group
fn push_token(out: &mut String, token: TokenName, named: &mut BTreeSet<TokenName>) {
    if named.insert(token) {
        out.push_str(&format!("(?P<{}>[^/]+?)", token));
    } else {
        out.push_str("(?:[^/]+?)");
    }
}
