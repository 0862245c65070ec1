//! Compilation of format specifications into typed segments
//!
//! A specification is split like a path (see [`crate::path`]); every segment
//! but the last is a folder segment, the last is the file segment. Composite
//! segments are compiled once into an anchored regex with one capture group
//! per token.

use crate::error::PatternError;
use crate::lexer::{lex, Lexeme};
use crate::types::TokenName;
use crate::{path, validate, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One element of a composite segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Literal(String),
    Token(TokenName),
    /// In-segment `*`: any run of characters, shortest first
    Wildcard,
}

/// A segment mixing literals, tokens and in-segment wildcards
#[derive(Debug, Clone)]
pub struct Composite {
    pieces: Vec<Piece>,
    regex: Regex,
    /// Token -> capture group index
    groups: Vec<(TokenName, usize)>,
}

impl Composite {
    fn new(raw: &str, pieces: Vec<Piece>) -> Result<Self> {
        let mut pat = String::from("(?s)^");
        let mut groups = Vec::new();
        let mut capture_group = 1;

        for piece in &pieces {
            match piece {
                Piece::Literal(lit) => pat.push_str(&regex::escape(lit)),
                Piece::Wildcard => pat.push_str(".*?"),
                Piece::Token(token) => {
                    // At least one non-whitespace character, so a blank
                    // split is never chosen over a valid one.
                    pat.push_str(r"(\s*\S.*?)");
                    groups.push((*token, capture_group));
                    capture_group += 1;
                }
            }
        }
        pat.push('$');

        // Every literal is escaped, so this only fails on size limits.
        let regex = Regex::new(&pat).map_err(|_| PatternError::SegmentTooComplex {
            segment: raw.to_string(),
        })?;

        Ok(Self {
            pieces,
            regex,
            groups,
        })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Raw captures in piece order, `None` if the text does not fit
    pub(crate) fn captures<'t>(&self, text: &'t str) -> Option<Vec<(TokenName, &'t str)>> {
        let caps = self.regex.captures(text)?;
        Some(
            self.groups
                .iter()
                .filter_map(|(token, idx)| caps.get(*idx).map(|m| (*token, m.as_str())))
                .collect(),
        )
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}

impl Eq for Composite {}

/// One compiled `/`-delimited segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the actual text exactly
    Literal(String),
    /// The whole segment is one token
    Token(TokenName),
    /// `*` as a whole folder: any single folder
    SingleWildcard,
    /// `**` as a whole folder: zero or more folders
    DoubleWildcard,
    Composite(Composite),
}

impl Segment {
    fn from_lexemes(raw: &str, lexemes: Vec<Lexeme>, is_folder: bool) -> Result<Self> {
        if is_folder && validate::is_whole_wildcard(&lexemes) {
            return Ok(if lexemes == [Lexeme::Stars(1)] {
                Segment::SingleWildcard
            } else {
                Segment::DoubleWildcard
            });
        }

        let mut pieces = Vec::with_capacity(lexemes.len());
        for lexeme in lexemes {
            pieces.push(match lexeme {
                Lexeme::Literal(text) => Piece::Literal(text),
                Lexeme::Stars(_) => Piece::Wildcard,
                Lexeme::Brace(name) => {
                    let token = name.parse::<TokenName>().map_err(|()| {
                        PatternError::UnknownToken {
                            segment: raw.to_string(),
                            name,
                        }
                    })?;
                    Piece::Token(token)
                }
            });
        }

        match pieces.as_slice() {
            [Piece::Literal(text)] => Ok(Segment::Literal(text.clone())),
            [Piece::Token(token)] => Ok(Segment::Token(*token)),
            _ => Ok(Segment::Composite(Composite::new(raw, pieces)?)),
        }
    }

    /// Token names this segment can capture, in order
    pub fn tokens(&self) -> Vec<TokenName> {
        match self {
            Segment::Token(token) => vec![*token],
            Segment::Composite(c) => c
                .pieces
                .iter()
                .filter_map(|p| match p {
                    Piece::Token(token) => Some(*token),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Literal(text) => f.write_str(text),
            Piece::Token(token) => write!(f, "{{{}}}", token),
            Piece::Wildcard => f.write_str("*"),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Token(token) => write!(f, "{{{}}}", token),
            Segment::SingleWildcard => f.write_str("*"),
            Segment::DoubleWildcard => f.write_str("**"),
            Segment::Composite(c) => c.pieces.iter().try_for_each(|p| write!(f, "{}", p)),
        }
    }
}

/// A validated format specification, ready to match paths
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    folders: Vec<Segment>,
    file: Segment,
}

impl CompiledPattern {
    /// Compile and validate a format specification
    pub fn compile(spec: &str) -> Result<Self> {
        let mut raw_segments = path::segments(spec);
        let raw_file = raw_segments.pop().ok_or(PatternError::EmptyPattern)?;

        let mut folders = Vec::with_capacity(raw_segments.len());
        for raw in &raw_segments {
            folders.push(compile_segment(raw, true)?);
        }
        let file = compile_segment(path::strip_pattern_extension(&raw_file), false)?;

        validate::check_folders(&folders)?;

        tracing::debug!(
            "Compiled format specification '{}' ({} folder segments)",
            spec,
            folders.len()
        );

        Ok(Self { folders, file })
    }

    pub fn folders(&self) -> &[Segment] {
        &self.folders
    }

    pub fn file(&self) -> &Segment {
        &self.file
    }

    /// Index of the `**` folder segment, if any
    pub fn double_wildcard(&self) -> Option<usize> {
        self.folders
            .iter()
            .position(|s| *s == Segment::DoubleWildcard)
    }

    /// Every token the pattern can fill
    pub fn tokens(&self) -> BTreeSet<TokenName> {
        self.segments().flat_map(Segment::tokens).collect()
    }

    /// Folder segments followed by the file segment
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.folders.iter().chain(std::iter::once(&self.file))
    }
}

fn compile_segment(raw: &str, is_folder: bool) -> Result<Segment> {
    let lexemes = lex(raw)?;
    validate::check_segment(raw, &lexemes, is_folder)?;
    Segment::from_lexemes(raw, lexemes, is_folder)
}

impl FromStr for CompiledPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::compile(s)
    }
}

impl fmt::Display for CompiledPattern {
    /// Canonical form: no leading or doubled separators
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for folder in &self.folders {
            write!(f, "{}/", folder)?;
        }
        write!(f, "{}", self.file)
    }
}
