//! Splits one raw pattern segment into lexemes
//!
//! Token names are not resolved here. Keeping `{name}` as raw text lets the
//! validator reject wildcard/token adjacency before it complains about names.

use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lexeme {
    /// Verbatim text, punctuation included
    Literal(String),
    /// Contents of a `{...}` placeholder
    Brace(String),
    /// A run of `*` and its length
    Stars(usize),
}

pub(crate) fn lex(segment: &str) -> Result<Vec<Lexeme>, PatternError> {
    let mut lexemes = Vec::new();
    let mut literal = String::new();
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(PatternError::UnterminatedToken {
                        segment: segment.to_string(),
                    });
                }
                flush(&mut literal, &mut lexemes);
                lexemes.push(Lexeme::Brace(name));
            }
            '*' => {
                let mut len = 1;
                while chars.next_if_eq(&'*').is_some() {
                    len += 1;
                }
                flush(&mut literal, &mut lexemes);
                lexemes.push(Lexeme::Stars(len));
            }
            other => literal.push(other),
        }
    }
    flush(&mut literal, &mut lexemes);

    Ok(lexemes)
}

fn flush(literal: &mut String, lexemes: &mut Vec<Lexeme>) {
    if !literal.is_empty() {
        lexemes.push(Lexeme::Literal(std::mem::take(literal)));
    }
}
