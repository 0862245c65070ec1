//! Structural validation of format specifications
//!
//! Runs on the lexed/compiled form only and never looks at candidate paths.

use crate::compile::Segment;
use crate::error::PatternError;
use crate::lexer::Lexeme;
use crate::Result;

/// Per-segment rules: wildcard run length, `**` placement and wildcard/token
/// adjacency. The file segment goes through here too.
pub(crate) fn check_segment(raw: &str, lexemes: &[Lexeme], is_folder: bool) -> Result<()> {
    for lexeme in lexemes {
        if let Lexeme::Stars(len) = lexeme {
            if *len >= 3 {
                return Err(PatternError::WildcardRunTooLong {
                    segment: raw.to_string(),
                    len: *len,
                });
            }
        }
    }

    if is_folder && is_whole_wildcard(lexemes) {
        return Ok(());
    }

    if lexemes.contains(&Lexeme::Stars(2)) {
        return Err(PatternError::DoubleWildcardInSegment {
            segment: raw.to_string(),
        });
    }

    for pair in lexemes.windows(2) {
        match pair {
            [Lexeme::Stars(_), Lexeme::Brace(token)] | [Lexeme::Brace(token), Lexeme::Stars(_)] => {
                return Err(PatternError::WildcardAdjacentToToken {
                    segment: raw.to_string(),
                    token: token.clone(),
                });
            }
            _ => {}
        }
    }

    Ok(())
}

/// A folder segment that is a single `*` or `**` and nothing else
pub(crate) fn is_whole_wildcard(lexemes: &[Lexeme]) -> bool {
    matches!(lexemes, [Lexeme::Stars(1 | 2)])
}

/// Cross-folder rules for `**`
pub(crate) fn check_folders(folders: &[Segment]) -> Result<()> {
    let mut seen_double = false;

    for (index, segment) in folders.iter().enumerate() {
        if *segment != Segment::DoubleWildcard {
            continue;
        }
        if seen_double {
            return Err(PatternError::MultipleDoubleWildcards { index });
        }
        seen_double = true;

        let prev = index.checked_sub(1).and_then(|i| folders.get(i));
        let next = folders.get(index + 1);
        if prev == Some(&Segment::SingleWildcard) || next == Some(&Segment::SingleWildcard) {
            return Err(PatternError::DoubleWildcardNextToWildcard { index });
        }
    }

    Ok(())
}
