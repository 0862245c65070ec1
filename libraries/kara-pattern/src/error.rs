//! Error types for format specifications
//!
//! Two disjoint classes: [`PatternError`] is raised while compiling a format
//! specification and means the specification itself is defective.
//! [`NoMatch`] is the ordinary outcome of a valid pattern that does not
//! describe a given path.

use crate::types::TokenName;
use thiserror::Error;

/// Structural defect in a format specification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Format specification is empty")]
    EmptyPattern,

    /// Three or more consecutive `*`
    #[error("Wildcard run of {len} asterisks is not allowed in segment '{segment}'")]
    WildcardRunTooLong { segment: String, len: usize },

    /// `**` mixed with other text inside one segment
    #[error("'**' may only stand alone as a folder segment, found in '{segment}'")]
    DoubleWildcardInSegment { segment: String },

    #[error("Only one '**' folder segment is allowed, found a second one at folder {index}")]
    MultipleDoubleWildcards { index: usize },

    /// `**` directly before or after a `*` folder segment
    #[error("'**' at folder {index} is adjacent to a '*' folder segment")]
    DoubleWildcardNextToWildcard { index: usize },

    #[error("'*' directly touches token '{{{token}}}' in segment '{segment}'")]
    WildcardAdjacentToToken { segment: String, token: String },

    #[error("Unknown token '{{{name}}}' in segment '{segment}'")]
    UnknownToken { segment: String, name: String },

    #[error("Unterminated token in segment '{segment}'")]
    UnterminatedToken { segment: String },

    #[error("Segment '{segment}' is too large to compile")]
    SegmentTooComplex { segment: String },
}

/// Reason a compiled pattern does not describe a path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoMatch {
    #[error("Pattern needs at least {required} folders, path has {actual}")]
    InsufficientFolders { required: usize, actual: usize },

    #[error("Folder {index} '{actual}' does not match '{expected}'")]
    FolderMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("File name '{actual}' does not match '{expected}'")]
    FileMismatch { expected: String, actual: String },

    #[error("Token '{token}' captured only whitespace")]
    EmptyCapture { token: TokenName },
}
