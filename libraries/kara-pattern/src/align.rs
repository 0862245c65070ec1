//! Folder alignment
//!
//! Decides which actual folder each pattern folder segment describes.
//!
//! Without `**` the pattern is right-aligned: it covers the last `len(P)`
//! folders of the path and anything in front of them is ignored, so patterns
//! need not spell out the collection root.
//!
//! With `**` at index `k`, `P[..k]` is left-anchored to the first folders,
//! `P[k+1..]` is right-anchored to the last folders, and `**` swallows
//! whatever lies between (possibly nothing).

use crate::compile::Segment;
use crate::error::NoMatch;

/// A pattern folder segment paired with the actual folder it must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedFolder<'p, 'a> {
    /// Position of the folder in the candidate path
    pub index: usize,
    pub segment: &'p Segment,
    pub actual: &'a str,
}

/// Align pattern folder segments to actual folder names
///
/// The `**` segment itself is not part of the result; it captures nothing.
pub fn align_folders<'p, 'a>(
    pattern: &'p [Segment],
    actual: &'a [String],
) -> Result<Vec<AlignedFolder<'p, 'a>>, NoMatch> {
    let (left, right) = match pattern.iter().position(|s| *s == Segment::DoubleWildcard) {
        Some(k) => (&pattern[..k], &pattern[k + 1..]),
        None => (&[][..], pattern),
    };

    let required = left.len() + right.len();
    if actual.len() < required {
        return Err(NoMatch::InsufficientFolders {
            required,
            actual: actual.len(),
        });
    }

    let right_start = actual.len() - right.len();
    let left_pairs = left.iter().enumerate();
    let right_pairs = right
        .iter()
        .enumerate()
        .map(|(i, segment)| (right_start + i, segment));

    Ok(left_pairs
        .chain(right_pairs)
        .map(|(index, segment)| AlignedFolder {
            index,
            segment,
            actual: actual[index].as_str(),
        })
        .collect())
}
