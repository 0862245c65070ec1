//! Segment matching and token extraction

use crate::align::align_folders;
use crate::compile::{CompiledPattern, Segment};
use crate::error::NoMatch;
use crate::metadata::MetadataBuilder;
use crate::path::{split_path, CandidatePath};
use crate::types::{SongMetadata, TokenName};

impl Segment {
    /// Match one actual folder or file name
    ///
    /// Returns the untrimmed token captures, or `None` on a literal or
    /// structural mismatch.
    pub(crate) fn capture<'t>(&self, text: &'t str) -> Option<Vec<(TokenName, &'t str)>> {
        match self {
            Segment::SingleWildcard | Segment::DoubleWildcard => Some(Vec::new()),
            Segment::Literal(literal) => (literal == text).then(Vec::new),
            Segment::Token(token) => (!text.is_empty()).then(|| vec![(*token, text)]),
            Segment::Composite(composite) => composite.captures(text),
        }
    }
}

impl CompiledPattern {
    /// Extract metadata from a file path
    ///
    /// A non-matching path is not an error of the pattern; the `NoMatch`
    /// says which folder or token could not be satisfied.
    pub fn match_path(&self, path: &str) -> Result<SongMetadata, NoMatch> {
        self.match_candidate(&split_path(path))
    }

    /// Like [`match_path`](Self::match_path), discarding the reason
    pub fn matches(&self, path: &str) -> Option<SongMetadata> {
        match self.match_path(path) {
            Ok(metadata) => Some(metadata),
            Err(reason) => {
                tracing::trace!("'{}' does not match '{}': {}", path, self, reason);
                None
            }
        }
    }

    /// Match an already normalized path
    pub fn match_candidate(&self, candidate: &CandidatePath) -> Result<SongMetadata, NoMatch> {
        let mut builder = MetadataBuilder::default();

        for aligned in align_folders(self.folders(), &candidate.folders)? {
            let captures =
                aligned
                    .segment
                    .capture(aligned.actual)
                    .ok_or_else(|| NoMatch::FolderMismatch {
                        index: aligned.index,
                        expected: aligned.segment.to_string(),
                        actual: aligned.actual.to_string(),
                    })?;
            builder.record_all(captures)?;
        }

        let captures =
            self.file()
                .capture(&candidate.file_name)
                .ok_or_else(|| NoMatch::FileMismatch {
                    expected: self.file().to_string(),
                    actual: candidate.file_name.clone(),
                })?;
        builder.record_all(captures)?;

        Ok(builder.finish())
    }
}
