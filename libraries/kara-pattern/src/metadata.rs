//! Assembly of captured token values into [`SongMetadata`]

use crate::error::NoMatch;
use crate::types::{SongMetadata, TokenName};

/// Collects captures in document order
///
/// The first capture of a token wins; later captures of the same token are
/// still checked for emptiness but otherwise dropped.
#[derive(Debug, Default)]
pub(crate) struct MetadataBuilder {
    metadata: SongMetadata,
}

impl MetadataBuilder {
    pub fn record(&mut self, token: TokenName, raw: &str) -> Result<(), NoMatch> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(NoMatch::EmptyCapture { token });
        }

        let slot = self.metadata.slot_mut(token);
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
        Ok(())
    }

    pub fn record_all<'t>(
        &mut self,
        captures: impl IntoIterator<Item = (TokenName, &'t str)>,
    ) -> Result<(), NoMatch> {
        captures
            .into_iter()
            .try_for_each(|(token, raw)| self.record(token, raw))
    }

    pub fn finish(self) -> SongMetadata {
        self.metadata
    }
}
