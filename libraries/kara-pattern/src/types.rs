//! Common types shared by the compiler and the matcher

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four named placeholders a format specification may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenName {
    /// `{creator}` - the karaoke brand or producer
    Creator,
    /// `{identifier}` - the disc/track code, e.g. `KFS-00602`
    Identifier,
    /// `{artist}`
    Artist,
    /// `{title}`
    Title,
}

impl TokenName {
    pub const ALL: [TokenName; 4] = [
        TokenName::Creator,
        TokenName::Identifier,
        TokenName::Artist,
        TokenName::Title,
    ];

    /// The name as written between braces in a format specification
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenName::Creator => "creator",
            TokenName::Identifier => "identifier",
            TokenName::Artist => "artist",
            TokenName::Title => "title",
        }
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenName {
    type Err = ();

    /// Case-sensitive: `{Artist}` is not a token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

/// Metadata extracted from a file path
///
/// Every field is `None` when the pattern has no token for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongMetadata {
    pub creator_name: Option<String>,
    pub identifier: Option<String>,
    pub artist_name: Option<String>,
    pub song_title: Option<String>,
}

impl SongMetadata {
    /// Field value for a token
    pub fn get(&self, token: TokenName) -> Option<&str> {
        match token {
            TokenName::Creator => self.creator_name.as_deref(),
            TokenName::Identifier => self.identifier.as_deref(),
            TokenName::Artist => self.artist_name.as_deref(),
            TokenName::Title => self.song_title.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, token: TokenName) -> &mut Option<String> {
        match token {
            TokenName::Creator => &mut self.creator_name,
            TokenName::Identifier => &mut self.identifier,
            TokenName::Artist => &mut self.artist_name,
            TokenName::Title => &mut self.song_title,
        }
    }

    /// True when no field was captured
    pub fn is_empty(&self) -> bool {
        TokenName::ALL.iter().all(|t| self.get(*t).is_none())
    }
}
