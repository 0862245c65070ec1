//! Preset format specifications for common karaoke library layouts

use crate::compile::CompiledPattern;
use crate::Result;

/// `{identifier} - {artist} - {title}` (default)
pub const IDENTIFIER_ARTIST_TITLE: &str = "{identifier} - {artist} - {title}";

/// `{artist} - {title}`
pub const ARTIST_TITLE: &str = "{artist} - {title}";

/// Brand folder directly above the files
pub const CREATOR_FOLDER: &str = "{creator}/{identifier} - {artist} - {title}";

/// Brand folder at the top, any number of disc folders below it
pub const CREATOR_NESTED: &str = "{creator}/**/{identifier} - {artist} - {title}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPreset {
    /// `{identifier} - {artist} - {title}`
    #[default]
    IdentifierArtistTitle,
    /// `{artist} - {title}`
    ArtistTitle,
    /// `{creator}/{identifier} - {artist} - {title}`
    CreatorFolder,
    /// `{creator}/**/{identifier} - {artist} - {title}`
    CreatorNestedIdentifier,
}

impl FormatPreset {
    pub const ALL: [FormatPreset; 4] = [
        FormatPreset::IdentifierArtistTitle,
        FormatPreset::ArtistTitle,
        FormatPreset::CreatorFolder,
        FormatPreset::CreatorNestedIdentifier,
    ];

    /// Get the format specification for this preset
    pub fn spec(&self) -> &'static str {
        match self {
            FormatPreset::IdentifierArtistTitle => IDENTIFIER_ARTIST_TITLE,
            FormatPreset::ArtistTitle => ARTIST_TITLE,
            FormatPreset::CreatorFolder => CREATOR_FOLDER,
            FormatPreset::CreatorNestedIdentifier => CREATOR_NESTED,
        }
    }

    pub fn compile(&self) -> Result<CompiledPattern> {
        CompiledPattern::compile(self.spec())
    }
}
