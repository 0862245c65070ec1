//! Kara Format Specifications
//!
//! Compiles user-written format specifications such as
//! `{creator}/**/{identifier} - {artist} - {title}` and uses them to pull
//! song metadata out of file paths in a karaoke library.
//!
//! # Pattern language
//!
//! - `{creator}`, `{identifier}`, `{artist}`, `{title}` capture text
//! - `*` alone as a folder matches exactly one folder; inside a segment it
//!   matches any run of characters
//! - `**` alone as a folder matches zero or more folders (at most once)
//! - everything else is literal, punctuation included
//!
//! # Architecture
//!
//! - `path`: splits patterns and candidate paths into segments
//! - `lexer` / `compile`: typed segments per folder level and file level
//! - `validate`: rejects ambiguous wildcard combinations
//! - `align`: maps pattern folders onto actual folders
//! - `matcher` / `metadata`: per-segment matching and result assembly
//! - `regex_view`: regex projection for diagnostics
//! - `cache` / `set`: memoized compilation and ordered fallback
//!
//! Everything here is pure: no filesystem access, no shared mutable state
//! outside [`PatternCache`].
//!
//! ```
//! let pattern = kara_pattern::compile("{identifier} - {artist} - {title}").unwrap();
//! let song = pattern
//!     .match_path("KFS-00602 - Morgan Wallen - Thinkin' Bout Me (Parody).mp4")
//!     .unwrap();
//! assert_eq!(song.artist_name.as_deref(), Some("Morgan Wallen"));
//! ```

mod error;
mod lexer;
mod matcher;
mod metadata;
mod types;
mod validate;

pub mod align;
pub mod cache;
pub mod compile;
pub mod path;
pub mod presets;
pub mod regex_view;
pub mod set;

pub use align::{align_folders, AlignedFolder};
pub use cache::{CacheStats, PatternCache};
pub use compile::{CompiledPattern, Piece, Segment};
pub use error::{NoMatch, PatternError};
pub use path::{split_path, CandidatePath};
pub use presets::FormatPreset;
pub use regex_view::get_regex_equivalent;
pub use set::{PatternSet, SetMatch};
pub use types::*;

/// Result type alias using `PatternError`
pub type Result<T> = std::result::Result<T, PatternError>;

/// Compile a format specification
pub fn compile(spec: &str) -> Result<CompiledPattern> {
    CompiledPattern::compile(spec)
}
