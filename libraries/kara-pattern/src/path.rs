//! Path normalization shared by patterns and candidate paths
//!
//! Both `/` and `\` separate segments. Empty segments from leading, trailing
//! or doubled separators are dropped, so `/a/b`, `a\b` and `a//b` are the same
//! logical path.

/// A candidate file path split into folders and a file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePath {
    /// Folder names, outermost first
    pub folders: Vec<String>,
    /// File name with its extension removed
    pub file_name: String,
}

/// Split a path into its non-empty segments
pub(crate) fn segments(path: &str) -> Vec<String> {
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a real file path for matching
pub fn split_path(path: &str) -> CandidatePath {
    let mut folders = segments(path);
    let file_name = folders
        .pop()
        .map(|last| strip_extension(&last).to_string())
        .unwrap_or_default();

    CandidatePath { folders, file_name }
}

/// Remove everything from the last `.` onwards
///
/// A leading dot (`.hidden`) is part of the name, not an extension.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    }
}

/// Remove a written-out extension from a pattern's file segment
///
/// `{title}.mp3` and `{title}.*` both lose their tail. A tail holding a
/// token, a wildcard mixed with text, or whitespace is part of the name
/// (`Mr. {title}`, `Mr. Brightside`) and is kept.
pub(crate) fn strip_pattern_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) if idx > 0 && is_extension(&file[idx + 1..]) => &file[..idx],
        _ => file,
    }
}

fn is_extension(tail: &str) -> bool {
    tail == "*"
        || !tail
            .chars()
            .any(|c| matches!(c, '{' | '}' | '*') || c.is_whitespace())
}
