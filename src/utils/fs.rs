//! Filesystem checks used to admit file path arguments

use std::path::Path;

/// Normalize an accepted extension to its dotted form (`"txt"` becomes `".txt"`).
///
/// Returns `None` for an empty extension.
pub fn normalize_extension(extension: &str) -> Option<String> {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    if bare.is_empty() {
        None
    } else {
        Some(format!(".{}", bare))
    }
}

/// Extension of `path` in dotted form, if it has one.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
}

/// Whether the extension of `path` is in `accepted`. An empty set accepts any path.
pub fn has_accepted_extension(path: &Path, accepted: &[String]) -> bool {
    if accepted.is_empty() {
        return true;
    }
    extension_of(path).is_some_and(|ext| accepted.iter().any(|a| *a == ext))
}

/// Whether `path` exists and is a regular file (symlinks are followed).
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}
